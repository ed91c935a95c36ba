//! 探索报告渲染模块
//!
//! 将目录元数据渲染为固定宽度的控制台文本。渲染与查询分离，
//! 全部写入 `String`，便于在测试中直接断言输出内容。

use crate::config::ExploreConfig;
use crate::explorer::types::{ColumnInfo, SampleRow, TableInfo};
use std::fmt::Write;
use std::path::Path;

/// 重点表：除结构外还输出抽样数据并检查期望列
pub const DISTINGUISHED_TABLES: [&str; 2] = ["Report", "Daily"];

/// Report 表的期望列
pub const REPORT_EXPECTED_COLUMNS: [&str; 5] =
    ["Year", "DryYield", "SowingDate", "HarvestDate", "CropSurvived"];

/// Daily 表的期望列
pub const DAILY_EXPECTED_COLUMNS: [&str; 5] =
    ["Date", "Year", "DryYield", "RadiationFactor", "WaterFactor"];

/// 查询重点表对应的期望列清单，非重点表返回 None
pub fn expected_columns(table: &str) -> Option<&'static [&'static str]> {
    match table {
        "Report" => Some(&REPORT_EXPECTED_COLUMNS),
        "Daily" => Some(&DAILY_EXPECTED_COLUMNS),
        _ => None,
    }
}

/// 横幅分隔线（80 个等号）
fn banner(out: &mut String) {
    out.push_str(&"=".repeat(80));
    out.push('\n');
}

/// 区块分隔线（80 个连字符）
fn rule(out: &mut String) {
    out.push_str(&"-".repeat(80));
    out.push('\n');
}

/// 按字符截断值，超长部分直接丢弃
///
/// 按字符而非字节截断，多字节文本不会被截成非法 UTF-8。
pub fn truncate_value(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// 为非负整数插入千位分隔符，例如 `1234567` -> `1,234,567`
pub fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// 数据库文件缺失时输出的单行错误信息
pub fn missing_database_line(path: &Path) -> String {
    format!("ERROR: Database file not found: {}", path.display())
}

/// 渲染报告头部：数据库文件名和完整路径
pub fn render_header(out: &mut String, db_path: &Path) {
    let file_name = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| db_path.display().to_string());

    banner(out);
    let _ = writeln!(out, "Exploring Database: {file_name}");
    let _ = writeln!(out, "Full Path: {}", db_path.display());
    banner(out);
}

/// 渲染表数量统计行
pub fn render_table_count(out: &mut String, tables: &[String]) {
    let _ = writeln!(
        out,
        "\nFound {} table(s): {}\n",
        tables.len(),
        tables.join(", ")
    );
}

/// 渲染单个表的结构区块：行数和逐列元数据
pub fn render_table_section(out: &mut String, table: &TableInfo) {
    banner(out);
    let _ = writeln!(out, "Table: {}", table.name);
    banner(out);
    let _ = writeln!(out, "Rows: {}", group_thousands(table.row_count));

    let _ = writeln!(out, "\nColumns ({}):", table.columns.len());
    rule(out);
    for col in &table.columns {
        let default = match &col.default_value {
            Some(value) => format!(" DEFAULT {value}"),
            None => String::new(),
        };
        let primary_key = if col.is_primary_key() { " PRIMARY KEY" } else { "" };
        let _ = writeln!(
            out,
            "  {:<30} {:<15} {:<10}{}{}",
            col.name,
            col.decl_type,
            col.nullability_token(),
            default,
            primary_key,
        );
    }
}

/// 渲染抽样区块的标题行和分隔线
pub fn render_sample_header(out: &mut String, explore: &ExploreConfig) {
    let _ = writeln!(out, "\nSample data (first {} rows):", explore.sample_rows);
    rule(out);
}

/// 渲染抽样数据区块：前若干列的表头和截断后的行值
pub fn render_sample_section(
    out: &mut String,
    table: &TableInfo,
    rows: &[SampleRow],
    explore: &ExploreConfig,
) {
    render_sample_header(out, explore);

    if rows.is_empty() {
        return;
    }

    let names = table.column_names();
    let shown = names.len().min(explore.max_display_columns);
    let hidden = names.len().saturating_sub(explore.max_display_columns);

    let _ = writeln!(out, "  {}", names[..shown].join(" | "));
    if hidden > 0 {
        let _ = writeln!(out, "  ... and {hidden} more columns");
    }

    for (i, row) in rows.iter().enumerate() {
        let values: Vec<String> = row
            .iter()
            .take(explore.max_display_columns)
            .map(|v| truncate_value(v, explore.value_truncate_len))
            .collect();
        let _ = writeln!(out, "  Row {}: {}", i + 1, values.join(" | "));
        if hidden > 0 {
            let _ = writeln!(out, "         ... ({hidden} more columns)");
        }
    }
}

/// 渲染抽样失败的警告行，运行不会因此中断
pub fn render_sample_warning(out: &mut String, err: &crate::error::ExploreError) {
    let _ = writeln!(out, "  WARNING: Could not fetch sample data: {err}");
}

/// 渲染汇总区块头部
pub fn render_summary_header(out: &mut String) {
    banner(out);
    let _ = writeln!(out, "Summary: Report and Daily Tables");
    banner(out);
}

/// 渲染单个重点表的汇总条目
///
/// `columns` 为 None 表示该表在数据库中不存在。
pub fn render_summary_entry(
    out: &mut String,
    table_name: &str,
    columns: Option<&[ColumnInfo]>,
) {
    let Some(columns) = columns else {
        let _ = writeln!(out, "\n{table_name} table: NOT FOUND in database");
        return;
    };

    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let _ = writeln!(out, "\n{table_name} table:");
    let _ = writeln!(out, "  Total columns: {}", names.len());
    let _ = writeln!(out, "  Column names: {}", names.join(", "));

    if let Some(expected) = expected_columns(table_name) {
        let missing: Vec<&str> = expected
            .iter()
            .copied()
            .filter(|col| !names.contains(col))
            .collect();
        if missing.is_empty() {
            let _ = writeln!(out, "  OK: All expected columns present");
        } else {
            let _ = writeln!(out, "  WARNING: Missing expected columns: {missing:?}");
        }
    }
}

/// 渲染结束横幅
pub fn render_completion(out: &mut String) {
    out.push('\n');
    banner(out);
    let _ = writeln!(out, "Exploration complete!");
    banner(out);
}
