//! 探索流程编排模块
//!
//! 串联路径检查、连接打开、逐表遍历、汇总检查和连接关闭，
//! 产出完整的报告文本。流程严格顺序执行，单连接单线程。

use crate::config::ExploreConfig;
use crate::error::{ExploreError, Result};
use crate::explorer::Inspector;
use crate::report;
use std::path::Path;
use std::time::Instant;

/// 一次探索运行的结果
#[derive(Debug, Clone)]
pub struct ExploreOutcome {
    /// 完整的报告文本
    pub report: String,
    /// 数据库中的表数量
    pub table_count: usize,
}

/// 探索单个数据库文件并生成报告
///
/// # 参数
/// * `path` - 数据库文件路径
/// * `explore` - 抽样行数、展示列数等行为配置
///
/// # 返回
/// * `Ok(ExploreOutcome)` - 报告文本和表数量
///
/// # Errors
/// * 文件不存在时返回 `ExploreError::MissingDatabase`，不会打开连接
/// * 其他数据库错误（文件损坏、权限不足等）原样向上传播
///
/// # 行为说明
/// - 表按字母顺序遍历，每个表输出行数和列元数据
/// - 重点表（Report / Daily）且行数大于 0 时额外抽样输出，
///   抽样失败仅在报告中记一条警告，不会中断整个运行
/// - 最后对两个重点表做期望列检查并输出汇总
pub fn explore_database<P: AsRef<Path>>(
    path: P,
    explore: &ExploreConfig,
) -> Result<ExploreOutcome> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ExploreError::missing_database(path));
    }

    let start = Instant::now();
    let inspector = Inspector::open(path)?;
    let mut out = String::new();

    report::render_header(&mut out, path);

    let tables = inspector.table_names()?;
    report::render_table_count(&mut out, &tables);

    for table_name in &tables {
        let info = inspector.table_info(table_name)?;
        report::render_table_section(&mut out, &info);

        // 重点表抽样；抽样失败是唯一可恢复的错误
        if report::DISTINGUISHED_TABLES.contains(&table_name.as_str())
            && info.row_count > 0
        {
            match inspector.sample_rows(table_name, explore.sample_rows) {
                Ok(rows) => {
                    report::render_sample_section(&mut out, &info, &rows, explore);
                }
                Err(err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("表 {} 抽样失败: {}", table_name, err);
                    report::render_sample_header(&mut out, explore);
                    report::render_sample_warning(&mut out, &err);
                }
            }
        }

        out.push('\n');
    }

    report::render_summary_header(&mut out);
    for table_name in report::DISTINGUISHED_TABLES {
        if tables.iter().any(|t| t == table_name) {
            // 汇总前重新读取列元数据
            let columns = inspector.columns(table_name)?;
            report::render_summary_entry(&mut out, table_name, Some(&columns));
        } else {
            report::render_summary_entry(&mut out, table_name, None);
        }
    }

    inspector.close()?;
    report::render_completion(&mut out);

    #[cfg(feature = "logging")]
    tracing::info!(
        "探索完成，共 {} 个表，耗时: {:.2?}",
        tables.len(),
        start.elapsed()
    );
    #[cfg(not(feature = "logging"))]
    let _ = start;

    Ok(ExploreOutcome {
        report: out,
        table_count: tables.len(),
    })
}
