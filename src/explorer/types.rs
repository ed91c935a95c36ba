//! 表和列的描述符类型
//!
//! 这些类型仅在一次探索运行中短暂存在，打印后即被丢弃。

use serde::Serialize;

/// 抽样行：按列顺序字符串化后的单元格值
pub type SampleRow = Vec<String>;

/// 单个列的描述符，来自 `PRAGMA table_info` 的一行
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    /// 列序号（目录中的 cid）
    pub cid: i64,
    /// 列名
    pub name: String,
    /// 声明类型（可能为空字符串）
    pub decl_type: String,
    /// 是否带 NOT NULL 约束
    pub not_null: bool,
    /// 默认值（无默认值时为 None）
    pub default_value: Option<String>,
    /// 主键位置，0 表示不属于主键
    pub pk_position: i64,
}

impl ColumnInfo {
    /// 是否属于主键
    pub fn is_primary_key(&self) -> bool {
        self.pk_position > 0
    }

    /// 可空性标记，用于报告输出
    pub fn nullability_token(&self) -> &'static str {
        if self.not_null { "NOT NULL" } else { "NULL" }
    }
}

/// 单个表的描述符
#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    /// 表名
    pub name: String,
    /// 总行数
    pub row_count: i64,
    /// 按目录顺序排列的列描述符
    pub columns: Vec<ColumnInfo>,
}

impl TableInfo {
    /// 按目录顺序返回所有列名
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
