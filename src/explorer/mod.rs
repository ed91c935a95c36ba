//! 数据库结构探索模块
//!
//! 提供 SQLite 目录元数据的类型定义和只读查询功能

pub mod inspector;
pub mod types;

// 重新导出核心类型
pub use inspector::Inspector;
pub use types::{ColumnInfo, SampleRow, TableInfo};
