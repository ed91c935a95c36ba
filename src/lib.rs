//! APSIM 数据库结构探索工具库
//!
//! 以只读方式打开单个 APSIM 产出的 SQLite 数据库文件，
//! 枚举全部表结构并输出格式化的诊断报告。

pub mod config;
pub mod error;
pub mod explorer;
pub mod input_path;
pub mod process;
pub mod report;

// 日志模块 - 需要 logging 功能
#[cfg(feature = "logging")]
pub mod logging;

// 重新导出核心类型和函数
pub use config::{Config, ExploreConfig};
pub use error::{ExploreError, Result};
pub use explorer::{ColumnInfo, Inspector, TableInfo};
pub use process::{ExploreOutcome, explore_database};
