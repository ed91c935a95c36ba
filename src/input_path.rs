//! 数据库路径解析
//!
//! 优先使用第一个命令行参数，否则回退到配置中拼接的默认路径。
//! 不读取环境变量，也不做交互式输入。

use crate::config::Config;
use std::env;
use std::path::PathBuf;

/// 获取数据库文件路径，优先命令行参数，否则使用配置默认值
pub fn resolve_db_path(config: &Config) -> PathBuf {
    let mut args = env::args().skip(1);
    if let Some(path) = args.next() {
        return PathBuf::from(path);
    }
    config.database.db_path()
}
