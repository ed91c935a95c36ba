//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。

use std::path::PathBuf;

/// 数据库探索器的结果类型
pub type Result<T> = std::result::Result<T, ExploreError>;

/// 数据库探索错误类型
#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite错误
    #[error("SQLite错误: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// 配置文件解析错误
    #[error("配置解析错误: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// 配置文件序列化错误
    #[error("配置序列化错误: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 数据库文件不存在
    #[error("数据库文件不存在: {path}")]
    MissingDatabase { path: PathBuf },

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl ExploreError {
    /// 创建一个配置错误
    pub fn config<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("配置错误: {}", message);
        }
        Self::Config(message)
    }

    /// 创建一个数据库文件缺失错误
    pub fn missing_database<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("数据库文件不存在: {}", path.display());
        }
        Self::MissingDatabase { path }
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("未知错误: {}", message);
        }
        Self::Other(message)
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, ExploreError::Io(_))
    }

    /// 检查是否为 SQLite 错误
    pub fn is_sqlite_error(&self) -> bool {
        matches!(self, ExploreError::Sqlite(_))
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(self, ExploreError::Config(_))
    }

    /// 检查是否为数据库文件缺失错误
    pub fn is_missing_database(&self) -> bool {
        matches!(self, ExploreError::MissingDatabase { .. })
    }

    /// 检查是否为其他错误
    pub fn is_other_error(&self) -> bool {
        matches!(self, ExploreError::Other(_))
    }
}
