//! 配置管理模块
//!
//! 提供统一的配置文件读取和管理功能。
//! 默认值对应 ClimAdapt 项目 Anameka 农场的一次历史气候模拟运行。

use crate::error::{ExploreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认数据库根目录
pub const DEFAULT_BASE_DIR: &str = "ClimAdapt";
/// 默认农场名称
pub const DEFAULT_FARM_NAME: &str = "Anameka";
/// 默认坐标（纬度_经度）
pub const DEFAULT_COORDINATE: &str = "-31.75_117.60";
/// 默认数据库文件名
pub const DEFAULT_DB_FILE_NAME: &str = "ClimAdapt_Wheat_neg31.75_117.60_past.db";

/// 主配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    pub log: LogSettings,
    /// 数据库路径配置
    pub database: DatabaseConfig,
    /// 探索行为配置
    pub explore: ExploreConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// 是否启用控制台输出
    pub enable_stdout: bool,
    /// 日志输出目录
    pub log_dir: String,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 数据库路径配置
///
/// 完整路径按 `base_dir / farm_name / {coordinate}_APSIM / db_file_name` 拼接，
/// 与 APSIM 模拟输出的目录布局保持一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库根目录
    pub base_dir: String,
    /// 农场名称（一级子目录）
    pub farm_name: String,
    /// 坐标字符串，例如 `-31.75_117.60`
    pub coordinate: String,
    /// 数据库文件名
    pub db_file_name: String,
}

impl DatabaseConfig {
    /// 坐标子目录名，坐标后固定追加 `_APSIM` 后缀
    pub fn coordinate_dir(&self) -> String {
        format!("{}_APSIM", self.coordinate)
    }

    /// 拼接出完整的数据库文件路径
    pub fn db_path(&self) -> PathBuf {
        Path::new(&self.base_dir)
            .join(&self.farm_name)
            .join(self.coordinate_dir())
            .join(&self.db_file_name)
    }
}

/// 探索行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// 每个重点表抽样的最大行数
    pub sample_rows: usize,
    /// 抽样输出时最多展示的列数
    pub max_display_columns: usize,
    /// 单元格值的最大展示长度（字符数）
    pub value_truncate_len: usize,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 字符串加载配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        match self.log.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ExploreError::config(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        // 路径四段均不能为空
        if self.database.base_dir.is_empty()
            || self.database.farm_name.is_empty()
            || self.database.coordinate.is_empty()
            || self.database.db_file_name.is_empty()
        {
            return Err(ExploreError::config("数据库路径配置不能为空"));
        }

        if self.explore.sample_rows == 0 {
            return Err(ExploreError::config("抽样行数不能为0"));
        }
        if self.explore.max_display_columns == 0 {
            return Err(ExploreError::config("展示列数不能为0"));
        }
        if self.explore.value_truncate_len == 0 {
            return Err(ExploreError::config("截断长度不能为0"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogSettings {
                enable_stdout: true,
                log_dir: "logs".to_string(),
                level: "info".to_string(),
            },
            database: DatabaseConfig {
                base_dir: DEFAULT_BASE_DIR.to_string(),
                farm_name: DEFAULT_FARM_NAME.to_string(),
                coordinate: DEFAULT_COORDINATE.to_string(),
                db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            },
            explore: ExploreConfig::default(),
        }
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            sample_rows: 3,
            max_display_columns: 10,
            value_truncate_len: 20,
        }
    }
}
