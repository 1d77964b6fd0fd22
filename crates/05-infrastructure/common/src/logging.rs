//! 日志初始化

use crate::errors::{LoggingError, LoggingResult};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别或过滤指令，例如 `info`、`di_impl=debug`
    pub level: String,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示文件名和行号
    pub show_location: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            show_target: true,
            show_location: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            show_target: true,
            show_location: true,
            json_format: false,
        }
    }

    /// 覆盖日志级别
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// 解析过滤指令
    pub fn env_filter(&self) -> LoggingResult<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|e| LoggingError::InvalidLevel {
            level: self.level.clone(),
            message: e.to_string(),
        })
    }
}

/// 初始化全局日志订阅者
///
/// 全局订阅者只能设置一次，重复调用会返回 [`LoggingError::InitFailed`]。
pub fn init_logging(config: &LoggingConfig) -> LoggingResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(config.show_target)
        .with_file(config.show_location)
        .with_line_number(config.show_location);

    if config.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| LoggingError::InitFailed {
        message: e.to_string(),
    })?;

    info!("日志系统初始化完成");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_filter() {
        let config = LoggingConfig::default().with_level("di_impl=loud");
        assert!(matches!(
            config.env_filter(),
            Err(LoggingError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn development_preset_is_verbose() {
        let config = LoggingConfig::development();
        assert_eq!(config.level, "debug");
        assert!(config.show_location);
        assert!(config.env_filter().is_ok());
    }
}
