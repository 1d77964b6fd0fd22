//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置加载失败: {source}")]
    LoadFailed {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 日志初始化错误类型
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("日志级别无效: {level}, 原因: {message}")]
    InvalidLevel { level: String, message: String },

    #[error("日志初始化失败: {message}")]
    InitFailed { message: String },
}

/// 依赖注入错误类型
///
/// 所有错误都在触发调用处同步返回，容器内部不会吞掉或重试任何错误。
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("参数无效: `{name}`, 原因: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("不能覆盖已注册的工厂: `{name}`")]
    DuplicateRegistration { name: String },

    #[error("没有为 `{name}` 注册工厂")]
    UnregisteredName { name: String },

    #[error("检测到循环依赖: {}", .chain.join(" -> "))]
    CyclicDependency {
        /// 按遍历顺序排列的依赖链，末尾是重复进入的名称
        chain: Vec<String>,
    },

    #[error("组件类型不匹配: `{name}`, 期望类型: {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("组件创建失败: `{name}`, 原因: {source}")]
    ComponentCreationFailed {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DependencyError {
    /// 创建参数无效错误
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// 创建未注册错误
    pub fn unregistered(name: impl Into<String>) -> Self {
        Self::UnregisteredName { name: name.into() }
    }

    /// 创建组件创建失败错误，供工厂报告自身的失败
    pub fn creation_failed(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ComponentCreationFailed {
            name: name.into(),
            source: source.into(),
        }
    }

    /// 循环依赖链（仅对 [`DependencyError::CyclicDependency`] 有值）
    pub fn cycle(&self) -> Option<&[String]> {
        match self {
            Self::CyclicDependency { chain } => Some(chain),
            _ => None,
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type LoggingResult<T> = Result<T, LoggingError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
