//! # Provender Common
//!
//! Provender 各个 crate 共用的错误类型、配置加载和日志初始化。
//!
//! ## 核心组件
//!
//! - [`DependencyError`] - 依赖注入错误
//! - [`load_settings`] - 基于 `config` 的分层配置加载
//! - [`init_logging`] - 基于 `tracing-subscriber` 的日志初始化

pub mod configuration;
pub mod errors;
pub mod logging;

pub use configuration::*;
pub use errors::*;
pub use logging::*;
