//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义工厂注册和惰性依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Provender`] - 依赖视图接口，工厂通过它按名称拉取依赖
//! - [`FactoryRegistry`] - 工厂注册表接口
//! - [`DependencyStack`] - 解析过程中的依赖栈，用于循环检测
//! - [`Overrides`] - 覆盖值映射

pub mod container;
pub mod factory;
pub mod overrides;
pub mod provender;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use factory::*;
pub use overrides::*;
pub use provender::*;
pub use registry::*;
pub use resolver::*;
