//! # 依赖注入具体实现
//!
//! 提供具体的依赖注入容器、工厂注册表和惰性解析器实现。
//!
//! ```
//! use di_impl::{Container, Overrides, ProvenderExt};
//!
//! let mut container = Container::new();
//! container.provide("Water", |_| Ok(true)).unwrap();
//! container.provide("Sunlight", |_| Ok(true)).unwrap();
//! container
//!     .provide("Peaches", |deps| {
//!         Ok(*deps.get::<bool>("Water")? && *deps.get::<bool>("Sunlight")?)
//!     })
//!     .unwrap();
//!
//! assert!(*container.get::<bool>("Peaches").unwrap());
//!
//! let dry = Overrides::new().with("Water", false);
//! assert!(!*container.get_with_overrides::<bool>("Peaches", &dry).unwrap());
//! ```

mod cache;
mod context;
pub mod container;
pub mod registry;

pub use cache::InstanceCache;
pub use container::{Container, ContainerView};
pub use registry::FactoryRegistryImpl;

pub use di_abstractions::{ContainerConfig, ContainerStats, Overrides, Provender, ProvenderExt, Value};
pub use provender_common::{DependencyError, DependencyResult};
