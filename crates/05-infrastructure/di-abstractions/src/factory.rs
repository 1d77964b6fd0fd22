//! 组件工厂抽象
//!
//! 工厂是接收 [`Provender`] 并返回组件实例的函数。

use crate::provender::{Provender, Value};
use provender_common::DependencyResult;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除后的工厂函数
pub type FactoryFn = Arc<dyn Fn(&dyn Provender) -> DependencyResult<Value> + Send + Sync>;

/// 擦除工厂的返回类型
///
/// 返回的函数持有 `factory` 的共享引用，调用方手里的 `Arc<F>` 依然指向同一个工厂。
pub fn erase_factory<T, F>(factory: Arc<F>) -> FactoryFn
where
    T: Any + Send + Sync,
    F: Fn(&dyn Provender) -> DependencyResult<T> + Send + Sync + 'static,
{
    Arc::new(move |provender: &dyn Provender| {
        factory(provender).map(|instance| Arc::new(instance) as Value)
    })
}

/// 组件注册信息
#[derive(Clone)]
pub struct FactoryEntry {
    /// 注册名称
    pub name: String,
    /// 工厂函数
    pub factory: FactoryFn,
}

impl FactoryEntry {
    /// 创建新的注册信息
    pub fn new(name: impl Into<String>, factory: FactoryFn) -> Self {
        Self {
            name: name.into(),
            factory,
        }
    }

    /// 调用工厂
    pub fn invoke(&self, provender: &dyn Provender) -> DependencyResult<Value> {
        (self.factory)(provender)
    }
}

impl std::fmt::Debug for FactoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryEntry")
            .field("name", &self.name)
            .field("factory", &"<function>")
            .finish()
    }
}
