//! 依赖视图抽象
//!
//! 工厂通过 [`Provender`] 按名称拉取自身依赖，读取即触发惰性构造。

use provender_common::{DependencyError, DependencyResult};
use std::any::Any;
use std::sync::Arc;

/// 类型擦除后的组件实例
pub type Value = Arc<dyn Any + Send + Sync>;

/// 依赖视图 trait
///
/// 解析上下文、容器、容器视图以及 [`crate::Overrides`] 都实现了此 trait，
/// 所以同一个工厂既可以交给容器调用，也可以在测试中直接调用。
pub trait Provender {
    /// 按名称解析组件
    fn resolve(&self, name: &str) -> DependencyResult<Value>;
}

/// [`Provender`] 的类型化访问扩展
pub trait ProvenderExt: Provender {
    /// 解析并向下转型为 `T`
    fn get<T>(&self, name: &str) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        downcast_value(name, self.resolve(name)?)
    }

    /// 解析并克隆出 `T` 的值
    fn get_cloned<T>(&self, name: &str) -> DependencyResult<T>
    where
        T: Any + Send + Sync + Clone,
    {
        self.get::<T>(name).map(|value| T::clone(&value))
    }
}

impl<P: Provender + ?Sized> ProvenderExt for P {}

/// 将类型擦除的实例转型为具体类型
pub fn downcast_value<T>(name: &str, value: Value) -> DependencyResult<Arc<T>>
where
    T: Any + Send + Sync,
{
    value
        .downcast::<T>()
        .map_err(|_| DependencyError::TypeMismatch {
            name: name.to_string(),
            expected: std::any::type_name::<T>(),
        })
}
