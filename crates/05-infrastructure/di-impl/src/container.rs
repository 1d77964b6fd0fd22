//! 依赖注入容器
//!
//! 容器拥有注册表和共享缓存。普通解析写入共享缓存；带覆盖值的解析使用
//! 一次性缓存，用完即丢；[`ContainerView`] 则拥有自己的私有缓存。

use crate::cache::{InstanceCache, ResolutionCounters};
use crate::context::ResolutionContext;
use crate::registry::FactoryRegistryImpl;
use di_abstractions::{
    downcast_value, erase_factory, ContainerConfig, ContainerStats, FactoryEntry, FactoryRegistry,
    Overrides, Provender, Value,
};
use provender_common::DependencyResult;
use std::any::Any;
use std::cell::RefCell;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 具体的依赖注入容器实现
#[derive(Debug, Default)]
pub struct Container {
    config: ContainerConfig,
    registry: FactoryRegistryImpl,
    /// 共享缓存，与容器同生命周期
    cache: RefCell<InstanceCache>,
    counters: ResolutionCounters,
}

impl Container {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 注册工厂
    ///
    /// 返回同一个工厂的共享引用，测试中可以绕过容器直接调用它。
    pub fn provide<T, F>(&mut self, name: impl Into<String>, factory: F) -> DependencyResult<Arc<F>>
    where
        T: Any + Send + Sync,
        F: Fn(&dyn Provender) -> DependencyResult<T> + Send + Sync + 'static,
    {
        self.provide_shared(name, Arc::new(factory))
    }

    /// 注册已经包装在 `Arc` 中的工厂，原样返回该 `Arc`
    pub fn provide_shared<T, F>(
        &mut self,
        name: impl Into<String>,
        factory: Arc<F>,
    ) -> DependencyResult<Arc<F>>
    where
        T: Any + Send + Sync,
        F: Fn(&dyn Provender) -> DependencyResult<T> + Send + Sync + 'static,
    {
        let entry = FactoryEntry::new(name, erase_factory(Arc::clone(&factory)));
        self.registry.register(entry)?;
        Ok(factory)
    }

    /// 检查是否已注册
    pub fn has_factory(&self, name: &str) -> bool {
        self.registry.has_factory(name)
    }

    /// 解析组件并转型为 `T`
    pub fn get<T>(&self, name: &str) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        downcast_value(name, self.resolve(name)?)
    }

    /// 使用一次性覆盖值解析组件
    ///
    /// 本次调用使用独立的缓存，既不读取也不写入共享缓存。
    pub fn get_with_overrides<T>(&self, name: &str, overrides: &Overrides) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        downcast_value(name, self.resolve_with_overrides(name, overrides)?)
    }

    /// 使用一次性覆盖值解析组件（类型擦除）
    pub fn resolve_with_overrides(&self, name: &str, overrides: &Overrides) -> DependencyResult<Value> {
        let scratch = RefCell::new(InstanceCache::new());
        ResolutionContext::new(
            &self.config,
            &self.registry,
            &scratch,
            Some(overrides),
            &self.counters,
        )
        .resolve_root(name)
    }

    /// 创建绑定固定覆盖值的视图
    pub fn with_overrides(&self, overrides: Overrides) -> ContainerView<'_> {
        let view = ContainerView {
            id: Uuid::new_v4(),
            container: self,
            overrides,
            cache: RefCell::new(InstanceCache::new()),
            counters: ResolutionCounters::default(),
        };
        info!(
            container = %self.config.name,
            view = %view.id,
            overrides = ?view.overrides,
            "创建覆盖视图"
        );
        view
    }

    /// 获取统计信息
    pub fn stats(&self) -> ContainerStats {
        self.counters.snapshot(self.registry.len())
    }

    /// 共享缓存中的实例数量
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl Provender for Container {
    fn resolve(&self, name: &str) -> DependencyResult<Value> {
        ResolutionContext::new(
            &self.config,
            &self.registry,
            &self.cache,
            None,
            &self.counters,
        )
        .resolve_root(name)
    }
}

/// 绑定固定覆盖值和私有缓存的容器视图
///
/// 多次调用复用同一个私有缓存；它与原容器的共享缓存及其他视图互不影响。
#[derive(Debug)]
pub struct ContainerView<'a> {
    id: Uuid,
    container: &'a Container,
    overrides: Overrides,
    cache: RefCell<InstanceCache>,
    counters: ResolutionCounters,
}

impl ContainerView<'_> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// 解析组件并转型为 `T`
    pub fn get<T>(&self, name: &str) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        downcast_value(name, self.resolve(name)?)
    }

    /// 获取视图自身的统计信息
    pub fn stats(&self) -> ContainerStats {
        self.counters.snapshot(self.container.registry.len())
    }

    /// 私有缓存中的实例数量
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl Provender for ContainerView<'_> {
    fn resolve(&self, name: &str) -> DependencyResult<Value> {
        ResolutionContext::new(
            &self.container.config,
            &self.container.registry,
            &self.cache,
            Some(&self.overrides),
            &self.counters,
        )
        .resolve_root(name)
    }
}
