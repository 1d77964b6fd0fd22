//! 解析上下文
//!
//! 一次顶层解析对应一个上下文：它持有自己的依赖栈，并借用当前层级的缓存。
//! 工厂拿到的 [`Provender`] 就是这个上下文，工厂读取依赖时递归回到
//! [`ResolutionContext::resolve`]。

use crate::cache::{InstanceCache, ResolutionCounters};
use crate::registry::FactoryRegistryImpl;
use di_abstractions::{
    ContainerConfig, DependencyStack, FactoryRegistry, Overrides, Provender, StackGuard, Value,
};
use provender_common::{DependencyError, DependencyResult};
use std::cell::RefCell;
use std::time::Instant;
use tracing::{debug, trace};

/// 单次解析的上下文
pub(crate) struct ResolutionContext<'a> {
    pub(crate) config: &'a ContainerConfig,
    pub(crate) registry: &'a FactoryRegistryImpl,
    pub(crate) cache: &'a RefCell<InstanceCache>,
    pub(crate) overrides: Option<&'a Overrides>,
    pub(crate) counters: &'a ResolutionCounters,
    pub(crate) stack: RefCell<DependencyStack>,
}

impl<'a> ResolutionContext<'a> {
    pub(crate) fn new(
        config: &'a ContainerConfig,
        registry: &'a FactoryRegistryImpl,
        cache: &'a RefCell<InstanceCache>,
        overrides: Option<&'a Overrides>,
        counters: &'a ResolutionCounters,
    ) -> Self {
        Self {
            config,
            registry,
            cache,
            overrides,
            counters,
            stack: RefCell::new(DependencyStack::new()),
        }
    }

    /// 顶层入口：名称必须已注册，即使它同时被覆盖
    pub(crate) fn resolve_root(&self, name: &str) -> DependencyResult<Value> {
        if !self.registry.has_factory(name) {
            self.counters.record_error();
            return Err(DependencyError::unregistered(name));
        }
        self.resolve(name)
    }

    fn construct(&self, name: &str) -> DependencyResult<Value> {
        let _frame = StackGuard::enter(&self.stack, name)?;

        let cached = self.cache.borrow().get(name);
        if let Some(value) = cached {
            trace!(container = %self.config.name, "命中缓存: {}", name);
            self.counters.record_cache_hit();
            return Ok(value);
        }

        let entry = self
            .registry
            .factory(name)
            .ok_or_else(|| DependencyError::unregistered(name))?;

        let started = Instant::now();
        // 工厂调用期间不持有任何缓存借用，工厂可以递归解析
        let value = entry.invoke(self)?;
        if self.config.log_resolutions {
            debug!(
                container = %self.config.name,
                depth = self.stack.borrow().depth(),
                elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
                "构造组件: {}",
                name
            );
        }

        self.counters.record_construction();
        Ok(self.cache.borrow_mut().insert_once(name, value))
    }
}

impl Provender for ResolutionContext<'_> {
    fn resolve(&self, name: &str) -> DependencyResult<Value> {
        if let Some(value) = self.overrides.and_then(|overrides| overrides.value(name)) {
            trace!(container = %self.config.name, "使用覆盖值: {}", name);
            self.counters.record_override_hit();
            return Ok(value);
        }

        self.construct(name).map_err(|e| {
            // 嵌套解析的错误只在最外层计数一次
            if self.stack.borrow().is_empty() {
                self.counters.record_error();
            }
            e
        })
    }
}
