//! 实例缓存与统计计数

use di_abstractions::{ContainerStats, Value};
use std::cell::Cell;
use std::collections::HashMap;

/// 名称到已构造实例的缓存
///
/// 已写入的值在缓存生命周期内不会被覆盖。
#[derive(Default)]
pub struct InstanceCache {
    instances: HashMap<String, Value>,
}

impl InstanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.instances.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// 写入实例，若名称已存在则保留旧值并返回旧值
    pub fn insert_once(&mut self, name: &str, value: Value) -> Value {
        self.instances
            .entry(name.to_string())
            .or_insert(value)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl std::fmt::Debug for InstanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.instances.keys().collect();
        names.sort_unstable();
        f.debug_struct("InstanceCache").field("names", &names).finish()
    }
}

/// 解析计数器
#[derive(Debug, Default)]
pub(crate) struct ResolutionCounters {
    constructed: Cell<usize>,
    cache_hits: Cell<usize>,
    override_hits: Cell<usize>,
    errors: Cell<usize>,
}

impl ResolutionCounters {
    pub(crate) fn record_construction(&self) {
        bump(&self.constructed);
    }

    pub(crate) fn record_cache_hit(&self) {
        bump(&self.cache_hits);
    }

    pub(crate) fn record_override_hit(&self) {
        bump(&self.override_hits);
    }

    pub(crate) fn record_error(&self) {
        bump(&self.errors);
    }

    pub(crate) fn snapshot(&self, registered_factories: usize) -> ContainerStats {
        ContainerStats {
            registered_factories,
            constructed_components: self.constructed.get(),
            cache_hits: self.cache_hits.get(),
            override_hits: self.override_hits.get(),
            resolution_errors: self.errors.get(),
        }
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}
