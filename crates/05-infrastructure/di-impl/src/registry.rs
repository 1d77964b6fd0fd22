//! 工厂注册表实现

use di_abstractions::{validate_name, FactoryEntry, FactoryRegistry};
use provender_common::{DependencyError, DependencyResult};
use std::collections::HashMap;
use tracing::{info, warn};

/// 基于 `HashMap` 的只追加注册表
#[derive(Debug, Default)]
pub struct FactoryRegistryImpl {
    entries: HashMap<String, FactoryEntry>,
}

impl FactoryRegistryImpl {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }
}

impl FactoryRegistry for FactoryRegistryImpl {
    fn register(&mut self, entry: FactoryEntry) -> DependencyResult<()> {
        validate_name(&entry.name)?;

        if self.entries.contains_key(&entry.name) {
            warn!("拒绝重复注册: {}", entry.name);
            return Err(DependencyError::DuplicateRegistration { name: entry.name });
        }

        info!("注册工厂: {}", entry.name);
        self.entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    fn factory(&self, name: &str) -> Option<&FactoryEntry> {
        self.entries.get(name)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
