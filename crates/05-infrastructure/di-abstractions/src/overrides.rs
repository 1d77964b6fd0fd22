//! 覆盖值
//!
//! 覆盖值在其作用域内优先于已注册的工厂。它们被视为已构造完成的实例，
//! 不会进入依赖栈，也不会写入任何缓存。

use crate::provender::{Provender, Value};
use provender_common::{DependencyError, DependencyResult};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// 名称到字面值的覆盖映射
#[derive(Clone, Default)]
pub struct Overrides {
    values: HashMap<String, Value>,
}

impl Overrides {
    /// 创建空的覆盖映射
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加覆盖值（构建器风格）
    pub fn with<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.insert(name, value);
        self
    }

    /// 添加已擦除类型的覆盖值
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// 插入覆盖值，返回被替换的旧值
    pub fn insert<T>(&mut self, name: impl Into<String>, value: T) -> Option<Value>
    where
        T: Any + Send + Sync,
    {
        self.values.insert(name.into(), Arc::new(value))
    }

    /// 查找覆盖值
    pub fn value(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 被覆盖的名称
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for Overrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Overrides").field("names", &names).finish()
    }
}

impl FromIterator<(String, Value)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Overrides {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

/// 只由覆盖值组成的依赖视图，用于绕过容器直接调用工厂
impl Provender for Overrides {
    fn resolve(&self, name: &str) -> DependencyResult<Value> {
        self.value(name)
            .ok_or_else(|| DependencyError::unregistered(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provender::ProvenderExt;

    #[test]
    fn builder_collects_values() {
        let overrides = Overrides::new().with("A", 3_i64).with("B", 4_i64);
        assert_eq!(overrides.len(), 2);
        assert!(overrides.contains("A"));
        assert!(!overrides.contains("C"));
        assert_eq!(overrides.get_cloned::<i64>("B").unwrap(), 4);
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut overrides = Overrides::new();
        assert!(overrides.insert("Peaches", true).is_none());
        assert!(overrides.insert("Peaches", false).is_some());
        assert!(!overrides.get_cloned::<bool>("Peaches").unwrap());
    }

    #[test]
    fn missing_name_is_unregistered() {
        let overrides = Overrides::new();
        assert!(overrides.is_empty());
        assert!(matches!(
            overrides.resolve("Water"),
            Err(DependencyError::UnregisteredName { .. })
        ));
    }

    #[test]
    fn collects_from_erased_pairs() {
        let overrides: Overrides = vec![("Water".to_string(), Arc::new(true) as Value)]
            .into_iter()
            .collect();
        assert_eq!(format!("{overrides:?}"), r#"Overrides { names: ["Water"] }"#);
    }
}
