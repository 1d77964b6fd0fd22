//! 工厂注册表抽象接口

use crate::factory::FactoryEntry;
use provender_common::{DependencyError, DependencyResult};

/// 工厂注册表 trait
///
/// 注册是只写一次的：同名的第二次注册必须失败，已注册的工厂保持不变。
pub trait FactoryRegistry {
    /// 注册工厂
    fn register(&mut self, entry: FactoryEntry) -> DependencyResult<()>;

    /// 按名称查找工厂
    fn factory(&self, name: &str) -> Option<&FactoryEntry>;

    /// 检查是否已注册
    fn has_factory(&self, name: &str) -> bool {
        self.factory(name).is_some()
    }

    /// 已注册工厂数量
    fn len(&self) -> usize;

    /// 注册表是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 校验注册名称
pub fn validate_name(name: &str) -> DependencyResult<()> {
    if name.trim().is_empty() {
        return Err(DependencyError::invalid_argument(
            name,
            "注册名称不能为空",
        ));
    }
    Ok(())
}
