//! 依赖栈与循环检测
//!
//! 每次顶层解析都持有一个依赖栈，记录正在构造的名称。

use provender_common::{DependencyError, DependencyResult};
use std::cell::RefCell;
use tracing::warn;

/// 正在构造中的名称序列
///
/// 栈中名称互不相同；试图再次压入已在栈中的名称即为循环依赖。
#[derive(Debug, Clone, Default)]
pub struct DependencyStack {
    chain: Vec<String>,
}

impl DependencyStack {
    /// 创建空的依赖栈
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查名称是否可以进入构造
    pub fn ensure_acyclic(&self, name: &str) -> DependencyResult<()> {
        if self.contains(name) {
            let mut chain = self.chain.clone();
            chain.push(name.to_string());
            warn!("检测到循环依赖: {}", chain.join(" -> "));
            return Err(DependencyError::CyclicDependency { chain });
        }
        Ok(())
    }

    /// 将名称压入栈
    pub fn push(&mut self, name: &str) -> DependencyResult<()> {
        self.ensure_acyclic(name)?;
        self.chain.push(name.to_string());
        Ok(())
    }

    /// 弹出栈顶名称
    pub fn pop(&mut self) -> Option<String> {
        self.chain.pop()
    }

    /// 名称是否正在构造
    pub fn contains(&self, name: &str) -> bool {
        self.chain.iter().any(|entry| entry == name)
    }

    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// 当前依赖链
    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

/// 依赖栈守卫
///
/// 创建时压栈，析构时出栈。工厂返回错误甚至 panic 时也会出栈。
#[must_use = "守卫被丢弃时会立即出栈"]
pub struct StackGuard<'a> {
    stack: &'a RefCell<DependencyStack>,
}

impl<'a> StackGuard<'a> {
    /// 压入名称并返回守卫
    pub fn enter(stack: &'a RefCell<DependencyStack>, name: &str) -> DependencyResult<Self> {
        stack.borrow_mut().push(name)?;
        Ok(Self { stack })
    }
}

impl Drop for StackGuard<'_> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}
