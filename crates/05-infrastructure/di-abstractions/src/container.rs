//! 容器配置与统计信息

use serde::{Deserialize, Serialize};

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 容器名称，出现在日志字段中
    pub name: String,
    /// 是否为每次构造记录耗时日志
    pub log_resolutions: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            log_resolutions: false,
        }
    }
}

impl ContainerConfig {
    /// 创建指定名称的配置
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 设置是否记录构造耗时
    pub fn log_resolutions(mut self, enabled: bool) -> Self {
        self.log_resolutions = enabled;
        self
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStats {
    /// 已注册工厂数量
    pub registered_factories: usize,
    /// 工厂实际被调用并成功构造的次数
    pub constructed_components: usize,
    /// 命中缓存的解析次数
    pub cache_hits: usize,
    /// 命中覆盖值的解析次数
    pub override_hits: usize,
    /// 解析错误数量
    pub resolution_errors: usize,
}
