//! 配置加载
//!
//! 文件配置在下，环境变量在上，后者覆盖前者。

use crate::errors::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// 环境变量中嵌套键的分隔符，例如 `PROVENDER_CONTAINER__NAME`
pub const ENV_SEPARATOR: &str = "__";

/// 加载配置并绑定到具体类型
///
/// `path` 为 `None` 时只读取环境变量；显式给出但不存在的文件会报错，
/// 文件格式由扩展名决定（TOML 或 JSON）。
pub fn load_settings<T>(path: Option<&Path>, env_prefix: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        debug!("添加配置文件: {}", path.display());
        builder = builder.add_source(config::File::from(path));
    }

    debug!("添加环境变量配置源，前缀: {}", env_prefix);
    builder = builder.add_source(
        config::Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR),
    );

    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}
