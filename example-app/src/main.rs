//! # 示例应用程序
//!
//! 演示如何使用 Provender 容器注册工厂、惰性解析依赖以及使用覆盖值

use anyhow::Context;
use clap::Parser;
use di_abstractions::ContainerConfig;
use di_impl::{Container, DependencyResult, Overrides, Provender, ProvenderExt};
use provender_common::{init_logging, load_settings, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// 可以在命令行中关掉的名称
const SWITCHABLE: [&str; 3] = ["Water", "Sunlight", "Peaches"];

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "provender-demo")]
#[command(about = "Provender 示例应用")]
struct Args {
    /// 配置文件路径（TOML 或 JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，覆盖配置文件中的设置
    #[arg(long)]
    log_level: Option<String>,

    /// 将指定名称覆盖为 false，可重复使用
    #[arg(long = "without", value_name = "NAME")]
    without: Vec<String>,

    /// 以 JSON 格式输出统计信息
    #[arg(long)]
    json: bool,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    container: ContainerConfig,
    logging: LoggingConfig,
}

/// 果园的守护者
#[derive(Debug)]
struct Melian {
    peaches: bool,
}

impl Melian {
    fn report_on_peach_situation(&self) -> &'static str {
        if self.peaches {
            "PEACHES"
        } else {
            "not enough peaches :("
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config: AppConfig =
        load_settings(args.config.as_deref(), "PROVENDER").context("加载配置失败")?;
    if let Some(level) = &args.log_level {
        config.logging = config.logging.with_level(level.clone());
    }
    init_logging(&config.logging).context("初始化日志失败")?;

    info!("启动 Provender 示例应用");

    let container = build_orchard(config.container)?;

    let melian = container.get::<Melian>("Melian")?;
    println!("默认解析: {}", melian.report_on_peach_situation());

    let overrides = build_overrides(&args.without);
    if !overrides.is_empty() {
        let view = container.with_overrides(overrides);
        let melian = view.get::<Melian>("Melian")?;
        println!("覆盖后解析: {}", melian.report_on_peach_situation());
        print_stats("视图统计", &view.stats(), args.json)?;
    }

    print_stats("容器统计", &container.stats(), args.json)?;
    info!("应用已退出");
    Ok(())
}

/// 构建示例容器
fn build_orchard(config: ContainerConfig) -> DependencyResult<Container> {
    info!("构建容器: {}", config.name);
    let mut container = Container::with_config(config);

    container.provide("Melian", |deps: &dyn Provender| {
        Ok(Melian {
            peaches: deps.get_cloned::<bool>("Peaches")?,
        })
    })?;
    container.provide("Peaches", |deps: &dyn Provender| {
        Ok(deps.get_cloned::<bool>("Water")? && deps.get_cloned::<bool>("Sunlight")?)
    })?;
    container.provide("Water", |_: &dyn Provender| Ok(true))?;
    container.provide("Sunlight", |_: &dyn Provender| Ok(true))?;

    Ok(container)
}

/// 将命令行中的名称转换为覆盖值
fn build_overrides(names: &[String]) -> Overrides {
    let mut overrides = Overrides::new();
    for name in names {
        if SWITCHABLE.contains(&name.as_str()) {
            overrides.insert(name.clone(), false);
        } else {
            warn!("忽略未知名称: {}，可选值: {}", name, SWITCHABLE.join(", "));
        }
    }
    overrides
}

fn print_stats(title: &str, stats: &di_abstractions::ContainerStats, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{title}: {}", serde_json::to_string(stats)?);
    } else {
        println!("{title}: {stats:?}");
    }
    Ok(())
}
