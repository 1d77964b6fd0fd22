//! 容器端到端场景测试
use di_abstractions::{ContainerConfig, ContainerStats};
use di_impl::{Container, DependencyResult, Overrides, Provender, ProvenderExt};
use provender_common::{load_settings, ConfigError};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
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

fn melian_factory(deps: &dyn Provender) -> DependencyResult<Melian> {
    Ok(Melian {
        peaches: deps.get_cloned::<bool>("Peaches")?,
    })
}

fn orchard() -> Container {
    init_test_logger();
    let mut container = Container::with_config(ContainerConfig::named("orchard").log_resolutions(true));
    container.provide("Melian", melian_factory).unwrap();
    container
        .provide("Peaches", |deps| {
            Ok(*deps.get::<bool>("Water")? && *deps.get::<bool>("Sunlight")?)
        })
        .unwrap();
    container.provide("Water", |_| Ok(true)).unwrap();
    container.provide("Sunlight", |_| Ok(true)).unwrap();
    container
}

#[test]
fn test_provides_peaches() {
    let container = orchard();
    let melian = container.get::<Melian>("Melian").unwrap();
    assert_eq!(melian.report_on_peach_situation(), "PEACHES");
}

#[test]
fn test_peaches_override() {
    let container = orchard();
    let overrides = Overrides::new().with("Peaches", false);

    let melian = container.get_with_overrides::<Melian>("Melian", &overrides).unwrap();
    assert_eq!(melian.report_on_peach_situation(), "not enough peaches :(");

    // 覆盖不污染共享缓存
    let melian = container.get::<Melian>("Melian").unwrap();
    assert_eq!(melian.report_on_peach_situation(), "PEACHES");
}

#[test]
fn test_drought_reaches_melian_through_peaches() {
    let container = orchard();
    let drought = container.with_overrides(Overrides::new().with("Water", false));

    let melian = drought.get::<Melian>("Melian").unwrap();
    assert_eq!(melian.report_on_peach_situation(), "not enough peaches :(");
    assert_eq!(drought.stats().override_hits, 1);
}

#[test]
fn test_factory_invoked_directly_with_test_doubles() {
    let mut container = Container::new();
    let melian = container.provide("Melian", melian_factory).unwrap();

    let melian = (*melian)(&Overrides::new().with("Peaches", false)).unwrap();
    assert_eq!(melian.report_on_peach_situation(), "not enough peaches :(");
}

#[test]
fn test_sum_with_overrides_does_not_pollute_cache() {
    init_test_logger();
    let mut container = Container::new();
    container.provide("A", |_| Ok(5_i64)).unwrap();
    container.provide("B", |_| Ok(7_i64)).unwrap();
    container
        .provide("Sum", |deps| Ok(*deps.get::<i64>("A")? + *deps.get::<i64>("B")?))
        .unwrap();

    let overrides = Overrides::new().with("A", 3_i64).with("B", 4_i64);
    assert_eq!(*container.get_with_overrides::<i64>("Sum", &overrides).unwrap(), 7);
    assert_eq!(*container.get::<i64>("Sum").unwrap(), 12);

    let view = container.with_overrides(Overrides::new().with("A", 3_i64));
    assert_eq!(*view.get::<i64>("Sum").unwrap(), 10);
    assert_eq!(*view.get::<i64>("Sum").unwrap(), 10);
    assert_eq!(*container.get::<i64>("Sum").unwrap(), 12);
}

#[test]
fn test_statistics_after_scenario() {
    let container = orchard();
    container.get::<Melian>("Melian").unwrap();
    container.get::<Melian>("Melian").unwrap();
    container.get::<bool>("Peaches").unwrap();

    assert_eq!(
        container.stats(),
        ContainerStats {
            registered_factories: 4,
            constructed_components: 4,
            cache_hits: 2,
            override_hits: 0,
            resolution_errors: 0,
        }
    );

    let json = serde_json::to_value(container.stats()).unwrap();
    assert_eq!(json["constructed_components"], 4);
}

#[test]
fn test_shared_instance_across_get_calls() {
    let builds = Arc::new(AtomicUsize::new(0));
    let mut container = Container::new();
    let counter = Arc::clone(&builds);
    container
        .provide("Pool", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["conn-1".to_string(), "conn-2".to_string()])
        })
        .unwrap();
    container
        .provide("Users", |deps| deps.get::<Vec<String>>("Pool"))
        .unwrap();
    container
        .provide("Orders", |deps| deps.get::<Vec<String>>("Pool"))
        .unwrap();

    let users = container.get::<Arc<Vec<String>>>("Users").unwrap();
    let orders = container.get::<Arc<Vec<String>>>("Orders").unwrap();
    assert!(Arc::ptr_eq(&*users, &*orders));
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_container_config_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "name = \"orchard\"\nlog_resolutions = true").unwrap();

    let config: ContainerConfig = load_settings(Some(file.path()), "PROVENDER_IT").unwrap();
    assert_eq!(config, ContainerConfig::named("orchard").log_resolutions(true));

    let container = Container::with_config(config);
    assert_eq!(container.config().name, "orchard");
}

#[test]
fn test_missing_config_file() {
    let result: Result<ContainerConfig, ConfigError> =
        load_settings(Some(std::path::Path::new("/no/such/provender.toml")), "PROVENDER_IT");
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}
