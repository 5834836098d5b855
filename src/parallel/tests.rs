use super::*;

// =========================================================================
// Thread Count Tests
// =========================================================================

#[test]
fn test_half_of_even() {
    assert_eq!(half_of(16), 8);
    assert_eq!(half_of(2), 1);
}

#[test]
fn test_half_of_odd_floors() {
    assert_eq!(half_of(7), 3);
    assert_eq!(half_of(3), 1);
}

#[test]
fn test_half_of_never_zero() {
    assert_eq!(half_of(0), 1);
    assert_eq!(half_of(1), 1);
}

#[test]
fn test_available_threads_positive() {
    assert!(available_threads() >= 1);
}

// =========================================================================
// ThreadConfig Tests
// =========================================================================

#[test]
fn test_thread_config_new() {
    let config = ThreadConfig::new(4).expect("test");
    assert_eq!(config.num_threads(), 4);
    assert_eq!(config.threshold(), PARALLEL_THRESHOLD);
}

#[test]
fn test_thread_config_zero_rejected() {
    let result = ThreadConfig::new(0);
    assert!(matches!(result, Err(VecsumError::InvalidThreadCount(0))));
}

#[test]
fn test_thread_config_single() {
    let config = ThreadConfig::single();
    assert_eq!(config.num_threads(), 1);
}

#[test]
fn test_thread_config_default_is_half_available() {
    let config = ThreadConfig::default();
    assert_eq!(config.num_threads(), half_of(available_threads()));
    assert!(config.num_threads() >= 1);
}

#[test]
fn test_thread_config_with_threshold() {
    let config = ThreadConfig::single().with_threshold(8);
    assert_eq!(config.threshold(), 8);
    assert_eq!(config.num_threads(), 1);
}

// =========================================================================
// Dispatch Resolution Tests
// =========================================================================

#[test]
fn test_resolve_auto_below_threshold() {
    let config = ThreadConfig::single().with_threshold(100);
    assert_eq!(config.resolve(DispatchMode::Auto, 99), Dispatch::Sequential);
    assert_eq!(config.resolve(DispatchMode::Auto, 0), Dispatch::Sequential);
}

#[test]
fn test_resolve_auto_at_threshold() {
    let config = ThreadConfig::single().with_threshold(100);
    assert_eq!(config.resolve(DispatchMode::Auto, 100), Dispatch::Parallel);
    assert_eq!(config.resolve(DispatchMode::Auto, 101), Dispatch::Parallel);
}

#[test]
fn test_resolve_auto_fixed_operands_sequential() {
    let config = ThreadConfig::default();
    assert_eq!(
        config.resolve(DispatchMode::Auto, crate::data::LEN),
        Dispatch::Sequential
    );
}

#[test]
fn test_resolve_forced_modes_ignore_threshold() {
    let config = ThreadConfig::single().with_threshold(100);
    assert_eq!(config.resolve(DispatchMode::Parallel, 1), Dispatch::Parallel);
    assert_eq!(
        config.resolve(DispatchMode::Sequential, 1_000_000),
        Dispatch::Sequential
    );
}

#[test]
fn test_dispatch_display() {
    assert_eq!(Dispatch::Sequential.to_string(), "sequential");
    assert_eq!(Dispatch::Parallel.to_string(), "parallel");
}

#[test]
fn test_dispatch_mode_default_auto() {
    assert_eq!(DispatchMode::default(), DispatchMode::Auto);
}

#[test]
fn test_dispatch_serde_lowercase() {
    let json = serde_json::to_string(&Dispatch::Parallel).expect("test");
    assert_eq!(json, "\"parallel\"");
    let mode: DispatchMode = serde_json::from_str("\"sequential\"").expect("test");
    assert_eq!(mode, DispatchMode::Sequential);
}

// =========================================================================
// Pool Construction Tests
// =========================================================================

#[test]
fn test_build_pool_matches_config() {
    let config = ThreadConfig::new(3).expect("test");
    let pool = config.build_pool().expect("test");
    assert_eq!(pool.current_num_threads(), 3);
}

#[test]
fn test_build_pool_thread_names() {
    let pool = ThreadConfig::new(2)
        .expect("test")
        .build_pool()
        .expect("test");
    let name = pool.install(|| std::thread::current().name().map(str::to_owned));
    let name = name.expect("worker threads are named");
    assert!(name.starts_with("vecsum-worker-"), "got {name}");
}

// =========================================================================
// ThreadConfig Serde Tests
// =========================================================================

#[test]
fn test_thread_config_deserialize_zero_rejected() {
    let result = serde_json::from_str::<ThreadConfig>(r#"{"num_threads":0,"threshold":0}"#);
    let err = result.expect_err("zero worker count must not deserialize");
    assert!(err.to_string().contains("must be at least 1"), "got {err}");
}

#[test]
fn test_thread_config_deserialize_valid() {
    let config: ThreadConfig =
        serde_json::from_str(r#"{"num_threads":3,"threshold":64}"#).expect("test");
    assert_eq!(config, ThreadConfig::new(3).expect("test").with_threshold(64));
}

#[test]
fn test_thread_config_deserialize_default_threshold() {
    let config: ThreadConfig = serde_json::from_str(r#"{"num_threads":2}"#).expect("test");
    assert_eq!(config.threshold(), PARALLEL_THRESHOLD);
}

#[test]
fn test_thread_config_serde_round_trip() {
    let config = ThreadConfig::new(5).expect("test").with_threshold(10);
    let json = serde_json::to_string(&config).expect("test");
    let back: ThreadConfig = serde_json::from_str(&json).expect("test");
    assert_eq!(back, config);
}
