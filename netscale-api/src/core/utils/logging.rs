use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::new(format!(
        "netscale={},netscale_api={},netscale_cli={},netscale_benchmark={}",
        log_level, log_level, log_level, log_level
    ))
}

pub fn init_global_logger(log_level: String) {
    let filter = get_log_env(log_level);
    let registry = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::NONE),
        );
    // a subscriber may already be installed, e.g. by another test in the same binary
    let _ = registry.try_init();
}

pub fn global_info_logger() {
    init_global_logger(DEFAULT_LOG_LEVEL.to_string())
}

pub fn global_debug_logger() {
    init_global_logger("DEBUG".to_string())
}

pub fn global_trace_logger() {
    init_global_logger("TRACE".to_string())
}
