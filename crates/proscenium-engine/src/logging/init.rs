use std::sync::Once;

/// Filter used when neither `LoggingConfig::env_filter` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g.
/// `"proscenium_engine=trace"`. It takes precedence over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let result = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .try_init();

        match result {
            Ok(()) => log::debug!("logging initialized with filter {filter:?}"),
            Err(err) => eprintln!("proscenium: logger already installed: {err}"),
        }
    });
}
