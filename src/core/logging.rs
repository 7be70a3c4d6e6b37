// src/core/logging.rs
use log::LevelFilter;

/// Level used until the config has been read.
pub const STARTUP_LEVEL: LevelFilter = LevelFilter::Info;

/// Installs `env_logger` before anything else runs, so warnings raised
/// while loading the config are not lost.
///
/// Returns `true` when `RUST_LOG` is set; that filter then wins over the
/// configured level.
pub fn init() -> bool {
    let from_env = std::env::var_os("RUST_LOG").is_some();

    // the logger lets everything through; the max level does the filtering
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_millis()
        .init();

    if !from_env {
        log::set_max_level(STARTUP_LEVEL);
    }
    from_env
}

/// Applies `general.log_level` once the config is known.
pub fn apply_level(level: &str) -> Option<LevelFilter> {
    match parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            log::debug!("Log level set to {}", filter);
            Some(filter)
        }
        None => {
            log::warn!("Unknown log level '{}', keeping {}", level, log::max_level());
            None
        }
    }
}

/// Level names plus the numeric shortcuts `0`-`5`.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "0" | "off" => Some(LevelFilter::Off),
        "1" | "error" => Some(LevelFilter::Error),
        "2" | "warn" | "warning" => Some(LevelFilter::Warn),
        "3" | "info" => Some(LevelFilter::Info),
        "4" | "debug" => Some(LevelFilter::Debug),
        "5" | "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
