use serde::Serialize;
use std::fs;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DOCSITE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr subscriber.
///
/// `DOCSITE_LOG` wins over the config's `log_filter`; both fall back to
/// `warn`.
pub fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(config_filter.unwrap_or(DEFAULT_LOG_FILTER))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

pub fn read_json_file_or_exit<T>(path: &str, label: &str) -> T
where
    T: serde::de::DeserializeOwned,
{
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {label} at {path}: {e}");
        std::process::exit(2);
    });
    serde_json::from_slice::<T>(&bytes).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {label} JSON at {path}: {e}");
        std::process::exit(2);
    })
}

pub fn print_json_or_exit<T: Serialize>(value: &T, label: &str) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
