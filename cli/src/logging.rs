use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `NN_MUL_LOG_LEVEL`; `NN_MUL_LOG_FORMAT` selects `pretty` (default) or
/// `compact`. Logs go to stderr so that stdout only carries results.
pub fn init() -> Result<()> {
    let log_level = env::var("NN_MUL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("NN_MUL_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    match log_format.as_str() {
        "compact" => builder.compact().with_target(true).try_init(),
        _ => builder.with_target(false).try_init(),
    }
    .map_err(|e| anyhow!(e))
}
