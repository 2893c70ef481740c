use env_logger::{Builder, Env};

use crate::config::DEFAULT_LOG_FILTER;

/// Log level comes from `RUST_LOG`, falling back to warnings only.
pub fn init() {
	Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
		.format_timestamp(None)
		.init();
}
