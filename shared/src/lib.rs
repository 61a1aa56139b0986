pub mod config;
pub mod errors;
pub mod telemetry;

pub use config::{BotConfig, DEFAULT_MINI_APP_URL};
pub use errors::{Result, ServiceError};
pub use telemetry::{
    init_metrics, init_tracing, install_panic_hook, record_counter, record_labeled_counter,
    record_timing,
};
