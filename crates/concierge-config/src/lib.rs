//! Shared configuration for the Concierge command dispatcher.
//!
//! Configuration is layered by [`ortho_config`]: built-in defaults, then an
//! optional TOML file (`--config-path` or `CONCIERGE_CONFIG_PATH`), then
//! `CONCIERGE_*` environment variables, and finally command-line flags. The
//! resulting [`Config`] governs telemetry, the client-to-server delivery
//! mode, and the seed values of the reference resource manager.

mod defaults;
mod delivery;
mod logging;

pub use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_FLIGHT_CAPACITY, DEFAULT_LOG_FILTER, DEFAULT_OPENING_BALANCE, default_delivery,
    default_log_filter_string, default_log_format,
};
pub use delivery::{DeliveryMode, DeliveryModeParseError};
pub use logging::{LogFormat, LogFormatParseError};

/// Runtime configuration shared by the CLI and the dispatch core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "CONCIERGE")]
pub struct Config {
    /// `tracing` filter expression applied to the telemetry subscriber.
    #[ortho_config(default = defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Output format of the telemetry subscriber.
    #[ortho_config(default = defaults::default_log_format())]
    pub log_format: LogFormat,
    /// Transport used between the client and the server.
    #[ortho_config(default = defaults::default_delivery())]
    pub delivery: DeliveryMode,
    /// Balance the reference resource manager starts from.
    #[ortho_config(default = DEFAULT_OPENING_BALANCE)]
    pub opening_balance: i32,
    /// Seats on each flight of the reference resource manager.
    #[ortho_config(default = DEFAULT_FLIGHT_CAPACITY)]
    pub flight_capacity: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            delivery: default_delivery(),
            opening_balance: DEFAULT_OPENING_BALANCE,
            flight_capacity: DEFAULT_FLIGHT_CAPACITY,
        }
    }
}

impl Config {
    /// Returns the telemetry filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the telemetry output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the configured delivery mode.
    #[must_use]
    pub const fn delivery(&self) -> DeliveryMode {
        self.delivery
    }

    /// Returns the opening balance of the reference resource manager.
    #[must_use]
    pub const fn opening_balance(&self) -> i32 {
        self.opening_balance
    }

    /// Returns the per-flight seat count of the reference resource manager.
    #[must_use]
    pub const fn flight_capacity(&self) -> u32 {
        self.flight_capacity
    }
}
