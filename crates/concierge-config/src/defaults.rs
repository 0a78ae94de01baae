use crate::delivery::DeliveryMode;
use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Balance the reference resource manager opens with.
pub const DEFAULT_OPENING_BALANCE: i32 = 0;

/// Seats available on every flight in the reference resource manager.
pub const DEFAULT_FLIGHT_CAPACITY: u32 = 2;

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default delivery mode between client and server.
pub fn default_delivery() -> DeliveryMode {
    DeliveryMode::Inline
}
