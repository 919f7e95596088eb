pub mod config;
pub mod error;
pub mod logging;
pub mod origin;
pub mod routing;
mod string_enum;
pub mod value;

pub use config::{ConsumerBinding, ExchangeConfig, LoggingConfig};
pub use error::{ExchangeError, ExchangeResult};
pub use logging::init_logging;
pub use origin::ModuleOrigin;
pub use routing::RoutingKey;
pub use value::{payload_from_json, payload_to_json, DataValue, Payload};
