pub mod config;
pub mod context;
pub mod logging;
pub mod shutdown;
mod error;

pub use config::{ConfigError, ConfigRecord, ConfigSchema, ConfigValue, Loader, TypeTag};
pub use context::AppContext;
pub use error::Error;
pub use logging::init_logging;
pub use shutdown::ShutdownFlag;
