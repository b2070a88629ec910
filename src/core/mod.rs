pub mod config;
pub mod error;

pub use config::{load_config, ConfigUpdate, ProfessionConfig};
pub use error::{ProfessionError, Result};
