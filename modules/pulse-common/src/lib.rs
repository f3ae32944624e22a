pub mod types;
pub mod config;
pub mod error;
pub mod format;

pub use types::*;
pub use config::Config;
pub use error::PulseError;
pub use format::*;
