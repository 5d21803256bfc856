pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::KoyebClient;
pub use config::AppContext;
pub use crate::core::touch::{TouchEngine, TouchReport};
pub use utils::error::{Result, TouchError};
