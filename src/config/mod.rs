#[cfg(feature = "cli")]
pub mod cli;
pub mod context;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use context::{AppContext, DEFAULT_API_URL};
