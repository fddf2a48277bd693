//! Chain configuration (`config.yml`) model, parsing and validation.
//!
//! Validation happens here, before any command is composed, so a
//! [`ChainCmd`](crate::chaincmd::ChainCmd) never sees an invalid config.

mod loader;
mod types;

pub use loader::{locate, ConfigError, FILE_NAMES};
pub use types::{Account, Config, Init, Servers, Validator};
