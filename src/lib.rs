//! Command composition for Cosmos SDK chain binaries.
//!
//! The library never runs anything. Every operation produces an
//! [`chaincmd::Invocation`] (program + ordered arguments) which a process
//! runner executes on the caller's side.
//!
//! ```text
//! config.yml → ChainCmdConfig → ChainCmd → Invocation → runner
//! ```

pub mod chaincmd;
pub mod config;
pub mod faucet;
pub mod logging;
