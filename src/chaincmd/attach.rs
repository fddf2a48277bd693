//! Flag attachment policies.
//!
//! Each policy appends at most one `flag value` pair to the tail of the
//! argument list and leaves everything already present untouched. An absent
//! or empty value means the flag is omitted.

use crate::chaincmd::KeyringBackend;

pub(crate) const OPTION_HOME: &str = "--home";
pub(crate) const OPTION_HOME_CLIENT: &str = "--home-client";
pub(crate) const OPTION_CHAIN_ID: &str = "--chain-id";
pub(crate) const OPTION_KEYRING_BACKEND: &str = "--keyring-backend";

/// Append `flag value` when `value` is present and non-empty.
pub fn attach_flag(mut args: Vec<String>, flag: &str, value: Option<&str>) -> Vec<String> {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
    args
}

/// `--chain-id <id>`
pub fn attach_chain_id(args: Vec<String>, chain_id: Option<&str>) -> Vec<String> {
    attach_flag(args, OPTION_CHAIN_ID, chain_id)
}

/// `--keyring-backend <backend>`
pub fn attach_keyring_backend(args: Vec<String>, backend: Option<KeyringBackend>) -> Vec<String> {
    attach_flag(args, OPTION_KEYRING_BACKEND, backend.map(|b| b.as_str()))
}

/// `--home <dir>`; the caller picks the daemon or client home.
pub fn attach_home(args: Vec<String>, home: Option<&str>) -> Vec<String> {
    attach_flag(args, OPTION_HOME, home)
}
