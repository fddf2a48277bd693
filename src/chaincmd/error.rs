use thiserror::Error;

/// Errors raised while composing chain commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The operation does not exist for the configured binary generation.
    ///
    /// Indicates a caller bug, not a runtime condition.
    #[error("'{operation}' command doesn't exist for {generation} chains")]
    UnsupportedOperation {
        operation: &'static str,
        generation: &'static str,
    },

    #[error("Chain binary name must not be empty")]
    MissingBinary,

    #[error("Unknown keyring backend '{0}' (expected os, file, pass, test or kwallet)")]
    UnknownKeyringBackend(String),
}
