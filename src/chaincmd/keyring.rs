use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chaincmd::CommandError;

/// Storage backend for the chain keyring (`--keyring-backend`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyringBackend {
    Os,
    File,
    Pass,
    /// Unencrypted, for local development only.
    Test,
    Kwallet,
}

impl KeyringBackend {
    /// Value as the chain binary expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyringBackend::Os => "os",
            KeyringBackend::File => "file",
            KeyringBackend::Pass => "pass",
            KeyringBackend::Test => "test",
            KeyringBackend::Kwallet => "kwallet",
        }
    }
}

impl fmt::Display for KeyringBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyringBackend {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "os" => Ok(KeyringBackend::Os),
            "file" => Ok(KeyringBackend::File),
            "pass" => Ok(KeyringBackend::Pass),
            "test" => Ok(KeyringBackend::Test),
            "kwallet" => Ok(KeyringBackend::Kwallet),
            other => Err(CommandError::UnknownKeyringBackend(other.to_string())),
        }
    }
}
