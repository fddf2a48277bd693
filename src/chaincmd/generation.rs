//! Binary generation: which topology the chain binaries follow.

/// Binary topology of the target chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Generation {
    /// One binary acts as both daemon and client (Stargate and later).
    #[default]
    Unified,
    /// Separate daemon and client binaries, each with its own home (Launchpad).
    Split {
        client_binary: String,
        client_home: Option<String>,
    },
}

impl Generation {
    /// Split generation from a client binary name.
    ///
    /// An empty client binary yields [`Generation::Unified`], so a split
    /// generation always has a non-empty client binary.
    pub fn split(client_binary: impl Into<String>, client_home: Option<String>) -> Self {
        let client_binary = client_binary.into();
        if client_binary.is_empty() {
            return Generation::Unified;
        }
        Generation::Split {
            client_binary,
            client_home: client_home.filter(|h| !h.is_empty()),
        }
    }

    pub fn is_unified(&self) -> bool {
        matches!(self, Generation::Unified)
    }

    /// Name used in log lines and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Generation::Unified => "stargate",
            Generation::Split { .. } => "launchpad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_client_binary_is_unified() {
        assert_eq!(Generation::split("", Some("/cli".into())), Generation::Unified);
        assert!(Generation::default().is_unified());
    }

    #[test]
    fn empty_client_home_is_dropped() {
        let g = Generation::split("appcli", Some(String::new()));
        assert_eq!(
            g,
            Generation::Split {
                client_binary: "appcli".into(),
                client_home: None
            }
        );
        assert!(!g.is_unified());
    }
}
