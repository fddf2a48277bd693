use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root of a chain's `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub validator: Validator,
    #[serde(default)]
    pub init: Init,
    /// Raw overrides merged into `genesis.json`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub genesis: HashMap<String, serde_yaml::Value>,
    #[serde(default)]
    pub servers: Servers,
}

impl Config {
    /// Find an account by its key name.
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.name == name)
    }
}

/// A key to create (or recover) and fund at genesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// Coins granted at genesis, e.g. `1000token`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coins: Vec<String>,
    /// Recover the key from this mnemonic instead of generating one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mnemonic: String,
    /// RPC address of the chain the account is issued at.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rpc_address: String,
}

/// Genesis validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    #[serde(default)]
    pub name: String,
    /// Self-delegation amount, e.g. `100000000stake`.
    #[serde(default)]
    pub staked: String,
}

/// Overrides applied when the node is initialised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Init {
    /// Overrides for `config/app.toml`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub app: HashMap<String, serde_yaml::Value>,
    /// Overrides for `config/config.toml`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, serde_yaml::Value>,
    /// Daemon home directory.
    #[serde(default)]
    pub home: String,
    /// Client home directory (split generation only).
    #[serde(default)]
    pub clihome: String,
}

/// Listen addresses of the servers started for the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Servers {
    #[serde(rename = "rpc-address", default)]
    pub rpc_addr: String,
    #[serde(rename = "p2p-address", default)]
    pub p2p_addr: String,
    #[serde(rename = "prof-address", default)]
    pub prof_addr: String,
    #[serde(rename = "grpc-address", default)]
    pub grpc_addr: String,
    #[serde(rename = "api-address", default)]
    pub api_addr: String,
    #[serde(rename = "frontend-address", default)]
    pub frontend_addr: String,
    #[serde(rename = "dev-ui-address", default)]
    pub dev_ui_addr: String,
}

impl Servers {
    /// Replace every empty address with its default.
    pub fn fill_defaults(&mut self) {
        let defaults = Servers::default();
        let pairs = [
            (&mut self.rpc_addr, defaults.rpc_addr),
            (&mut self.p2p_addr, defaults.p2p_addr),
            (&mut self.prof_addr, defaults.prof_addr),
            (&mut self.grpc_addr, defaults.grpc_addr),
            (&mut self.api_addr, defaults.api_addr),
            (&mut self.frontend_addr, defaults.frontend_addr),
            (&mut self.dev_ui_addr, defaults.dev_ui_addr),
        ];
        for (field, default) in pairs {
            if field.is_empty() {
                *field = default;
            }
        }
    }
}

impl Default for Servers {
    fn default() -> Self {
        Self {
            rpc_addr: "0.0.0.0:26657".to_string(),
            p2p_addr: "0.0.0.0:26656".to_string(),
            prof_addr: "localhost:6060".to_string(),
            grpc_addr: "0.0.0.0:9090".to_string(),
            api_addr: "0.0.0.0:1317".to_string(),
            frontend_addr: "localhost:8080".to_string(),
            dev_ui_addr: "localhost:12345".to_string(),
        }
    }
}
