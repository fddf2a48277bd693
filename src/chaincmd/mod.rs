//! Command builder for Cosmos SDK chain binaries.
//!
//! [`ChainCmd`] turns node operations (init, keys, gentx, ...) into
//! [`Invocation`]s for either binary generation:
//!
//! ```text
//! operation tokens → option composer → attachment policies → routing → Invocation
//! ```
//!
//! Routing is the only place that looks at [`Generation`]:
//!
//! - daemon routing: always `app_cmd` + daemon `--home`
//! - client routing: daemon routing when unified, otherwise the client
//!   binary + client `--home`

mod attach;
mod error;
mod generation;
mod gentx;
mod invocation;
mod keyring;

use std::fmt;

pub use attach::{attach_chain_id, attach_flag, attach_home, attach_keyring_backend};
pub use error::CommandError;
pub use generation::Generation;
pub use gentx::{compose as compose_gentx_options, GentxOption};
pub use invocation::Invocation;
pub use keyring::KeyringBackend;

use crate::config::Config;
use attach::OPTION_HOME_CLIENT;

const COMMAND_START: &str = "start";
const COMMAND_INIT: &str = "init";
const COMMAND_KEYS: &str = "keys";
const COMMAND_ADD_GENESIS_ACCOUNT: &str = "add-genesis-account";
const COMMAND_GENTX: &str = "gentx";
const COMMAND_COLLECT_GENTXS: &str = "collect-gentxs";
const COMMAND_VALIDATE_GENESIS: &str = "validate-genesis";
const COMMAND_SHOW_NODE_ID: &str = "show-node-id";
const COMMAND_CONFIG: &str = "config";
const COMMAND_REST_SERVER: &str = "rest-server";

const OPTION_OUTPUT: &str = "--output";
const OPTION_RECOVER: &str = "--recover";
const OPTION_ADDRESS: &str = "--address";
const OPTION_AMOUNT: &str = "--amount";
const OPTION_NAME: &str = "--name";
const OPTION_UNSAFE_CORS: &str = "--unsafe-cors";
const OPTION_LADDR: &str = "--laddr";
const OPTION_NODE: &str = "--node";

const CONST_TENDERMINT: &str = "tendermint";
const CONST_JSON: &str = "json";

/// Fixed settings for a [`ChainCmd`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChainCmdConfig {
    /// Daemon binary; also the client in the unified generation.
    pub app_cmd: String,
    pub chain_id: Option<String>,
    /// Daemon home directory.
    pub home: Option<String>,
    pub keyring_backend: Option<KeyringBackend>,
    /// Keyring unlock secret. Not attached to any command yet.
    pub keyring_password: Option<String>,
    pub generation: Generation,
    /// RPC address override for client commands talking to a non-default node.
    pub node_address: Option<String>,
}

impl ChainCmdConfig {
    pub fn new(app_cmd: impl Into<String>) -> Self {
        Self {
            app_cmd: app_cmd.into(),
            ..Self::default()
        }
    }

    /// Seed home directories from the chain's `config.yml`.
    ///
    /// `init.clihome` only applies when a client binary is given; without one
    /// the chain is unified and has no client home.
    pub fn from_chain_config(
        app_cmd: impl Into<String>,
        cli_cmd: Option<&str>,
        conf: &Config,
    ) -> Self {
        Self {
            app_cmd: app_cmd.into(),
            home: non_empty_str(&conf.init.home),
            generation: Generation::split(
                cli_cmd.unwrap_or_default(),
                non_empty_str(&conf.init.clihome),
            ),
            ..Self::default()
        }
    }

    fn normalized(self) -> Self {
        let generation = match self.generation {
            Generation::Unified => Generation::Unified,
            Generation::Split {
                client_binary,
                client_home,
            } => Generation::split(client_binary, client_home),
        };
        Self {
            app_cmd: self.app_cmd,
            chain_id: non_empty(self.chain_id),
            home: non_empty(self.home),
            keyring_backend: self.keyring_backend,
            keyring_password: non_empty(self.keyring_password),
            generation,
            node_address: non_empty(self.node_address),
        }
    }
}

impl fmt::Debug for ChainCmdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCmdConfig")
            .field("app_cmd", &self.app_cmd)
            .field("chain_id", &self.chain_id)
            .field("home", &self.home)
            .field("keyring_backend", &self.keyring_backend)
            .field(
                "keyring_password",
                &self.keyring_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("generation", &self.generation)
            .field("node_address", &self.node_address)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_str(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Builds [`Invocation`]s for one chain.
///
/// Configuration is fixed once the builder is constructed; every method is
/// pure and the builder can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainCmd {
    config: ChainCmdConfig,
}

impl ChainCmd {
    /// Unified-generation builder for `app_cmd` with no optional settings.
    ///
    /// `app_cmd` is taken as is; an empty name yields invocations with an
    /// empty program. Use [`ChainCmd::from_config`] to have it checked.
    pub fn new(app_cmd: impl Into<String>) -> Self {
        Self {
            config: ChainCmdConfig::new(app_cmd),
        }
    }

    /// Validate and adopt a full configuration. Empty optional strings are
    /// treated as absent.
    pub fn from_config(config: ChainCmdConfig) -> Result<Self, CommandError> {
        if config.app_cmd.is_empty() {
            return Err(CommandError::MissingBinary);
        }
        Ok(Self {
            config: config.normalized(),
        })
    }

    /// Daemon home directory.
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.config.home = non_empty(Some(home.into()));
        self
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.config.chain_id = non_empty(Some(chain_id.into()));
        self
    }

    pub fn with_keyring_backend(mut self, backend: KeyringBackend) -> Self {
        self.config.keyring_backend = Some(backend);
        self
    }

    pub fn with_keyring_password(mut self, password: impl Into<String>) -> Self {
        self.config.keyring_password = non_empty(Some(password.into()));
        self
    }

    /// Switch to the split generation with a separate client binary.
    /// An empty `client_binary` keeps the builder unified.
    pub fn with_split_generation(
        mut self,
        client_binary: impl Into<String>,
        client_home: Option<String>,
    ) -> Self {
        self.config.generation = Generation::split(client_binary, client_home);
        self
    }

    pub fn with_node_address(mut self, address: impl Into<String>) -> Self {
        self.config.node_address = non_empty(Some(address.into()));
        self
    }

    pub fn config(&self) -> &ChainCmdConfig {
        &self.config
    }

    pub fn generation(&self) -> &Generation {
        &self.config.generation
    }

    pub fn node_address(&self) -> Option<&str> {
        self.config.node_address.as_deref()
    }

    pub fn keyring_password(&self) -> Option<&str> {
        self.config.keyring_password.as_deref()
    }

    /// `start [extra...]`, passthrough flags kept verbatim.
    pub fn start_command<I, S>(&self, extra: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = vec![COMMAND_START.to_string()];
        args.extend(extra.into_iter().map(Into::into));
        self.daemon_command(args)
    }

    /// `init <moniker> [--chain-id]`
    pub fn init_command(&self, moniker: &str) -> Invocation {
        let args = tokens(&[COMMAND_INIT, moniker]);
        let args = attach_chain_id(args, self.config.chain_id.as_deref());
        self.daemon_command(args)
    }

    /// `keys add <name> --output json`
    pub fn add_key_command(&self, account_name: &str) -> Invocation {
        let args = tokens(&[COMMAND_KEYS, "add", account_name, OPTION_OUTPUT, CONST_JSON]);
        self.keys_command(args)
    }

    /// `keys add <name> --recover`; the mnemonic is read from stdin.
    pub fn import_key_command(&self, account_name: &str) -> Invocation {
        let args = tokens(&[COMMAND_KEYS, "add", account_name, OPTION_RECOVER]);
        self.keys_command(args)
    }

    /// `keys show <name> --address`
    pub fn show_key_address_command(&self, account_name: &str) -> Invocation {
        let args = tokens(&[COMMAND_KEYS, "show", account_name, OPTION_ADDRESS]);
        self.keys_command(args)
    }

    /// `keys list --output json`
    pub fn list_keys_command(&self) -> Invocation {
        let args = tokens(&[COMMAND_KEYS, "list", OPTION_OUTPUT, CONST_JSON]);
        self.keys_command(args)
    }

    /// `add-genesis-account <address> <coins>`
    pub fn add_genesis_account_command(&self, address: &str, coins: &str) -> Invocation {
        let args = tokens(&[COMMAND_ADD_GENESIS_ACCOUNT, address, coins]);
        self.daemon_command(args)
    }

    /// Generate a genesis transaction for `validator_name` self-delegating
    /// `self_delegation`. The grammar depends on the generation.
    pub fn gentx_command(
        &self,
        validator_name: &str,
        self_delegation: &str,
        options: &[GentxOption],
    ) -> Invocation {
        match &self.config.generation {
            Generation::Unified => self.unified_gentx(validator_name, self_delegation, options),
            Generation::Split { client_home, .. } => self.split_gentx(
                validator_name,
                self_delegation,
                client_home.as_deref(),
                options,
            ),
        }
    }

    /// `collect-gentxs`
    pub fn collect_gentxs_command(&self) -> Invocation {
        self.daemon_command(tokens(&[COMMAND_COLLECT_GENTXS]))
    }

    /// `validate-genesis`
    pub fn validate_genesis_command(&self) -> Invocation {
        self.daemon_command(tokens(&[COMMAND_VALIDATE_GENESIS]))
    }

    /// `tendermint show-node-id`
    pub fn show_node_id_command(&self) -> Invocation {
        self.daemon_command(tokens(&[CONST_TENDERMINT, COMMAND_SHOW_NODE_ID]))
    }

    /// `config <name> <value>` on the client binary. Split generation only.
    pub fn set_config_command(&self, name: &str, value: &str) -> Result<Invocation, CommandError> {
        let (client, client_home) = self.require_split(COMMAND_CONFIG)?;
        let args = tokens(&[COMMAND_CONFIG, name, value]);
        Ok(emit(client, attach_home(args, client_home)))
    }

    /// `rest-server --unsafe-cors --laddr <api> --node <rpc>`. Split generation only.
    pub fn rest_server_command(
        &self,
        api_address: &str,
        rpc_address: &str,
    ) -> Result<Invocation, CommandError> {
        let (client, client_home) = self.require_split(COMMAND_REST_SERVER)?;
        let args = tokens(&[
            COMMAND_REST_SERVER,
            OPTION_UNSAFE_CORS,
            OPTION_LADDR,
            api_address,
            OPTION_NODE,
            rpc_address,
        ]);
        Ok(emit(client, attach_home(args, client_home)))
    }

    fn unified_gentx(
        &self,
        validator_name: &str,
        self_delegation: &str,
        options: &[GentxOption],
    ) -> Invocation {
        let args = tokens(&[COMMAND_GENTX, validator_name, OPTION_AMOUNT, self_delegation]);
        let args = compose_gentx_options(args, options);
        let args = attach_chain_id(args, self.config.chain_id.as_deref());
        let args = attach_keyring_backend(args, self.config.keyring_backend);
        self.daemon_command(args)
    }

    fn split_gentx(
        &self,
        validator_name: &str,
        self_delegation: &str,
        client_home: Option<&str>,
        options: &[GentxOption],
    ) -> Invocation {
        let args = tokens(&[
            COMMAND_GENTX,
            OPTION_NAME,
            validator_name,
            OPTION_AMOUNT,
            self_delegation,
        ]);
        let args = attach_flag(args, OPTION_HOME_CLIENT, client_home);
        let args = compose_gentx_options(args, options);
        let args = attach_keyring_backend(args, self.config.keyring_backend);
        self.daemon_command(args)
    }

    fn keys_command(&self, args: Vec<String>) -> Invocation {
        let args = attach_keyring_backend(args, self.config.keyring_backend);
        self.client_command(args)
    }

    fn daemon_command(&self, args: Vec<String>) -> Invocation {
        emit(&self.config.app_cmd, attach_home(args, self.config.home.as_deref()))
    }

    fn client_command(&self, args: Vec<String>) -> Invocation {
        match &self.config.generation {
            Generation::Unified => self.daemon_command(args),
            Generation::Split {
                client_binary,
                client_home,
            } => emit(client_binary, attach_home(args, client_home.as_deref())),
        }
    }

    fn require_split(&self, operation: &'static str) -> Result<(&str, Option<&str>), CommandError> {
        match &self.config.generation {
            Generation::Split {
                client_binary,
                client_home,
            } => Ok((client_binary.as_str(), client_home.as_deref())),
            Generation::Unified => {
                tracing::error!(
                    operation,
                    app = %self.config.app_cmd,
                    "command is not available for unified chain binaries"
                );
                Err(CommandError::UnsupportedOperation {
                    operation,
                    generation: self.config.generation.name(),
                })
            }
        }
    }
}

fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn emit(program: &str, args: Vec<String>) -> Invocation {
    tracing::debug!(program, args = ?args, "Composed chain command");
    Invocation::new(program, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_rejects_empty_binary() {
        let err = ChainCmd::from_config(ChainCmdConfig::default()).unwrap_err();
        assert_eq!(err, CommandError::MissingBinary);
    }

    #[test]
    fn new_keeps_binary_unchecked_until_from_config() {
        let cmd = ChainCmd::new("");
        assert_eq!(cmd.validate_genesis_command().program(), "");
        let err = ChainCmd::from_config(cmd.config().clone()).unwrap_err();
        assert_eq!(err, CommandError::MissingBinary);
    }

    #[test]
    fn chain_config_empty_homes_are_absent() {
        let conf = Config::default();
        let cfg = ChainCmdConfig::from_chain_config("appd", Some("appcli"), &conf);
        assert_eq!(cfg.home, None);
        assert_eq!(
            cfg.generation,
            Generation::Split {
                client_binary: "appcli".into(),
                client_home: None,
            }
        );
    }

    #[test]
    fn from_config_treats_empty_strings_as_absent() {
        let cmd = ChainCmd::from_config(ChainCmdConfig {
            app_cmd: "appd".into(),
            chain_id: Some(String::new()),
            home: Some(String::new()),
            generation: Generation::Split {
                client_binary: String::new(),
                client_home: Some("/cli".into()),
            },
            ..ChainCmdConfig::default()
        })
        .unwrap();
        assert!(cmd.generation().is_unified());
        assert_eq!(cmd.init_command("m").args(), ["init", "m"]);
    }

    #[test]
    fn debug_redacts_keyring_password() {
        let cmd = ChainCmd::new("appd").with_keyring_password("hunter2");
        let rendered = format!("{:?}", cmd);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
        assert_eq!(cmd.keyring_password(), Some("hunter2"));
    }

    #[test]
    fn unsupported_operation_names_generation() {
        let err = ChainCmd::new("appd").rest_server_command("a", "b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'rest-server' command doesn't exist for stargate chains"
        );
    }
}
