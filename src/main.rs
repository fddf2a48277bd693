//! `chaincmd`: print the exact command line for a chain node operation.
//!
//! Dry run only: the composed invocation is written to stdout and never
//! executed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chaincmd::chaincmd::{
    ChainCmd, ChainCmdConfig, Generation, GentxOption, Invocation, KeyringBackend,
};
use chaincmd::config::{locate, Config};
use chaincmd::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "chaincmd",
    version,
    about = "Compose command lines for Cosmos SDK chain binaries"
)]
struct Cli {
    /// Chain daemon binary (e.g. appd)
    app: String,

    /// Chain config.yml, or a directory containing one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Daemon home directory
    #[arg(long, value_name = "DIR")]
    home: Option<String>,

    /// Chain ID attached to init and gentx
    #[arg(long, value_name = "ID")]
    chain_id: Option<String>,

    /// Keyring backend (os, file, pass, test, kwallet)
    #[arg(long, value_name = "BACKEND")]
    keyring_backend: Option<KeyringBackend>,

    /// Separate client binary; selects the split (Launchpad) generation
    #[arg(long, value_name = "BIN")]
    cli: Option<String>,

    /// Client home directory (split generation only)
    #[arg(long, value_name = "DIR", requires = "cli")]
    cli_home: Option<String>,

    /// Print the invocation as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the node; remaining arguments are passed through
    Start {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Initialize the node home
    Init { moniker: String },
    /// Create a new key
    AddKey { name: String },
    /// Recover a key from a mnemonic
    ImportKey { name: String },
    /// Print the address of a key
    ShowKeyAddress { name: String },
    /// List keys
    ListKeys,
    /// Add an account to genesis
    AddGenesisAccount { address: String, coins: String },
    /// Generate a genesis transaction
    ///
    /// Options are emitted in a fixed order (moniker, commission rate, max rate,
    /// max change rate, min self delegation, gas prices), whatever order they
    /// were given in.
    Gentx {
        validator: String,
        amount: String,
        #[arg(long, default_value = "")]
        moniker: String,
        #[arg(long, default_value = "")]
        commission_rate: String,
        #[arg(long, default_value = "")]
        commission_max_rate: String,
        #[arg(long, default_value = "")]
        commission_max_change_rate: String,
        #[arg(long, default_value = "")]
        min_self_delegation: String,
        #[arg(long, default_value = "")]
        gas_prices: String,
    },
    /// Collect genesis transactions into genesis
    CollectGentxs,
    /// Validate the genesis file
    ValidateGenesis,
    /// Print the node ID
    ShowNodeId,
    /// Set a client config value (split generation only)
    SetConfig { name: String, value: String },
    /// Start the client REST server (split generation only)
    RestServer { api_address: String, rpc_address: String },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let chain_cmd = build_chain_cmd(&cli)?;
    let invocation = compose(&chain_cmd, cli.command)?;

    if cli.json {
        println!("{}", serde_json::to_string(&invocation)?);
    } else {
        println!("{}", invocation);
    }
    Ok(())
}

fn load_chain_config(path: &Path) -> Result<Config> {
    let file = if path.is_dir() {
        locate(path)?
    } else {
        path.to_path_buf()
    };
    Config::parse_file(&file).with_context(|| format!("loading {}", file.display()))
}

/// Flags override values seeded from config.yml.
fn build_chain_cmd(cli: &Cli) -> Result<ChainCmd> {
    let mut config = match &cli.config {
        Some(path) => {
            let conf = load_chain_config(path)?;
            ChainCmdConfig::from_chain_config(&cli.app, cli.cli.as_deref(), &conf)
        }
        None => ChainCmdConfig::new(&cli.app),
    };

    if let Some(home) = &cli.home {
        config.home = Some(home.clone());
    }
    if cli.chain_id.is_some() {
        config.chain_id = cli.chain_id.clone();
    }
    if cli.keyring_backend.is_some() {
        config.keyring_backend = cli.keyring_backend;
    }

    let mut chain_cmd = ChainCmd::from_config(config).context("invalid chain binary settings")?;
    if let Some(client) = &cli.cli {
        let client_home = cli
            .cli_home
            .clone()
            .or_else(|| client_home_of(&chain_cmd));
        chain_cmd = chain_cmd.with_split_generation(client.clone(), client_home);
    }

    tracing::debug!(generation = chain_cmd.generation().name(), "Chain builder ready");
    Ok(chain_cmd)
}

fn client_home_of(chain_cmd: &ChainCmd) -> Option<String> {
    match chain_cmd.generation() {
        Generation::Split { client_home, .. } => client_home.clone(),
        Generation::Unified => None,
    }
}

fn compose(chain_cmd: &ChainCmd, command: Command) -> Result<Invocation> {
    let invocation = match command {
        Command::Start { extra } => chain_cmd.start_command(extra),
        Command::Init { moniker } => chain_cmd.init_command(&moniker),
        Command::AddKey { name } => chain_cmd.add_key_command(&name),
        Command::ImportKey { name } => chain_cmd.import_key_command(&name),
        Command::ShowKeyAddress { name } => chain_cmd.show_key_address_command(&name),
        Command::ListKeys => chain_cmd.list_keys_command(),
        Command::AddGenesisAccount { address, coins } => {
            chain_cmd.add_genesis_account_command(&address, &coins)
        }
        Command::Gentx {
            validator,
            amount,
            moniker,
            commission_rate,
            commission_max_rate,
            commission_max_change_rate,
            min_self_delegation,
            gas_prices,
        } => {
            let options = [
                GentxOption::moniker(moniker),
                GentxOption::commission_rate(commission_rate),
                GentxOption::commission_max_rate(commission_max_rate),
                GentxOption::commission_max_change_rate(commission_max_change_rate),
                GentxOption::min_self_delegation(min_self_delegation),
                GentxOption::gas_prices(gas_prices),
            ];
            chain_cmd.gentx_command(&validator, &amount, &options)
        }
        Command::CollectGentxs => chain_cmd.collect_gentxs_command(),
        Command::ValidateGenesis => chain_cmd.validate_genesis_command(),
        Command::ShowNodeId => chain_cmd.show_node_id_command(),
        Command::SetConfig { name, value } => chain_cmd.set_config_command(&name, &value)?,
        Command::RestServer {
            api_address,
            rpc_address,
        } => chain_cmd.rest_server_command(&api_address, &rpc_address)?,
    };
    Ok(invocation)
}
