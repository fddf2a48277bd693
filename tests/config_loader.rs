use chaincmd::chaincmd::{ChainCmd, ChainCmdConfig, Generation};
use chaincmd::config::{locate, Account, Config, ConfigError, Servers, Validator};
use tempfile::TempDir;

const VALID: &str = r#"
accounts:
  - name: alice
    coins: ["1000token", "100000000stake"]
  - name: bob
    coins: ["500token"]
    mnemonic: "word word word"
validator:
  name: alice
  staked: "100000000stake"
init:
  home: /home/appd
  clihome: /home/appcli
  app:
    minimum-gas-prices: "0.025stake"
servers:
  rpc-address: "0.0.0.0:36657"
"#;

/// Test that a complete config parses with defaults filled in.
#[test]
fn test_parse_valid_config() {
    let config = Config::parse(VALID).unwrap();

    assert_eq!(config.accounts.len(), 2);
    assert_eq!(config.accounts[0].coins, vec!["1000token", "100000000stake"]);
    assert_eq!(config.validator.name, "alice");
    assert_eq!(config.validator.staked, "100000000stake");
    assert_eq!(config.init.home, "/home/appd");
    assert_eq!(config.init.clihome, "/home/appcli");
    assert!(config.init.app.contains_key("minimum-gas-prices"));

    // Explicit server address kept, the rest defaulted
    assert_eq!(config.servers.rpc_addr, "0.0.0.0:36657");
    assert_eq!(config.servers.p2p_addr, "0.0.0.0:26656");
    assert_eq!(config.servers.api_addr, "0.0.0.0:1317");
    assert_eq!(config.servers.dev_ui_addr, "localhost:12345");
}

/// Test that a missing servers section takes every default.
#[test]
fn test_missing_servers_uses_defaults() {
    let config = Config::parse("accounts: [{name: a}]\nvalidator: {name: a}\n").unwrap();
    assert_eq!(config.servers, Servers::default());
    assert_eq!(config.servers.grpc_addr, "0.0.0.0:9090");
}

/// Test that an explicitly empty address is replaced by its default.
#[test]
fn test_empty_server_address_is_defaulted() {
    let yaml = "accounts: [{name: a}]\nvalidator: {name: a}\nservers:\n  api-address: \"\"\n";
    let config = Config::parse(yaml).unwrap();
    assert_eq!(config.servers.api_addr, "0.0.0.0:1317");
}

/// Test validation fails when no accounts are configured.
#[test]
fn test_validation_fails_without_accounts() {
    let err = Config::parse("validator: {name: a}\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert_eq!(err.to_string(), "config is not valid: at least 1 account is needed");
}

/// Test validation fails when the validator has no name.
#[test]
fn test_validation_fails_without_validator() {
    let config = Config {
        accounts: vec![Account {
            name: "a".into(),
            ..Account::default()
        }],
        validator: Validator::default(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "config is not valid: validator is required");
}

/// Test that malformed YAML is a parse error.
#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = Config::parse("accounts: [unclosed").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_parse_reader() {
    let config = Config::parse_reader(VALID.as_bytes()).unwrap();
    assert_eq!(config.accounts[1].mnemonic, "word word word");
}

#[test]
fn test_account_by_name() {
    let config = Config::parse(VALID).unwrap();
    assert_eq!(config.account_by_name("bob").map(|a| a.coins.len()), Some(1));
    assert!(config.account_by_name("carol").is_none());
}

/// A missing file is reported, not turned into an empty config.
#[test]
fn test_parse_file_missing_is_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::parse_file(&dir.path().join("config.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_parse_file_reads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    std::fs::write(&path, VALID).unwrap();
    let config = Config::parse_file(&path).unwrap();
    assert_eq!(config.validator.name, "alice");
}

#[test]
fn test_locate_prefers_yml_over_yaml() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), VALID).unwrap();
    assert_eq!(locate(dir.path()).unwrap(), dir.path().join("config.yaml"));

    std::fs::write(dir.path().join("config.yml"), VALID).unwrap();
    assert_eq!(locate(dir.path()).unwrap(), dir.path().join("config.yml"));
}

#[test]
fn test_locate_reports_missing_config() {
    let dir = TempDir::new().unwrap();
    let err = locate(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

// -- chain config → command builder ------------------------------------------

#[test]
fn test_chain_config_seeds_daemon_home() {
    let config = Config::parse(VALID).unwrap();
    let cmd =
        ChainCmd::from_config(ChainCmdConfig::from_chain_config("appd", None, &config)).unwrap();
    assert!(cmd.generation().is_unified());
    assert_eq!(
        cmd.collect_gentxs_command().args(),
        ["collect-gentxs", "--home", "/home/appd"]
    );
}

#[test]
fn test_chain_config_seeds_client_home_for_split() {
    let config = Config::parse(VALID).unwrap();
    let cmd = ChainCmd::from_config(ChainCmdConfig::from_chain_config(
        "appd",
        Some("appcli"),
        &config,
    ))
    .unwrap();
    assert_eq!(
        cmd.generation(),
        &Generation::Split {
            client_binary: "appcli".into(),
            client_home: Some("/home/appcli".into()),
        }
    );
    let inv = cmd.show_key_address_command("alice");
    assert_eq!(inv.program(), "appcli");
    assert_eq!(inv.args(), ["keys", "show", "alice", "--address", "--home", "/home/appcli"]);
}
