//! Faucet settings and HTTP wire types.
//!
//! Only the contract lives here; the transfer logic and the HTTP server
//! belong to the service that embeds them. Payloads stay compatible with
//! earlier faucet deployments:
//!
//! ```text
//! POST {"address": "cosmos1..."}  →  {"status": "ok"} | {"status": "error", "error": "..."}
//! ```

use serde::{Deserialize, Serialize};

/// Account tokens are transferred from.
pub const DEFAULT_ACCOUNT_NAME: &str = "faucet";

/// Denomination distributed by default.
pub const DEFAULT_DENOM: &str = "uatom";

/// Amount credited per request.
pub const DEFAULT_CREDIT_AMOUNT: u64 = 10_000_000;

/// Lifetime maximum credited to one account.
pub const DEFAULT_MAX_CREDIT: u64 = 100_000_000;

pub const STATUS_OK: &str = "ok";
pub const STATUS_ERROR: &str = "error";

/// Faucet configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaucetOptions {
    pub account_name: String,
    /// When absent the account is expected to already exist in the keyring.
    pub account_mnemonic: Option<String>,
    pub denom: String,
    pub credit_amount: u64,
    pub max_credit: u64,
}

impl Default for FaucetOptions {
    fn default() -> Self {
        Self {
            account_name: DEFAULT_ACCOUNT_NAME.to_string(),
            account_mnemonic: None,
            denom: DEFAULT_DENOM.to_string(),
            credit_amount: DEFAULT_CREDIT_AMOUNT,
            max_credit: DEFAULT_MAX_CREDIT,
        }
    }
}

impl FaucetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account to transfer from, optionally recovered from `mnemonic`.
    pub fn account(mut self, name: impl Into<String>, mnemonic: Option<String>) -> Self {
        self.account_name = name.into();
        self.account_mnemonic = mnemonic.filter(|m| !m.is_empty());
        self
    }

    pub fn denom(mut self, denom: impl Into<String>) -> Self {
        self.denom = denom.into();
        self
    }

    pub fn credit_amount(mut self, amount: u64) -> Self {
        self.credit_amount = amount;
        self
    }

    pub fn max_credit(mut self, amount: u64) -> Self {
        self.max_credit = amount;
        self
    }

    /// Coins sent per request, e.g. `10000000uatom`.
    pub fn credit_coins(&self) -> String {
        format!("{}{}", self.credit_amount, self.denom)
    }
}

/// Body of a faucet transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "address")]
    pub account_address: String,
}

/// Body of a faucet transfer response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransferResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            error: Some(message.into()),
        }
    }
}
