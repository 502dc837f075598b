//! Configuration loading from environment.

use std::env;

use anyhow::{Context, bail};
use rust_decimal::Decimal;

use cuentaflex_types::{Account, AccountId};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DEPOSIT_FROM_ATM_FEE: &str = "2.00";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub deposit_from_atm_fee: Decimal,
    /// Accounts opened at startup, from `SEED_ACCOUNTS`
    pub seed_accounts: Vec<Account>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let fee = lookup("DEPOSIT_FROM_ATM_FEE")
            .unwrap_or_else(|| DEFAULT_DEPOSIT_FROM_ATM_FEE.to_string());
        let deposit_from_atm_fee: Decimal = fee
            .trim()
            .parse()
            .with_context(|| format!("DEPOSIT_FROM_ATM_FEE is not a decimal: {fee}"))?;
        if deposit_from_atm_fee < Decimal::ZERO {
            bail!("DEPOSIT_FROM_ATM_FEE cannot be negative");
        }

        let seed_accounts = match lookup("SEED_ACCOUNTS") {
            Some(raw) => parse_seed_accounts(&raw).context("invalid SEED_ACCOUNTS")?,
            None => Vec::new(),
        };

        Ok(Self {
            port,
            deposit_from_atm_fee,
            seed_accounts,
        })
    }
}

/// Parses `id=balance` pairs separated by commas, e.g. `A1=500,B2=0`.
fn parse_seed_accounts(raw: &str) -> anyhow::Result<Vec<Account>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (id, balance) = pair
                .split_once('=')
                .with_context(|| format!("expected id=balance, got {pair}"))?;
            let id = AccountId::new(id.trim());
            if id.is_blank() {
                bail!("blank account id in {pair}");
            }
            let balance: Decimal = balance
                .trim()
                .parse()
                .with_context(|| format!("invalid balance in {pair}"))?;
            if balance < Decimal::ZERO {
                bail!("negative balance in {pair}");
            }
            Ok(Account::new(id, balance))
        })
        .collect()
}
