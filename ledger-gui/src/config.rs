//! Dashboard configuration
//!
//! Everything here is optional. The dashboard reads
//! `~/.pladixbank/config.toml` once at start-up; a missing file means the
//! built-in defaults (the sample account, BRL-style formatting).

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use ledger::{Account, CurrencyFormat, Transaction, TransactionError, TxKind, SAMPLE_BALANCE};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name used in the header greeting.
    pub holder_name: String,

    pub currency_prefix: String,
    pub thousands_separator: char,
    pub decimal_separator: char,

    /// Balance the account opens with.
    pub opening_balance: f64,

    /// History the account opens with, newest first. `None` uses the
    /// built-in sample history.
    pub seed_transactions: Option<Vec<SeedTransaction>>,
}

/// One history entry as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTransaction {
    pub kind: TxKind,
    pub amount: f64,
    pub counterparty: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        let format = CurrencyFormat::default();
        Self {
            holder_name: "Michael".to_string(),
            currency_prefix: format.prefix,
            thousands_separator: format.thousands_separator,
            decimal_separator: format.decimal_separator,
            opening_balance: SAMPLE_BALANCE,
            seed_transactions: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::info!(
                "📝 No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        log::info!("📁 Loading config from: {}", config_path.display());
        let contents = fs::read_to_string(&config_path)?;
        let config = Self::parse(&contents)?;
        log::info!(
            "✅ Config loaded: holder={}, opening balance={}",
            config.holder_name,
            config.opening_balance
        );
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get config file path
    fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = Self::data_dir()?;
        path.push("config.toml");
        Ok(path)
    }

    /// Get base data directory
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        path.push(".pladixbank");
        Ok(path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.opening_balance.is_finite() || self.opening_balance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "opening_balance must be a non-negative number, got {}",
                self.opening_balance
            )));
        }

        if self.thousands_separator == self.decimal_separator {
            return Err(ConfigError::Invalid(format!(
                "thousands and decimal separators are both '{}'",
                self.decimal_separator
            )));
        }

        for seed in self.seed_transactions.iter().flatten() {
            if !seed.amount.is_finite() || seed.amount <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "seed transaction with {} has non-positive amount {}",
                    seed.counterparty, seed.amount
                )));
            }
        }

        Ok(())
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            prefix: self.currency_prefix.clone(),
            thousands_separator: self.thousands_separator,
            decimal_separator: self.decimal_separator,
        }
    }

    /// Build the account the dashboard opens with.
    pub fn opening_account(&self) -> Result<Account, ConfigError> {
        let Some(seeds) = &self.seed_transactions else {
            return Ok(Account::new(
                self.opening_balance,
                Account::sample().transactions().to_vec(),
            ));
        };

        let transactions = seeds
            .iter()
            .zip(1u64..)
            .map(|(seed, id)| {
                Transaction::new(
                    id,
                    seed.kind,
                    seed.amount,
                    seed.counterparty.clone(),
                    seed.date,
                    seed.description.clone(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Account::new(self.opening_balance, transactions))
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid seed transaction: {0}")]
    Seed(#[from] TransactionError),
}
