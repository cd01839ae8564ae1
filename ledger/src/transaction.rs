//! Transaction records shown in the dashboard history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    #[error("Transaction amount must be positive, got {0}")]
    NonPositiveAmount(f64),
}

/// Direction of a transaction relative to the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Received,
    Sent,
}

/// One completed transfer. Immutable once built: fields are only readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: u64,
    kind: TxKind,
    amount: f64,
    counterparty: String,
    date: NaiveDate,
    description: String,
}

impl Transaction {
    /// Build a transaction. `amount` must be a finite number greater than zero.
    pub fn new(
        id: u64,
        kind: TxKind,
        amount: f64,
        counterparty: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Self, TransactionError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TransactionError::NonPositiveAmount(amount));
        }

        Ok(Self {
            id,
            kind,
            amount,
            counterparty: counterparty.into(),
            date,
            description: description.into(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The sender for received transactions, the recipient for sent ones.
    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_incoming(&self) -> bool {
        self.kind == TxKind::Received
    }
}
