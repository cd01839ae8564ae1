//! The account ledger: a single balance plus a newest-first transaction list.
//!
//! The only mutating entry point is [`Account::submit_transfer`]. Received
//! transactions are display data; nothing in here credits the balance.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::transaction::{Transaction, TxKind};

/// Description attached to every outgoing transfer.
pub const TRANSFER_DESCRIPTION: &str = "Transferência enviada";

/// Opening balance of the sample account.
pub const SAMPLE_BALANCE: f64 = 75_000.0;

/// Reasons a transfer is rejected, in validation order.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("Por favor, insira um valor válido")]
    InvalidAmount,

    #[error("Por favor, insira o ID do destinatário")]
    MissingRecipient,

    #[error("Saldo insuficiente")]
    InsufficientFunds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
    transactions: Vec<Transaction>,
    /// Highest id handed out so far; new ids are always above it.
    last_id: u64,
}

impl Account {
    /// Create an account from an opening balance and a newest-first history.
    pub fn new(balance: f64, transactions: Vec<Transaction>) -> Self {
        let last_id = transactions.iter().map(Transaction::id).max().unwrap_or(0);
        Self {
            balance,
            transactions,
            last_id,
        }
    }

    /// The demo account the dashboard opens with.
    pub fn sample() -> Self {
        let rows = [
            (1, TxKind::Received, 5_000.0, "João Silva", (2024, 3, 15), "Pagamento recebido"),
            (2, TxKind::Sent, 2_500.0, "Maria Santos", (2024, 3, 14), "Pagamento do carro"),
            (3, TxKind::Received, 1_000.0, "Pedro Oliveira", (2024, 3, 13), "Serviços"),
        ];

        let transactions = rows
            .into_iter()
            .filter_map(|(id, kind, amount, who, (y, m, d), description)| {
                let date = NaiveDate::from_ymd_opt(y, m, d)?;
                Transaction::new(id, kind, amount, who, date, description).ok()
            })
            .collect();

        Self::new(SAMPLE_BALANCE, transactions)
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Full history, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The `n` most recent transactions (fewer if the history is shorter).
    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    /// Validate and apply an outgoing transfer.
    ///
    /// Checks run in order and the first failure wins: amount, recipient,
    /// funds. On failure the account is untouched. On success the balance is
    /// debited and the new transaction is placed at the head of the history.
    ///
    /// Identical inputs submitted twice produce two distinct transfers; there
    /// is no duplicate-submission guard.
    pub fn submit_transfer(
        &mut self,
        raw_amount: &str,
        recipient: &str,
        at: DateTime<Utc>,
    ) -> Result<Transaction, TransferError> {
        let amount = parse_amount(raw_amount).ok_or(TransferError::InvalidAmount)?;

        if recipient.trim().is_empty() {
            return Err(TransferError::MissingRecipient);
        }

        if amount > self.balance {
            return Err(TransferError::InsufficientFunds);
        }

        let id = self.next_id(at);
        let tx = Transaction::new(
            id,
            TxKind::Sent,
            amount,
            recipient,
            at.date_naive(),
            TRANSFER_DESCRIPTION,
        )
        .map_err(|_| TransferError::InvalidAmount)?;

        // Nothing below can fail.
        self.last_id = id;
        self.balance -= amount;
        self.transactions.insert(0, tx.clone());

        log::info!(
            "💸 Transfer #{} of {} to {} applied, balance now {}",
            id,
            amount,
            recipient,
            self.balance
        );

        Ok(tx)
    }

    /// Millisecond timestamp of `at`, bumped past the last id if the clock
    /// has not moved on.
    fn next_id(&self, at: DateTime<Utc>) -> u64 {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        millis.max(self.last_id + 1)
    }
}

/// Parse a user-typed amount. Returns `None` unless it is a finite number
/// greater than zero.
fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}
