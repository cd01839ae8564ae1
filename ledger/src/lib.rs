//! PladixBank ledger
//!
//! In-memory model behind the dashboard:
//! - a single account balance with a newest-first transaction history
//! - transfer validation (amount, recipient, funds) with typed errors
//! - currency and date formatting for display
//!
//! Nothing here persists or talks to the network.

pub mod account;
pub mod format;
pub mod transaction;

pub use account::{Account, TransferError, SAMPLE_BALANCE, TRANSFER_DESCRIPTION};
pub use format::{format_date, CurrencyFormat};
pub use transaction::{Transaction, TransactionError, TxKind};
