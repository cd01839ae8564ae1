//! What each tab shows, as plain data.
//!
//! [`render_for`] turns the active tab and the account into a
//! [`ViewFragment`]. It only reads; the egui views in [`crate::view`] draw the
//! result. Keeping the two apart lets the content be tested without a display.

use ledger::{format_date, Account, CurrencyFormat, Transaction};

use crate::events::Tab;

/// Number of transactions listed on the overview.
pub const RECENT_COUNT: usize = 3;

/// Share of the balance shown on the checking card; the rest is savings.
const CHECKING_SHARE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewFragment {
    Overview(OverviewFragment),
    Transfer(TransferFragment),
    History(HistoryFragment),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewFragment {
    pub balance: String,
    pub checking: String,
    pub savings: String,
    pub recent: Vec<TxRow>,
}

/// The transfer form's fixed wording plus the balance it can spend.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFragment {
    pub title: &'static str,
    pub recipient_label: &'static str,
    pub recipient_hint: &'static str,
    pub amount_label: &'static str,
    pub amount_hint: &'static str,
    pub submit_label: &'static str,
    pub available: String,
}

impl TransferFragment {
    fn new(available: String) -> Self {
        Self {
            title: "Realizar Transferência",
            recipient_label: "ID do Destinatário",
            recipient_hint: "Digite o ID do destinatário",
            amount_label: "Valor",
            amount_hint: "Digite o valor",
            submit_label: "Enviar Transferência",
            available,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFragment {
    pub rows: Vec<TxRow>,
}

/// One transaction line, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TxRow {
    pub id: u64,
    /// "De …" for received, "Para …" for sent.
    pub title: String,
    pub description: String,
    /// Signed amount, e.g. "+R$ 5.000".
    pub amount: String,
    pub date: String,
    pub incoming: bool,
}

impl TxRow {
    pub fn new(tx: &Transaction, fmt: &CurrencyFormat) -> Self {
        let title = if tx.is_incoming() {
            format!("De {}", tx.counterparty())
        } else {
            format!("Para {}", tx.counterparty())
        };

        Self {
            id: tx.id(),
            title,
            description: tx.description().to_string(),
            amount: fmt.signed(tx.amount(), tx.is_incoming()),
            date: format_date(tx.date()),
            incoming: tx.is_incoming(),
        }
    }
}

/// Select and build the content for `tab`.
pub fn render_for(tab: Tab, account: &Account, fmt: &CurrencyFormat) -> ViewFragment {
    let rows = |txs: &[Transaction]| -> Vec<TxRow> {
        txs.iter().map(|tx| TxRow::new(tx, fmt)).collect()
    };

    match tab {
        Tab::Transfer => {
            ViewFragment::Transfer(TransferFragment::new(fmt.amount(account.balance())))
        }
        Tab::History => ViewFragment::History(HistoryFragment {
            rows: rows(account.transactions()),
        }),
        Tab::Overview => ViewFragment::Overview(OverviewFragment {
            balance: fmt.amount(account.balance()),
            checking: fmt.amount(account.balance() * CHECKING_SHARE),
            savings: fmt.amount(account.balance() * (1.0 - CHECKING_SHARE)),
            recent: rows(account.recent(RECENT_COUNT)),
        }),
    }
}
