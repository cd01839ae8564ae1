//! Example: drive the ledger without the GUI
//!
//! Run with: cargo run -p ledger --example transfer_demo

use chrono::Utc;
use ledger::{format_date, Account, CurrencyFormat};

fn main() {
    println!("=== PladixBank Ledger Example ===\n");

    let fmt = CurrencyFormat::default();
    let mut account = Account::sample();
    println!("Opening balance: {}\n", fmt.amount(account.balance()));

    for (amount, recipient) in [("2500", "Maria Santos"), ("", "Ana"), ("999999999", "Ana")] {
        match account.submit_transfer(amount, recipient, Utc::now()) {
            Ok(tx) => println!("✅ Sent {} to {}", fmt.amount(tx.amount()), tx.counterparty()),
            Err(e) => println!("❌ {:?} -> {}", amount, e),
        }
    }

    println!("\nBalance: {}", fmt.amount(account.balance()));
    println!("History:");
    for tx in account.transactions() {
        println!(
            "  {}  {:<16} {:>14}  {}",
            format_date(tx.date()),
            tx.counterparty(),
            fmt.signed(tx.amount(), tx.is_incoming()),
            tx.description()
        );
    }
}
