//! Application state: plain data, no async, no Arc.
//!
//! `AppState` owns everything the dashboard shows: the account, the active
//! tab, the transfer form fields and the notice queue. Views send `UiEvent`s
//! which are applied via `AppState::apply()`, one at a time, each to
//! completion. Rendering only reads through [`AppState::fragment`].

use std::time::Instant;

use chrono::{DateTime, Utc};
use ledger::{Account, CurrencyFormat, Transaction, TransferError};

use crate::config::Config;
use crate::events::{Tab, UiEvent};
use crate::fragment::{render_for, ViewFragment};
use crate::notice::{Notice, Notices};

/// Text bound to the transfer form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

impl TransferForm {
    pub fn clear(&mut self) {
        self.recipient.clear();
        self.amount.clear();
    }
}

/// All application state needed for rendering.
#[derive(Debug)]
pub struct AppState {
    // -- Navigation --
    pub tab: Tab,

    // -- Ledger --
    pub account: Account,

    // -- UI transient state --
    pub form: TransferForm,
    pub notices: Notices,

    // -- Display preferences --
    pub format: CurrencyFormat,
    pub holder_name: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AppState {
    /// Build the opening state. A seed history the ledger refuses falls back
    /// to the sample account.
    pub fn from_config(config: &Config) -> Self {
        let account = config.opening_account().unwrap_or_else(|e| {
            log::warn!("⚠️ {}. Falling back to the sample account.", e);
            Account::sample()
        });

        Self {
            tab: Tab::default(),
            account,
            form: TransferForm::default(),
            notices: Notices::default(),
            format: config.currency_format(),
            holder_name: config.holder_name.clone(),
        }
    }

    /// Content of the active tab.
    pub fn fragment(&self) -> ViewFragment {
        render_for(self.tab, &self.account, &self.format)
    }

    /// Apply a UI event using the wall clock.
    pub fn apply(&mut self, event: UiEvent) {
        self.apply_at(event, Utc::now(), Instant::now());
    }

    /// Apply a UI event. `at` stamps new transactions, `now` stamps the
    /// resulting notice. Every event queues exactly one notice.
    pub fn apply_at(&mut self, event: UiEvent, at: DateTime<Utc>, now: Instant) {
        let notice = match event {
            UiEvent::SelectTab(tab) => {
                self.select_tab(tab);
                Notice::navigation(tab, now)
            }
            UiEvent::QuickSend => {
                self.select_tab(Tab::Transfer);
                Notice::quick_send(now)
            }
            UiEvent::QuickTransfer => Notice::quick_transfer(now),
            UiEvent::SubmitTransfer => match self.submit_transfer(at) {
                Ok(_) => Notice::transfer_done(now),
                Err(e) => Notice::transfer_failed(e, now),
            },
            UiEvent::Search => Notice::search(now),
            UiEvent::Profile => Notice::profile(now),
        };

        self.notices.push(notice);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        log::debug!("Navigating {:?} -> {:?}", self.tab, tab);
        self.tab = tab;
    }

    /// Submit the form contents to the ledger. The form is cleared only when
    /// the transfer goes through, so a rejected entry can be corrected.
    pub fn submit_transfer(&mut self, at: DateTime<Utc>) -> Result<Transaction, TransferError> {
        let result = self
            .account
            .submit_transfer(&self.form.amount, &self.form.recipient, at);

        match &result {
            Ok(_) => self.form.clear(),
            Err(e) => log::warn!(
                "Transfer rejected (amount={:?}, recipient={:?}): {}",
                self.form.amount,
                self.form.recipient,
                e
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::RECENT_COUNT;
    use crate::notice::Severity;
    use ledger::TxKind;

    fn fill(state: &mut AppState, recipient: &str, amount: &str) {
        state.form.recipient = recipient.to_string();
        state.form.amount = amount.to_string();
    }

    fn last_notice(state: &AppState) -> &Notice {
        state.notices.iter().last().expect("a notice was queued")
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.tab, Tab::Overview);
        assert_eq!(state.account.balance(), 75_000.0);
        assert_eq!(state.form, TransferForm::default());
        assert!(state.notices.is_empty());
        assert_eq!(state.holder_name, "Michael");
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut state = AppState::default();

        state.apply(UiEvent::SelectTab(Tab::Transfer));
        assert_eq!(state.tab, Tab::Transfer);
        match state.fragment() {
            ViewFragment::Transfer(t) => {
                assert_eq!(t.title, "Realizar Transferência");
                assert_eq!(t.recipient_hint, "Digite o ID do destinatário");
                assert_eq!(t.amount_hint, "Digite o valor");
                assert_eq!(t.available, "R$ 75.000");
            }
            other => panic!("expected transfer, got {:?}", other),
        }

        state.apply(UiEvent::SelectTab(Tab::History));
        assert_eq!(state.tab, Tab::History);
        match state.fragment() {
            ViewFragment::History(h) => assert_eq!(h.rows.len(), 3),
            other => panic!("expected history, got {:?}", other),
        }

        state.apply(UiEvent::SelectTab(Tab::Overview));
        assert_eq!(state.tab, Tab::Overview);
        match state.fragment() {
            ViewFragment::Overview(o) => {
                assert_eq!(o.balance, "R$ 75.000");
                assert_eq!(o.recent.len(), RECENT_COUNT);
            }
            other => panic!("expected overview, got {:?}", other),
        }

        let messages: Vec<_> = state.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Pronto para fazer uma transferência",
                "Visualizando histórico de transações",
                "Visualizando visão geral",
            ]
        );
    }

    #[test]
    fn test_reselecting_active_tab_still_notifies() {
        let mut state = AppState::default();
        state.apply(UiEvent::SelectTab(Tab::Overview));
        assert_eq!(state.tab, Tab::Overview);
        assert_eq!(state.notices.iter().count(), 1);
    }

    #[test]
    fn test_quick_send_opens_transfer() {
        let mut state = AppState::default();
        state.apply(UiEvent::QuickSend);
        assert_eq!(state.tab, Tab::Transfer);
        let notice = last_notice(&state);
        assert_eq!(notice.message, "Acessando transferências");
        assert_eq!(notice.severity, Severity::Action);
    }

    #[test]
    fn test_acknowledgements_do_not_change_state() {
        let mut state = AppState::default();
        for event in [UiEvent::QuickTransfer, UiEvent::Search, UiEvent::Profile] {
            state.apply(event);
        }
        assert_eq!(state.tab, Tab::Overview);
        assert_eq!(state.account, Account::sample());

        let messages: Vec<_> = state.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Transferência rápida iniciada!",
                "Função de busca em breve!",
                "Configurações do perfil em breve!",
            ]
        );
    }

    #[test]
    fn test_successful_transfer_clears_form() {
        let mut state = AppState::default();
        state.apply(UiEvent::SelectTab(Tab::Transfer));
        fill(&mut state, "Maria Santos", "2500");

        state.apply(UiEvent::SubmitTransfer);

        assert_eq!(state.account.balance(), 72_500.0);
        let head = &state.account.transactions()[0];
        assert_eq!(head.kind(), TxKind::Sent);
        assert_eq!(head.amount(), 2500.0);
        assert_eq!(head.counterparty(), "Maria Santos");
        assert_eq!(state.form, TransferForm::default());
        // The form stays open after sending.
        assert_eq!(state.tab, Tab::Transfer);

        let notice = last_notice(&state);
        assert_eq!(notice.message, "Transferência realizada com sucesso!");
        assert_eq!(notice.severity, Severity::Success);
    }

    #[test]
    fn test_failed_transfer_keeps_form() {
        let mut state = AppState::default();
        fill(&mut state, "Maria Santos", "");

        state.apply(UiEvent::SubmitTransfer);

        assert_eq!(state.account, Account::sample());
        assert_eq!(state.form.recipient, "Maria Santos");
        assert_eq!(state.form.amount, "");
        let notice = last_notice(&state);
        assert_eq!(notice.message, "Por favor, insira um valor válido");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn test_failure_reasons_surface_in_order() {
        let mut state = AppState::default();
        let cases = [
            ("", "abc", "Por favor, insira um valor válido"),
            ("   ", "10", "Por favor, insira o ID do destinatário"),
            ("Ana", "999999999", "Saldo insuficiente"),
        ];

        for (recipient, amount, expected) in cases {
            fill(&mut state, recipient, amount);
            state.apply(UiEvent::SubmitTransfer);
            assert_eq!(last_notice(&state).message, expected);
            assert_eq!(state.form.amount, amount);
        }
        assert_eq!(state.account, Account::sample());
    }

    #[test]
    fn test_submit_transfer_returns_result() {
        let mut state = AppState::default();
        fill(&mut state, "Ana", "75001");
        assert_eq!(
            state.submit_transfer(Utc::now()),
            Err(TransferError::InsufficientFunds)
        );

        fill(&mut state, "Ana", "75000");
        let tx = state.submit_transfer(Utc::now()).unwrap();
        assert_eq!(tx.amount(), 75_000.0);
        assert_eq!(state.account.balance(), 0.0);
        // The controller method itself does not queue notices.
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_from_config_with_custom_format() {
        let config = Config::parse(
            r#"
            holder_name = "Ana"
            currency_prefix = "€"
            opening_balance = 500
            "#,
        )
        .unwrap();
        let state = AppState::from_config(&config);

        assert_eq!(state.holder_name, "Ana");
        match state.fragment() {
            ViewFragment::Overview(o) => assert_eq!(o.balance, "€ 500"),
            other => panic!("expected overview, got {:?}", other),
        }
    }
}
