//! Transient toast notifications.
//!
//! Notices are plain data produced by the controller from navigation and
//! transfer outcomes. `view::toasts` decides how they look.

use std::time::{Duration, Instant};

use ledger::TransferError;

use crate::events::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    /// Acknowledgement of an overview quick action.
    Action,
    Error,
}

impl Severity {
    /// How long a notice stays on screen.
    pub fn duration(self) -> Duration {
        match self {
            Severity::Info | Severity::Error => Duration::from_secs(4),
            Severity::Success | Severity::Action => Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub icon: Option<&'static str>,
    pub shown_at: Instant,
}

impl Notice {
    fn new(
        message: impl Into<String>,
        severity: Severity,
        icon: Option<&'static str>,
        shown_at: Instant,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            icon,
            shown_at,
        }
    }

    /// Acknowledge a rail navigation.
    pub fn navigation(tab: Tab, now: Instant) -> Self {
        let (message, icon) = match tab {
            Tab::Overview => ("Visualizando visão geral", "👀"),
            Tab::Transfer => ("Pronto para fazer uma transferência", "💸"),
            Tab::History => ("Visualizando histórico de transações", "📜"),
        };
        Self::new(message, Severity::Info, Some(icon), now)
    }

    pub fn quick_send(now: Instant) -> Self {
        Self::new("Acessando transferências", Severity::Action, None, now)
    }

    pub fn quick_transfer(now: Instant) -> Self {
        Self::new("Transferência rápida iniciada!", Severity::Action, None, now)
    }

    pub fn search(now: Instant) -> Self {
        Self::new("Função de busca em breve!", Severity::Info, Some("🔍"), now)
    }

    pub fn profile(now: Instant) -> Self {
        Self::new(
            "Configurações do perfil em breve!",
            Severity::Info,
            Some("👤"),
            now,
        )
    }

    pub fn transfer_done(now: Instant) -> Self {
        Self::new(
            "Transferência realizada com sucesso!",
            Severity::Success,
            None,
            now,
        )
    }

    pub fn transfer_failed(err: TransferError, now: Instant) -> Self {
        Self::new(err.to_string(), Severity::Error, None, now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.severity.duration()
    }
}

/// Queue of on-screen notices, oldest first.
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
    }

    /// Drop every notice whose display time has passed.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
