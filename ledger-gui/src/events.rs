//! Event types sent from the views to the controller.
//!
//! Views never touch the ledger directly: every click becomes a `UiEvent`
//! that `AppState::apply()` handles after the frame is drawn.

/// Destinations of the side navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Transfer,
    History,
}

impl Tab {
    /// Rail order, top to bottom.
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Transfer, Tab::History];

    /// Label and icon of the rail button.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "💳 Visão Geral",
            Tab::Transfer => "⇄ Transferir",
            Tab::History => "🕘 Histórico",
        }
    }
}

/// Commands sent from the UI to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A side rail button was clicked.
    SelectTab(Tab),

    /// "Enviar Dinheiro" on the overview: jump to the transfer form.
    QuickSend,

    /// "Transferência Rápida" on the overview. Acknowledged only.
    QuickTransfer,

    /// Submit the transfer form with its current field values.
    SubmitTransfer,

    /// Header search button (not implemented yet).
    Search,

    /// Header profile button (not implemented yet).
    Profile,
}
