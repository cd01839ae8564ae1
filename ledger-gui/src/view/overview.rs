//! Overview screen: balance card, account split and recent transactions.

use egui::{RichText, Ui};
use tokio::sync::mpsc;

use crate::events::UiEvent;
use crate::fragment::OverviewFragment;
use crate::ui_components::{self, ACCENT, CARD, MUTED};

/// Render the overview screen.
pub fn show(ui: &mut Ui, overview: &OverviewFragment, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    // Balance card
    ui_components::card(ui, ACCENT, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Saldo Total").color(egui::Color32::LIGHT_GRAY));
                ui.label(RichText::new(&overview.balance).size(34.0).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(RichText::new("$").size(24.0));
            });
        });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("➡ Enviar Dinheiro").clicked() {
                let _ = ui_tx.send(UiEvent::QuickSend);
            }
            if ui.button("⇄ Transferência Rápida").clicked() {
                let _ = ui_tx.send(UiEvent::QuickTransfer);
            }
        });
    });

    ui.add_space(16.0);

    ui.columns(2, |columns| {
        ui_components::summary_card(
            &mut columns[0],
            "🏦",
            "Conta Corrente",
            &overview.checking,
            "Conta Principal",
        );
        ui_components::summary_card(
            &mut columns[1],
            "🐷",
            "Poupança",
            &overview.savings,
            "Rendimento: 2,5% ao ano",
        );
    });

    ui.add_space(16.0);

    ui.heading("Transações Recentes");
    ui.add_space(8.0);

    if overview.recent.is_empty() {
        ui.label(RichText::new("Nenhuma transação ainda").color(MUTED).italics());
        return;
    }

    for row in &overview.recent {
        ui_components::transaction_row(ui, row, CARD);
        ui.add_space(8.0);
    }
}
