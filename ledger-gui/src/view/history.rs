//! History screen: every transaction, newest first.

use egui::{RichText, Ui};

use crate::fragment::HistoryFragment;
use crate::ui_components::{self, CARD, MUTED, ROW};

/// Render the history screen.
pub fn show(ui: &mut Ui, history: &HistoryFragment) {
    ui_components::card(ui, CARD, |ui| {
        ui.heading("Histórico de Transações");
        ui.add_space(16.0);

        if history.rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(
                    RichText::new("Nenhuma transação ainda")
                        .size(16.0)
                        .color(MUTED)
                        .italics(),
                );
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in &history.rows {
                ui_components::transaction_row(ui, row, ROW);
                ui.add_space(8.0);
            }
        });
    });
}
