//! Header: bank name, greeting and the search / profile shortcuts.

use egui::{RichText, Ui};
use tokio::sync::mpsc;

use crate::events::UiEvent;
use crate::ui_components::MUTED;

/// Render the header row above the active screen.
pub fn show(ui: &mut Ui, holder_name: &str, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("PladixBank").size(24.0).strong());
            ui.label(RichText::new(format!("Bem-vindo de volta, {}", holder_name)).color(MUTED));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(RichText::new("👤").size(18.0)).clicked() {
                let _ = ui_tx.send(UiEvent::Profile);
            }
            if ui.button(RichText::new("🔍").size(18.0)).clicked() {
                let _ = ui_tx.send(UiEvent::Search);
            }
        });
    });
}
