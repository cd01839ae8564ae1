//! Transfer screen: recipient and amount form.

use egui::{RichText, Ui};
use tokio::sync::mpsc;

use crate::events::UiEvent;
use crate::fragment::TransferFragment;
use crate::state::TransferForm;
use crate::ui_components::{self, ACCENT, CARD, MUTED};

/// Render the transfer form. The inputs edit `form` in place; validation
/// happens when the submit event is applied.
pub fn show(
    ui: &mut Ui,
    transfer: &TransferFragment,
    form: &mut TransferForm,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
) {
    ui_components::card(ui, CARD, |ui| {
        ui.heading(transfer.title);
        ui.add_space(16.0);

        ui.label(RichText::new(transfer.recipient_label).color(egui::Color32::LIGHT_GRAY));
        ui.add(
            egui::TextEdit::singleline(&mut form.recipient)
                .hint_text(transfer.recipient_hint)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(12.0);

        ui.label(RichText::new(transfer.amount_label).color(egui::Color32::LIGHT_GRAY));
        let amount = ui.add(
            egui::TextEdit::singleline(&mut form.amount)
                .hint_text(transfer.amount_hint)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("Disponível: {}", transfer.available))
                .small()
                .color(MUTED),
        );

        ui.add_space(16.0);

        let button = egui::Button::new(RichText::new(transfer.submit_label).strong())
            .fill(ACCENT)
            .min_size(egui::vec2(ui.available_width(), 36.0));

        let enter_pressed =
            amount.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.add(button).clicked() || enter_pressed {
            let _ = ui_tx.send(UiEvent::SubmitTransfer);
        }
    });
}
