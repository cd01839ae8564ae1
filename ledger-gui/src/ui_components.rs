//! Shared widgets: palette, summary cards and transaction rows.

use egui::{Color32, RichText};

use crate::fragment::TxRow;

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const INCOMING: Color32 = Color32::from_rgb(74, 222, 128);
pub const OUTGOING: Color32 = Color32::from_rgb(248, 113, 113);
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub const CARD: Color32 = Color32::from_rgb(55, 65, 81);
pub const ROW: Color32 = Color32::from_rgb(31, 41, 55);

/// Rounded, filled container used for every card on the dashboard.
pub fn card<R>(
    ui: &mut egui::Ui,
    fill: Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(fill)
        .rounding(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Small card with a title, a big value and a caption underneath.
pub fn summary_card(ui: &mut egui::Ui, icon: &str, title: &str, value: &str, caption: &str) {
    card(ui, CARD, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(18.0).color(ACCENT));
            ui.label(RichText::new(title).strong());
        });
        ui.add_space(4.0);
        ui.label(RichText::new(value).size(22.0).strong());
        ui.label(RichText::new(caption).small().color(MUTED));
    });
}

/// One transaction line: direction icon, counterparty and description on
/// the left, signed amount and date on the right.
pub fn transaction_row(ui: &mut egui::Ui, row: &TxRow, fill: Color32) {
    let (icon, color) = if row.incoming {
        ("⇄", INCOMING)
    } else {
        ("➡", OUTGOING)
    };

    ui.push_id(row.id, |ui| {
        card(ui, fill, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(20.0).color(color));
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(&row.title).strong());
                    ui.label(RichText::new(&row.description).small().color(MUTED));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&row.amount).strong().color(color));
                        ui.label(RichText::new(&row.date).small().color(MUTED));
                    });
                });
            });
        });
    });
}
