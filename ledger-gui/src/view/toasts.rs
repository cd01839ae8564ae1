//! Toast stack in the top-right corner.

use std::time::Instant;

use egui::{Color32, RichText};

use crate::notice::{Notices, Severity};
use crate::ui_components::ACCENT;

fn fill(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::from_rgb(31, 41, 55),
        Severity::Success => Color32::from_rgb(34, 197, 94),
        Severity::Action => ACCENT,
        Severity::Error => Color32::from_rgb(239, 68, 68),
    }
}

/// Draw every live notice, oldest on top. Fades each one out over its last
/// half second.
pub fn show(ctx: &egui::Context, notices: &Notices, now: Instant) {
    if notices.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for notice in notices.iter() {
                let remaining = notice
                    .severity
                    .duration()
                    .saturating_sub(now.saturating_duration_since(notice.shown_at));
                let opacity = (remaining.as_secs_f32() / 0.5).clamp(0.0, 1.0);

                let text = match notice.icon {
                    Some(icon) => format!("{}  {}", icon, notice.message),
                    None => notice.message.clone(),
                };

                egui::Frame::none()
                    .fill(fill(notice.severity).gamma_multiply(opacity))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(text).color(Color32::WHITE.gamma_multiply(opacity)));
                    });
                ui.add_space(8.0);
            }
        });
}
