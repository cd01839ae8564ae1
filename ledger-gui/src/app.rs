//! Application struct: the eframe::App implementation.
//!
//! Thin wrapper: draws the rail, header and active view, then drains the
//! events the views queued and applies them to [`AppState`].

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::config::Config;
use crate::events::{Tab, UiEvent};
use crate::fragment::ViewFragment;
use crate::state::AppState;
use crate::ui_components::ACCENT;
use crate::view;

/// The dashboard application.
pub struct App {
    pub state: AppState,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::from_config(&config),
            ui_tx,
            ui_rx,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.notices.prune(now);

        // 1. Navigation rail
        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(170.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    egui::Frame::none()
                        .fill(ACCENT)
                        .rounding(8.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new("👛").size(24.0));
                        });
                });
                ui.add_space(20.0);

                for tab in Tab::ALL {
                    nav_button(ui, &self.state, tab, &self.ui_tx);
                    ui.add_space(6.0);
                }
            });

        // 2. Header and the active view
        egui::CentralPanel::default().show(ctx, |ui| {
            view::header::show(ui, &self.state.holder_name, &self.ui_tx);
            ui.add_space(20.0);

            match self.state.fragment() {
                ViewFragment::Overview(overview) => {
                    view::overview::show(ui, &overview, &self.ui_tx);
                }
                ViewFragment::Transfer(transfer) => {
                    view::transfer::show(ui, &transfer, &mut self.state.form, &self.ui_tx);
                }
                ViewFragment::History(history) => {
                    view::history::show(ui, &history);
                }
            }
        });

        // 3. Toasts on top
        view::toasts::show(ctx, &self.state.notices, now);

        // 4. Apply what the views queued this frame
        let mut changed = false;
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
            changed = true;
        }

        if changed {
            ctx.request_repaint();
        } else if !self.state.notices.is_empty() {
            // Keep animating toasts until they expire.
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

/// Render a navigation button, highlighting the active tab.
fn nav_button(
    ui: &mut egui::Ui,
    state: &AppState,
    tab: Tab,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
) {
    let button = egui::Button::new(egui::RichText::new(tab.label()).size(14.0))
        .selected(state.tab == tab)
        .min_size(egui::vec2(150.0, 32.0));

    if ui.add(button).clicked() {
        let _ = ui_tx.send(UiEvent::SelectTab(tab));
    }
}
