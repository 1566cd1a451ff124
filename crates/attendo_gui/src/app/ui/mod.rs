//! UI panels, one per screen, plus the shared toast overlay.

/// Register and login panels.
pub(super) mod auth_panels;
/// Home panel with the overflow menu.
pub(super) mod home_panel;
/// Profile view/edit panel.
pub(super) mod profile_panel;
/// Transient toast notifications.
pub(super) mod toasts;

use super::AttendoApp;
use eframe::egui;

impl AttendoApp {
    pub(super) fn render_loading(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        });
    }
}

/// Centered single-column layout shared by every form screen.
pub(super) fn form_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(360.0);
        ui.add_space(24.0);
        add_contents(ui);
    });
}
