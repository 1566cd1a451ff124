//! Ephemeral toast notifications for short action feedback.

use super::super::style::{COLOR_BG_SECONDARY, COLOR_BORDER, COLOR_TEXT_PRIMARY};
use super::super::AttendoApp;
use eframe::egui;

impl AttendoApp {
    /// Renders transient notices along the bottom edge, newest last.
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                ui.vertical_centered(|ui| {
                    for toast in &self.toasts {
                        egui::Frame::popup(ui.style())
                            .fill(COLOR_BG_SECONDARY)
                            .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(&toast.text)
                                        .small()
                                        .color(COLOR_TEXT_PRIMARY),
                                );
                            });
                    }
                });
            });
    }
}
