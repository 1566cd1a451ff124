//! Home panel: company banner, profile entry and sign out.

use super::super::style::COLOR_TEXT_SECONDARY;
use super::super::AttendoApp;
use super::form_column;
use eframe::egui::{self, RichText};

#[derive(Clone, Copy, PartialEq, Eq)]
enum HomeAction {
    OpenProfile,
    SignOut,
}

impl AttendoApp {
    pub(crate) fn render_home_panel(&mut self, ctx: &egui::Context) {
        let mut action = None;

        egui::TopBottomPanel::top("home_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.company_name()).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("\u{22EE}", |ui| {
                        if ui.button("Profile").clicked() {
                            action = Some(HomeAction::OpenProfile);
                            ui.close();
                        }
                        if ui.button("Sign out").clicked() {
                            action = Some(HomeAction::SignOut);
                            ui.close();
                        }
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            form_column(ui, |ui| {
                ui.heading(self.company_name());
                ui.label(RichText::new("Welcome back").color(COLOR_TEXT_SECONDARY));
                ui.add_space(16.0);
                if ui.button("Profile").clicked() {
                    action = Some(HomeAction::OpenProfile);
                }
                if ui.button("Sign out").clicked() {
                    action = Some(HomeAction::SignOut);
                }
            });
        });

        match action {
            Some(HomeAction::OpenProfile) => self.open_profile(),
            Some(HomeAction::SignOut) => self.sign_out(),
            None => {}
        }
    }
}
