//! Register and login panels.

use super::super::style::COLOR_TEXT_SECONDARY;
use super::super::{AttendoApp, Route, ScreenView};
use super::form_column;
use eframe::egui::{self, RichText, TextEdit};

impl AttendoApp {
    pub(crate) fn render_register_panel(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let mut to_login = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let ScreenView::Register(form) = &mut self.screen.view else {
                return;
            };
            form_column(ui, |ui| {
                ui.heading("Create account");
                ui.add(TextEdit::singleline(&mut form.username).hint_text("Name"));
                ui.add(TextEdit::singleline(&mut form.email).hint_text("Email"));
                let password = ui.add(
                    TextEdit::singleline(&mut form.password)
                        .password(true)
                        .hint_text("Password"),
                );
                let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(!form.in_flight, egui::Button::new("Register"))
                    .clicked();
                submit = clicked || enter;
                if form.in_flight {
                    ui.spinner();
                }
                ui.add_space(8.0);
                ui.label(RichText::new("Already have an account?").color(COLOR_TEXT_SECONDARY));
                to_login = ui.link("Log in").clicked();
            });
        });
        if submit {
            self.register_submit();
        }
        if to_login {
            self.navigate(Route::Login);
        }
    }

    pub(crate) fn render_login_panel(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let mut to_register = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let ScreenView::Login(form) = &mut self.screen.view else {
                return;
            };
            form_column(ui, |ui| {
                ui.heading("Log in");
                ui.add(TextEdit::singleline(&mut form.email).hint_text("Email"));
                let password = ui.add(
                    TextEdit::singleline(&mut form.password)
                        .password(true)
                        .hint_text("Password"),
                );
                let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(!form.in_flight, egui::Button::new("Log in"))
                    .clicked();
                submit = clicked || enter;
                if form.in_flight {
                    ui.spinner();
                }
                ui.add_space(8.0);
                ui.label(RichText::new("New here?").color(COLOR_TEXT_SECONDARY));
                to_register = ui.link("Create an account").clicked();
            });
        });
        if submit {
            self.login_submit();
        }
        if to_register {
            self.navigate(Route::Register);
        }
    }
}
