//! Profile panel. Renders exactly the widgets `ProfileMode::visible_fields` names.

use super::super::profile::{ProfileController, ProfileField};
use super::super::style::COLOR_TEXT_SECONDARY;
use super::super::{AttendoApp, Route, ScreenView};
use super::form_column;
use eframe::egui::{self, RichText, TextEdit};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileAction {
    Edit,
    Save,
    ChangePassword,
    Back,
}

fn read_only_row(ui: &mut egui::Ui, caption: &str, value: &str) {
    ui.label(RichText::new(caption).small().color(COLOR_TEXT_SECONDARY));
    ui.label(value);
}

fn render_field(
    ui: &mut egui::Ui,
    controller: &mut ProfileController,
    field: ProfileField,
    action: &mut Option<ProfileAction>,
) {
    let shown = controller.shown().cloned().unwrap_or_default();
    match field {
        ProfileField::NameLabel => {
            ui.heading(format!("Hello, {}", shown.username));
        }
        ProfileField::EmailLabel => read_only_row(ui, "Email", &shown.email),
        ProfileField::SkillLabel => read_only_row(ui, "Skill", &shown.skill),
        ProfileField::LastEditedLabel => read_only_row(ui, "Last edited", &shown.last_edited),
        ProfileField::EditButton => {
            if ui.button("Edit profile").clicked() {
                *action = Some(ProfileAction::Edit);
            }
        }
        ProfileField::NameInput => {
            ui.add(TextEdit::singleline(&mut controller.draft.username).hint_text("Name"));
        }
        ProfileField::EmailInput => {
            ui.add(TextEdit::singleline(&mut controller.draft.email).hint_text("Email"));
        }
        ProfileField::SkillInput => {
            ui.add(TextEdit::singleline(&mut controller.draft.skill).hint_text("Skill"));
        }
        ProfileField::SaveButton => {
            if ui.button("Save").clicked() {
                *action = Some(ProfileAction::Save);
            }
            ui.separator();
        }
        ProfileField::PasswordInput => {
            ui.add(
                TextEdit::singleline(&mut controller.password.new_password)
                    .password(true)
                    .hint_text("New password"),
            );
        }
        ProfileField::ConfirmPasswordInput => {
            ui.add(
                TextEdit::singleline(&mut controller.password.confirm_password)
                    .password(true)
                    .hint_text("Confirm password"),
            );
        }
        ProfileField::ChangePasswordButton => {
            if ui.button("Change password").clicked() {
                *action = Some(ProfileAction::ChangePassword);
            }
        }
    }
}

impl AttendoApp {
    pub(crate) fn render_profile_panel(&mut self, ctx: &egui::Context) {
        let mut action = None;

        egui::TopBottomPanel::top("profile_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("\u{2190}").clicked() {
                    action = Some(ProfileAction::Back);
                }
                ui.label(RichText::new("Profile").strong());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let ScreenView::Profile(profile) = &mut self.screen.view else {
                return;
            };
            let controller = &mut profile.controller;
            let mode = controller.mode();
            form_column(ui, |ui| {
                for field in mode.visible_fields() {
                    render_field(ui, controller, *field, &mut action);
                }
            });
        });

        match action {
            Some(ProfileAction::Edit) => self.profile_enter_edit(),
            Some(ProfileAction::Save) => self.profile_submit(),
            Some(ProfileAction::ChangePassword) => self.profile_change_password(),
            Some(ProfileAction::Back) => self.navigate(Route::Home),
            None => {}
        }
    }
}
