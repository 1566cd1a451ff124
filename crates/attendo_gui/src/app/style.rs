//! Palette and one-time style application.

use super::AttendoApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0xf6, 0xf7, 0xfb);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0xe9, 0xec, 0xf4);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1f, 0x24, 0x33);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x5b, 0x63, 0x78);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x3f, 0x51, 0xb5);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0x30, 0x3f, 0x9f);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0xd0, 0xd5, 0xe2);

fn visuals(fill: Color32, stroke: Color32, text: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, text),
        expansion,
    }
}

impl AttendoApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::light();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_SECONDARY;
        style.visuals.panel_fill = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.text_edit_bg_color = Some(COLOR_BG_SECONDARY);

        style.visuals.widgets.noninteractive =
            visuals(COLOR_BG_PRIMARY, COLOR_BORDER, COLOR_TEXT_SECONDARY, 0.0);
        style.visuals.widgets.inactive =
            visuals(COLOR_BG_TERTIARY, COLOR_BORDER, COLOR_TEXT_PRIMARY, 0.0);
        style.visuals.widgets.hovered =
            visuals(COLOR_ACCENT_HOVER, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
        style.visuals.widgets.active = visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
        style.visuals.widgets.open = visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(12.0, 10.0);
        style.spacing.interact_size.y = 34.0;
        style.spacing.text_edit_width = 300.0;
        style.spacing.menu_margin = Margin::same(8);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
