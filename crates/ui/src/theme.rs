//! Visuals for the TTS options window: a dark, compact panel built around
//! wide volume sliders.

use bevy_egui::{egui, EguiContexts};

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(220, 222, 230);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(245, 245, 250);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(140, 145, 160);
/// Accent for the slider fill and the enabled Preview button.
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(120, 200, 170);

pub const FONT_SUBHEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;

/// Long enough that one percent is a visible step at 0–200 %.
pub const SLIDER_WIDTH: f32 = 200.0;

pub fn apply_panel_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();

    let window = egui::Color32::from_rgba_unmultiplied(24, 26, 32, 235);
    style.visuals.window_fill = window;
    style.visuals.window_stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(60));
    style.visuals.window_corner_radius = egui::CornerRadius::same(4);

    style.visuals.slider_trailing_fill = true;
    style.visuals.handle_shape = egui::style::HandleShape::Rect { aspect_ratio: 0.5 };
    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.5, PRIMARY);

    style.spacing.slider_width = SLIDER_WIDTH;
    style.spacing.item_spacing = egui::vec2(10.0, 6.0);
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );

    ctx.set_style(style);
}
