use egui::{Color32, Context, Stroke, Style, Visuals};

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    // Roomy card layout
    style.spacing.item_spacing = egui::vec2(10.0, 14.0);
    style.spacing.window_margin = egui::Margin::same(16);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);

    let mut visuals = Visuals::light();
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;
    visuals.panel_fill = Color32::from_rgb(249, 250, 251);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);
    visuals.widgets.hovered.bg_fill = Color32::from_gray(240);
    visuals.widgets.active.bg_fill = Color32::from_gray(230);

    visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    ctx.set_visuals(visuals);
}
