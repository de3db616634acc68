use egui::{Align, Color32, FontId, Frame, Layout, Margin, RichText, TextEdit, Ui};

pub struct ResultViewer;

impl ResultViewer {
    /// Shows the text exactly as returned: whitespace kept, nothing interpreted.
    pub fn show(ui: &mut Ui, result: &str, font_size: f32) {
        Frame::new()
            .fill(Color32::from_gray(243))
            .corner_radius(12)
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Analysis Result:")
                            .size(18.0)
                            .strong()
                            .color(Color32::from_gray(55)),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("Copy").clicked() {
                            ui.ctx().copy_text(result.to_owned());
                        }
                    });
                });

                // &str is a read-only text buffer: selectable, not editable
                let mut text = result;
                ui.add(
                    TextEdit::multiline(&mut text)
                        .font(FontId::monospace(font_size))
                        .frame(false)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}
