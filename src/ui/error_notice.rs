use egui::{Color32, RichText, Ui};

const ERROR_RED: Color32 = Color32::from_rgb(220, 38, 38);

pub struct ErrorNotice;

impl ErrorNotice {
    pub fn show(ui: &mut Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(message).color(ERROR_RED));
        });
    }
}
