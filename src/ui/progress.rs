use egui::{RichText, Ui};

pub struct ProgressIndicator;

impl ProgressIndicator {
    pub fn show(ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new().size(28.0).color(crate::style::ACCENT));
            ui.label(RichText::new("Analyzing document...").weak());
        });
    }
}
