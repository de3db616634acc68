use crate::document::{Document, format_size};
use egui::{Color32, Frame, Margin, RichText, Stroke, Ui};
use std::path::PathBuf;

pub enum FilePickerAction {
    Browse,
    OpenRecent(PathBuf),
    Clear,
}

pub struct FilePicker;

impl FilePicker {
    pub fn show(
        ui: &mut Ui,
        document: Option<&Document>,
        recent_files: &[PathBuf],
    ) -> Option<FilePickerAction> {
        let mut action = None;

        Frame::new()
            .stroke(Stroke::new(1.5, Color32::from_gray(205)))
            .corner_radius(12)
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let prompt = RichText::new("Click to upload a PDF document")
                        .strong()
                        .color(crate::style::ACCENT);
                    if ui
                        .add(egui::Button::new(prompt).frame(false))
                        .on_hover_text("PDF expected, any file is accepted")
                        .clicked()
                    {
                        action = Some(FilePickerAction::Browse);
                    }

                    match document {
                        Some(document) => {
                            ui.horizontal(|ui| {
                                ui.label(format!(
                                    "📄 {} ({})",
                                    document.name,
                                    format_size(document.len())
                                ));
                                if ui.small_button("✕").on_hover_text("Remove").clicked() {
                                    action = Some(FilePickerAction::Clear);
                                }
                            });
                        }
                        None => {
                            ui.label(RichText::new("or drop a file onto this window").weak());
                        }
                    }

                    if !recent_files.is_empty() {
                        ui.menu_button("Recent", |ui| {
                            for path in recent_files {
                                if ui.button(path.display().to_string()).clicked() {
                                    action = Some(FilePickerAction::OpenRecent(path.clone()));
                                    ui.close();
                                }
                            }
                        });
                    }
                });
            });

        action
    }
}
