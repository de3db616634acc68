use egui::{Context, Id, Modal, RichText};

/// Blocking notice for a rejected submit. Everything behind it is
/// unreachable until it is dismissed.
pub struct NoticeDialog;

impl NoticeDialog {
    /// Returns true once the user dismissed the notice.
    pub fn show(ctx: &Context, message: &str) -> bool {
        let mut dismissed = false;
        let response = Modal::new(Id::new("input_notice")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.label(RichText::new(message).size(15.0));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
        dismissed || response.should_close()
    }
}
