use egui::{TextEdit, Ui};

pub struct QueryEditor;

impl QueryEditor {
    /// Returns true when the text changed this frame.
    pub fn show(ui: &mut Ui, query: &mut String) -> bool {
        ui.add(
            TextEdit::multiline(query)
                .hint_text("Enter your financial analysis query...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
        .changed()
    }
}
