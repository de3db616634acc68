pub mod error_notice;
pub mod file_picker;
pub mod notice;
pub mod progress;
pub mod query_editor;
pub mod result_viewer;
pub mod viewport;

use crate::workflow::WorkflowState;

/// Which of the state-driven sections a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub progress: bool,
    pub result: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl<'a> Sections<'a> {
    pub fn of(state: &'a WorkflowState) -> Self {
        Self {
            progress: state.is_loading(),
            result: state.result(),
            error: state.error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use std::path::PathBuf;

    #[test]
    fn test_sections_follow_state() {
        let idle = WorkflowState::Idle;
        assert_eq!(
            Sections::of(&idle),
            Sections {
                progress: false,
                result: None,
                error: None
            }
        );

        let loading = WorkflowState::Loading;
        let sections = Sections::of(&loading);
        assert!(sections.progress);
        assert_eq!((sections.result, sections.error), (None, None));

        let done = WorkflowState::Succeeded("line 1\n  line 2".to_string());
        let sections = Sections::of(&done);
        assert!(!sections.progress);
        assert_eq!(sections.result, Some("line 1\n  line 2"));
        assert_eq!(sections.error, None);

        let failed = WorkflowState::Failed("boom".to_string());
        let sections = Sections::of(&failed);
        assert!(!sections.progress);
        assert_eq!(sections.result, None);
        assert_eq!(sections.error, Some("boom"));
    }

    // Render every component once on a headless context
    #[test]
    fn test_components_render() {
        let ctx = egui::Context::default();
        let document = Document::new("report.pdf", vec![0u8; 10]);
        let recent = vec![PathBuf::from("/tmp/q1.pdf")];
        let mut query = "What is the net income?".to_string();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                assert!(file_picker::FilePicker::show(ui, Some(&document), &recent).is_none());
                assert!(file_picker::FilePicker::show(ui, None, &[]).is_none());
                assert!(!query_editor::QueryEditor::show(ui, &mut query));
                progress::ProgressIndicator::show(ui);
                error_notice::ErrorNotice::show(ui, "Analysis failed. Check backend logs.");
                result_viewer::ResultViewer::show(ui, "Net income: $5M\n\tdone", 13.0);
            });
            assert!(!notice::NoticeDialog::show(ctx, "Please upload a PDF and enter a query"));
        });
    }
}
