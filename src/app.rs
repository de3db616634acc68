use crate::backend::analyzer::Analyze;
use crate::backend::picker::{load_dropped, spawn_file_dialog, spawn_load};
use crate::config::Config;
use crate::constant::DEFAULT_WINDOW_TITLE;
use crate::messages::ResponseMessage;
use crate::style::{ACCENT, configure_style};
use crate::ui::Sections;
use crate::ui::error_notice::ErrorNotice;
use crate::ui::file_picker::{FilePicker, FilePickerAction};
use crate::ui::notice::NoticeDialog;
use crate::ui::progress::ProgressIndicator;
use crate::ui::query_editor::QueryEditor;
use crate::ui::result_viewer::ResultViewer;
use crate::workflow::Workflow;
use egui::{Key, KeyboardShortcut, Modifiers, RichText};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

const SUBMIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Enter);

pub struct AnalyzerApp {
    workflow: Workflow,
    config: Config,
    response_sender: Sender<ResponseMessage>,
    response_receiver: Receiver<ResponseMessage>,
    // Last document that failed to load, shown under the picker
    load_error: Option<String>,
}

impl AnalyzerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        analyzer: Arc<dyn Analyze>,
        initial_file: Option<PathBuf>,
    ) -> Self {
        configure_style(&cc.egui_ctx);

        let repaint_ctx = cc.egui_ctx.clone();
        let workflow =
            Workflow::new(analyzer).with_repaint_hook(Arc::new(move || repaint_ctx.request_repaint()));

        let (response_sender, response_receiver) = mpsc::channel();
        if let Some(path) = initial_file {
            spawn_load(path, response_sender.clone(), cc.egui_ctx.clone());
        }

        Self {
            workflow,
            config,
            response_sender,
            response_receiver,
            load_error: None,
        }
    }

    fn handle_responses(&mut self) {
        while let Ok(message) = self.response_receiver.try_recv() {
            match message {
                ResponseMessage::DocumentLoaded(Ok(document)) => {
                    self.load_error = None;
                    self.workflow.set_file(document);
                }
                ResponseMessage::DocumentLoaded(Err(e)) => {
                    self.load_error = Some(e);
                }
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // One document per submission; extra files are ignored
        let Some(file) = dropped.first() else {
            return;
        };
        match load_dropped(file, self.response_sender.clone(), ctx.clone()) {
            Some(Ok(document)) => {
                self.load_error = None;
                self.workflow.set_file(document);
            }
            Some(Err(e)) => {
                tracing::warn!("Failed to load dropped file: {}", e);
                self.load_error = Some(e.to_string());
            }
            // Reading from disk, reported through `response_receiver`
            None => {}
        }
    }

    fn submit(&mut self) {
        if let Err(e) = self.workflow.submit() {
            tracing::debug!("Submit rejected: {}", e);
            return;
        }
        if let Some(path) = self.workflow.document().and_then(|d| d.path.clone()) {
            self.config.add_recent_file(path);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        match FilePicker::show(
            ui,
            self.workflow.document(),
            &self.config.settings.recent_files,
        ) {
            Some(FilePickerAction::Browse) => spawn_file_dialog(
                self.config.settings.dialog_directory().map(Path::to_path_buf),
                self.response_sender.clone(),
                ui.ctx().clone(),
            ),
            Some(FilePickerAction::OpenRecent(path)) => {
                spawn_load(path, self.response_sender.clone(), ui.ctx().clone())
            }
            Some(FilePickerAction::Clear) => self.workflow.clear_file(),
            None => {}
        }
        if let Some(e) = &self.load_error {
            ErrorNotice::show(ui, e);
        }

        let mut query = self.workflow.query().to_owned();
        if QueryEditor::show(ui, &mut query) {
            self.workflow.set_query(query);
        }

        let button = egui::Button::new(
            RichText::new("Analyze Document")
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(ACCENT)
        .corner_radius(10)
        .min_size(egui::vec2(ui.available_width(), 36.0));
        let clicked = ui
            .add_enabled(!self.workflow.is_loading(), button)
            .on_hover_text("Ctrl+Enter")
            .clicked();
        let shortcut = ui.input_mut(|i| i.consume_shortcut(&SUBMIT_SHORTCUT));
        if clicked || shortcut {
            self.submit();
        }

        let sections = Sections::of(self.workflow.state());
        if sections.progress {
            ProgressIndicator::show(ui);
        }
        if let Some(error) = sections.error {
            ErrorNotice::show(ui, error);
        }
        if let Some(result) = sections.result {
            ResultViewer::show(ui, result, self.config.settings.result_font_size);
        }
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_responses();
        self.handle_dropped_files(ctx);
        self.workflow.poll();

        egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(DEFAULT_WINDOW_TITLE)
                        .size(24.0)
                        .strong()
                        .color(ACCENT),
                );
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(640.0);
                    self.show_form(ui);
                });
            });
        });

        let dismissed = self
            .workflow
            .notice()
            .is_some_and(|notice| NoticeDialog::show(ctx, notice));
        if dismissed {
            self.workflow.dismiss_notice();
        }
    }
}
