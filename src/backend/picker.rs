use crate::document::{Document, DocumentError};
use crate::messages::ResponseMessage;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

/// Open the native file dialog off the UI thread and load whatever the user
/// picks. Cancelling the dialog sends nothing.
pub fn spawn_file_dialog(
    start_dir: Option<PathBuf>,
    sender: Sender<ResponseMessage>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select a PDF document")
            .add_filter("PDF", &["pdf"])
            .add_filter("All files", &["*"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            load_and_send(path, &sender, &ctx);
        }
    });
}

/// Load a known path (recent documents, command line) in the background.
pub fn spawn_load(path: PathBuf, sender: Sender<ResponseMessage>, ctx: egui::Context) {
    thread::spawn(move || load_and_send(path, &sender, &ctx));
}

/// Take a file dropped onto the window. Files with a path are read in the
/// background like any picked file and `None` is returned; files that arrive
/// as bytes are ready at once.
pub fn load_dropped(
    file: &egui::DroppedFile,
    sender: Sender<ResponseMessage>,
    ctx: egui::Context,
) -> Option<Result<Document, DocumentError>> {
    match &file.path {
        Some(path) => {
            spawn_load(path.clone(), sender, ctx);
            None
        }
        None => Some(Document::from_dropped(file)),
    }
}

fn load_and_send(path: PathBuf, sender: &Sender<ResponseMessage>, ctx: &egui::Context) {
    let loaded = Document::from_path(&path).map_err(|e| e.to_string());
    if let Err(e) = &loaded {
        tracing::warn!("Failed to load document: {}", e);
    }
    if let Err(e) = sender.send(ResponseMessage::DocumentLoaded(loaded)) {
        tracing::error!("Failed to send loaded document: {}", e);
    }
    ctx.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::mpsc;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn test_spawn_load_reports_document() {
        let test_dir = std::env::temp_dir().join(format!("test_picker_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("q2.pdf");
        fs::write(&path, b"0123456789").unwrap();

        let (sender, receiver) = mpsc::channel();
        spawn_load(path, sender, egui::Context::default());

        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::DocumentLoaded(Ok(document)) => {
                assert_eq!(document.name, "q2.pdf");
                assert_eq!(document.len(), 10);
            }
            ResponseMessage::DocumentLoaded(Err(e)) => panic!("unexpected error: {}", e),
        }

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_dropped_path_loads_in_background() {
        let test_dir = std::env::temp_dir().join(format!("test_drop_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("annual.pdf");
        fs::write(&path, b"0123456789").unwrap();
        let dropped = egui::DroppedFile {
            path: Some(path),
            name: "annual.pdf".to_string(),
            ..Default::default()
        };

        let (sender, receiver) = mpsc::channel();
        assert!(load_dropped(&dropped, sender, egui::Context::default()).is_none());

        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::DocumentLoaded(Ok(document)) => {
                assert_eq!(document.name, "annual.pdf");
                assert_eq!(document.len(), 10);
            }
            ResponseMessage::DocumentLoaded(Err(e)) => panic!("unexpected error: {}", e),
        }

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_dropped_bytes_are_ready_at_once() {
        let bytes: std::sync::Arc<[u8]> = b"%PDF-1.7".to_vec().into();
        let dropped = egui::DroppedFile {
            name: "web.pdf".to_string(),
            bytes: Some(bytes),
            ..Default::default()
        };

        let (sender, receiver) = mpsc::channel();
        let document = load_dropped(&dropped, sender, egui::Context::default())
            .unwrap()
            .unwrap();
        assert_eq!(document.name, "web.pdf");
        assert_eq!(document.len(), 8);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_spawn_load_reports_failure() {
        let path = std::env::temp_dir().join(format!("missing_{}.pdf", Uuid::new_v4()));
        let (sender, receiver) = mpsc::channel();
        spawn_load(path, sender, egui::Context::default());

        let message = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(message, ResponseMessage::DocumentLoaded(Err(_))));
    }
}
