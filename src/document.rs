use crate::constant::PDF_MIME;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dropped file {0} carries no data")]
    NoData(String),
}

// The document the user picked. Bytes are shared so a submission can hold
// them while the user picks another file.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub mime: String,
    pub path: Option<PathBuf>,
    pub bytes: Arc<[u8]>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let mime = guess_mime(Path::new(&name));
        Self {
            name,
            mime,
            path: None,
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());
        Ok(Self {
            mime: guess_mime(path),
            name,
            path: Some(path.to_path_buf()),
            bytes: bytes.into(),
        })
    }

    /// Build a document from a file dropped onto the window. Native platforms
    /// hand over a path, web hands over the bytes.
    pub fn from_dropped(file: &egui::DroppedFile) -> Result<Self, DocumentError> {
        if let Some(path) = &file.path {
            return Self::from_path(path);
        }
        match &file.bytes {
            Some(bytes) => Ok(Self::new(file.name.clone(), bytes.clone())),
            None => Err(DocumentError::NoData(file.name.clone())),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Skip the payload, it can be megabytes
impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The picker only hints at PDF, so other types pass through with their own
/// MIME type. Unknown extensions are declared as PDF.
fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(PDF_MIME)
        .to_string()
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let size = bytes as f64;
    if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{} B", bytes)
    }
}
