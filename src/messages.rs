use crate::document::Document;

/// Response messages from background operations
pub enum ResponseMessage {
    DocumentLoaded(Result<Document, String>),
}
