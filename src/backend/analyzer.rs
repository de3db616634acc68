use crate::constant::MAX_LOGGED_BODY;
use crate::document::Document;
use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Backend answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend reported an error: {0}")]
    Backend(String),

    #[error("Failed to parse backend response: {0}")]
    Parse(String),

    #[error("Analysis ended without an outcome")]
    Interrupted,
}

/// The backend reply. Only `result` is relied upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub result: String,
}

// What actually comes over the wire: the backend reports pipeline failures as
// `{"error": ...}` with a 200 status.
#[derive(Deserialize)]
struct WireResponse {
    result: Option<String>,
    error: Option<String>,
}

/// One request/response exchange with the analysis backend.
pub trait Analyze: Send + Sync {
    fn analyze(&self, document: &Document, query: &str) -> Result<AnalysisResponse, AnalysisError>;
}

pub struct AnalysisClient {
    endpoint: String,
    http: Client,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AnalysisError> {
        // The blocking client defaults to a 30s timeout; analysis may take longer
        let http = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AnalysisError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_http_client(endpoint, http))
    }

    pub fn with_http_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(document: &Document, query: &str) -> Result<Form, AnalysisError> {
        let file = Part::bytes(document.bytes.to_vec())
            .file_name(document.name.clone())
            .mime_str(&document.mime)
            .map_err(|e| AnalysisError::Request(format!("Invalid MIME type: {}", e)))?;
        Ok(Form::new().part("file", file).text("query", query.to_owned()))
    }
}

impl Analyze for AnalysisClient {
    fn analyze(&self, document: &Document, query: &str) -> Result<AnalysisResponse, AnalysisError> {
        let form = Self::build_form(document, query)?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_LOGGED_BODY),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| AnalysisError::Network(format!("Failed to read response: {}", e)))?;
        parse_response(&body)
    }
}

pub fn parse_response(body: &[u8]) -> Result<AnalysisResponse, AnalysisError> {
    let wire: WireResponse =
        serde_json::from_slice(body).map_err(|e| AnalysisError::Parse(e.to_string()))?;
    match (wire.result, wire.error) {
        (Some(result), _) => Ok(AnalysisResponse { result }),
        (None, Some(error)) => Err(AnalysisError::Backend(error)),
        (None, None) => Err(AnalysisError::Parse(
            "response has no `result` field".to_string(),
        )),
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
