// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Financial Document Analyzer";

/// Application name and metadata constants
pub const APP_NAME: &str = "Doc Analyzer";

/// Backend
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/analyze";
pub const ENDPOINT_ENV_VAR: &str = "DOC_ANALYZER_ENDPOINT";
pub const PDF_MIME: &str = "application/pdf";

/// User-facing texts
pub const MISSING_INPUT_NOTICE: &str = "Please upload a PDF and enter a query";
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed. Check backend logs.";

/// App related Magic Numbers
pub const MAX_RECENT_FILES: usize = 10;
pub const DEFAULT_RESULT_FONT_SIZE: f32 = 13.0;
// Longest slice of an error body kept for logs
pub const MAX_LOGGED_BODY: usize = 512;
