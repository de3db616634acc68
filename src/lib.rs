//! Doc Analyzer library
//!
//! Upload a PDF, ask a question, show what the analysis backend answers.

pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod constant;
pub mod document;
pub mod messages;
pub mod style;
pub mod ui;
pub mod workflow;
