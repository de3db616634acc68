//! Command line arguments and the headless one-shot mode.

use crate::backend::analyzer::Analyze;
use crate::constant::GENERIC_FAILURE_MESSAGE;
use crate::document::{Document, DocumentError};
use crate::workflow::{SubmitError, Workflow, WorkflowState};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "doc-analyzer", version, about = "Ask questions about a financial PDF")]
pub struct Cli {
    /// Document to preselect, or to analyze when --query is given
    pub file: Option<PathBuf>,

    /// Run one analysis without opening a window and print the result
    #[arg(long, short)]
    pub query: Option<String>,

    /// Analysis endpoint URL, overrides environment and settings
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Error, Debug)]
pub enum HeadlessError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("{0}")]
    Failed(String),
}

impl HeadlessError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HeadlessError::Submit(SubmitError::InputMissing) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

/// Drive one submission through the workflow and wait for it.
pub fn run_headless(
    analyzer: Arc<dyn Analyze>,
    file: Option<&Path>,
    query: &str,
) -> Result<String, HeadlessError> {
    let mut workflow = Workflow::new(analyzer);
    if let Some(path) = file {
        workflow.set_file(Document::from_path(path)?);
    }
    workflow.set_query(query);

    workflow.submit()?;
    workflow.wait();

    match workflow.state() {
        WorkflowState::Succeeded(result) => Ok(result.clone()),
        WorkflowState::Failed(message) => Err(HeadlessError::Failed(message.clone())),
        WorkflowState::Idle | WorkflowState::Loading => {
            Err(HeadlessError::Failed(GENERIC_FAILURE_MESSAGE.to_string()))
        }
    }
}
