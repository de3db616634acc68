//! Submission workflow
//!
//! `Workflow` owns everything the user can see change: the selected document,
//! the query text and the state of the analysis. It is the only caller of the
//! analyzer. Each submission runs on a worker thread and reports back over a
//! channel, which the UI drains once per frame with [`Workflow::poll`].

use crate::backend::analyzer::{AnalysisError, AnalysisResponse, Analyze};
use crate::constant::{GENERIC_FAILURE_MESSAGE, MISSING_INPUT_NOTICE};
use crate::document::Document;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Called from the worker thread after an outcome is queued, so a sleeping UI
/// wakes up and polls.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl WorkflowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowState::Loading)
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            WorkflowState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please upload a PDF and enter a query")]
    InputMissing,

    #[error("An analysis is already running")]
    InFlight,
}

struct Completion {
    submission: u64,
    outcome: Result<AnalysisResponse, AnalysisError>,
}

/// Reports the outcome when dropped. A worker that panics or never starts
/// still closes its submission, as `Interrupted`.
struct CompletionGuard {
    submission: u64,
    sender: Sender<Completion>,
    repaint: Option<RepaintHook>,
    outcome: Option<Result<AnalysisResponse, AnalysisError>>,
}

impl CompletionGuard {
    fn complete(mut self, outcome: Result<AnalysisResponse, AnalysisError>) {
        self.outcome = Some(outcome);
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let outcome = self
            .outcome
            .take()
            .unwrap_or(Err(AnalysisError::Interrupted));
        // The receiver lives as long as the workflow; a closed channel means
        // nobody is left to care.
        let _ = self.sender.send(Completion {
            submission: self.submission,
            outcome,
        });
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

pub struct Workflow {
    analyzer: Arc<dyn Analyze>,
    document: Option<Document>,
    query: String,
    state: WorkflowState,
    notice: Option<String>,
    // Number of the most recent submission; outcomes tagged otherwise are stale
    submission: u64,
    started_at: Option<Instant>,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    repaint: Option<RepaintHook>,
}

impl Workflow {
    pub fn new(analyzer: Arc<dyn Analyze>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            analyzer,
            document: None,
            query: String::new(),
            state: WorkflowState::Idle,
            notice: None,
            submission: 0,
            started_at: None,
            sender,
            receiver,
            repaint: None,
        }
    }

    pub fn with_repaint_hook(mut self, hook: RepaintHook) -> Self {
        self.repaint = Some(hook);
        self
    }

    pub fn set_file(&mut self, document: Document) {
        info!("Selected {} ({} bytes)", document.name, document.len());
        self.document = Some(document);
    }

    pub fn clear_file(&mut self) {
        self.document = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Blocking notice raised by a rejected submit, until dismissed.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Start an analysis of the selected document with the current query.
    ///
    /// Rejected without touching the network when either input is missing
    /// (the state is left as it was and a notice is raised) or when an
    /// analysis is already running.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.state.is_loading() {
            warn!("Submit ignored, submission {} still running", self.submission);
            return Err(SubmitError::InFlight);
        }

        let document = match &self.document {
            Some(document) if !self.query.is_empty() => document.clone(),
            _ => {
                info!("Submit rejected, document or query missing");
                self.notice = Some(MISSING_INPUT_NOTICE.to_string());
                return Err(SubmitError::InputMissing);
            }
        };

        self.submission += 1;
        self.state = WorkflowState::Loading;
        self.started_at = Some(Instant::now());
        info!(
            "Submission {}: analyzing {} ({} bytes)",
            self.submission,
            document.name,
            document.len()
        );

        let guard = CompletionGuard {
            submission: self.submission,
            sender: self.sender.clone(),
            repaint: self.repaint.clone(),
            outcome: None,
        };
        let analyzer = Arc::clone(&self.analyzer);
        let query = self.query.clone();

        // If the thread cannot be spawned the closure is dropped with the
        // guard inside, which reports `Interrupted`.
        if let Err(e) = thread::Builder::new()
            .name(format!("analysis-{}", self.submission))
            .spawn(move || {
                let outcome = analyzer.analyze(&document, &query);
                guard.complete(outcome);
            })
        {
            error!("Failed to spawn analysis thread: {}", e);
        }

        Ok(())
    }

    /// Apply any outcome that arrived since the last call. Returns true when
    /// the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.receiver.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Block until the running analysis resolves. Returns immediately when
    /// nothing is running.
    pub fn wait(&mut self) {
        while self.state.is_loading() {
            match self.receiver.recv() {
                Ok(completion) => {
                    self.apply(completion);
                }
                // Unreachable while `self.sender` is alive
                Err(_) => {
                    self.apply(Completion {
                        submission: self.submission,
                        outcome: Err(AnalysisError::Interrupted),
                    });
                }
            }
        }
    }

    fn apply(&mut self, completion: Completion) -> bool {
        if completion.submission != self.submission || !self.state.is_loading() {
            debug!("Discarding stale outcome of submission {}", completion.submission);
            return false;
        }

        let elapsed = self
            .started_at
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default();

        self.state = match completion.outcome {
            Ok(response) => {
                info!(
                    "Submission {} succeeded in {:.1?} ({} chars)",
                    completion.submission,
                    elapsed,
                    response.result.len()
                );
                WorkflowState::Succeeded(response.result)
            }
            Err(e) => {
                error!(
                    "Submission {} failed after {:.1?}: {}",
                    completion.submission, elapsed, e
                );
                WorkflowState::Failed(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };
        true
    }
}
