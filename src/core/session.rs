//! Builder session: the single user's spec, preview and submission lifecycle

use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::payload::SubmissionPayload;
use crate::models::strategy::StrategySpec;
use crate::services::error::ApiError;
use crate::services::evaluation::{EvaluationResponse, EvaluationService};
use crate::strategies::builder::StrategyAction;
use crate::strategies::expression::build_expression;

/// Shown to the user for any failed submission; details go to the log
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Error submitting strategy. Please check your API and inputs.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a submission is already in flight")]
    SubmissionPending,

    #[error("no submission is in flight")]
    NothingPending,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Screen the dashboard should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Builder,
    Results(EvaluationResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
    /// Last attempt failed; carries the user-facing message
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct BuilderSession {
    spec: StrategySpec,
    preview: Option<String>,
    view: View,
    submission: SubmissionState,
}

impl BuilderSession {
    pub fn new() -> Self {
        Self::with_spec(StrategySpec::new())
    }

    pub fn with_spec(spec: StrategySpec) -> Self {
        Self {
            spec,
            preview: None,
            view: View::Builder,
            submission: SubmissionState::Idle,
        }
    }

    pub fn spec(&self) -> &StrategySpec {
        &self.spec
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Last built expression text, kept until the next build
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.submission != SubmissionState::Pending
    }

    pub fn dispatch(&mut self, action: &StrategyAction) {
        self.spec = self.spec.apply(action);
    }

    /// Build the expression preview for the current spec
    pub fn build_expression(&mut self) -> &str {
        self.preview.insert(build_expression(&self.spec))
    }

    /// Mark a submission as in flight and hand back its payload.
    ///
    /// Refused while another submission is pending.
    pub fn begin_submission(&mut self) -> Result<SubmissionPayload, SessionError> {
        if self.submission == SubmissionState::Pending {
            return Err(SessionError::SubmissionPending);
        }
        let payload = SubmissionPayload::from_spec(&self.spec);
        self.preview = Some(payload.expression.clone());
        self.submission = SubmissionState::Pending;
        Ok(payload)
    }

    /// Settle the in-flight submission. Success switches to the results view;
    /// failure keeps the spec and exposes the generic message.
    pub fn complete_submission(
        &mut self,
        outcome: Result<EvaluationResponse, ApiError>,
    ) -> Result<(), SessionError> {
        if self.submission != SubmissionState::Pending {
            return Err(SessionError::NothingPending);
        }
        match outcome {
            Ok(response) => {
                info!(status = response.status, "Strategy evaluation acknowledged");
                self.submission = SubmissionState::Idle;
                self.view = View::Results(response);
                Ok(())
            }
            Err(e) => {
                error!(
                    error = %e,
                    transport = e.is_transport(),
                    status = ?e.status(),
                    "Strategy submission failed"
                );
                self.submission = SubmissionState::Failed(SUBMISSION_FAILED_MESSAGE.to_string());
                Err(SessionError::Api(e))
            }
        }
    }

    /// Begin, send once and settle.
    ///
    /// Dropping the returned future mid-request leaves the session pending;
    /// follow up with [`abandon_submission`](Self::abandon_submission).
    pub async fn submit<S>(&mut self, service: &S) -> Result<(), SessionError>
    where
        S: EvaluationService + ?Sized,
    {
        let payload = self.begin_submission()?;
        let outcome = service.evaluate(&payload).await;
        self.complete_submission(outcome)
    }

    /// Give up on the in-flight submission without an outcome.
    ///
    /// The session returns to Idle with no error message, and the view and
    /// spec are left as they were. A late response has nowhere to land.
    pub fn abandon_submission(&mut self) -> Result<(), SessionError> {
        if self.submission != SubmissionState::Pending {
            return Err(SessionError::NothingPending);
        }
        warn!("Abandoning in-flight strategy submission");
        self.submission = SubmissionState::Idle;
        Ok(())
    }

    /// Leave the results screen; the spec is kept
    pub fn back_to_builder(&mut self) {
        self.view = View::Builder;
    }
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}
