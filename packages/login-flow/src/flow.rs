//! Sign-in submission state machine
//!
//! The flow has two steps: collect an identifier and request a code, then
//! collect the code and verify it. Decisions are pure and synchronous; the
//! remote call in between is the only IO.
//!
//! ```text
//! edit_identifier ─┐            ┌─ edit_code
//!                  ▼            ▼
//!           IdentifierEntry ──► CodeEntry ──► completed (navigate away)
//!                  │  request_code  │  verify_code
//!                  └─ failure: is_invalid, stay ─┘
//! ```
//!
//! UI code drives [`LoginState`] directly: `begin_submit` hands back the
//! [`Submission`] to execute, the caller awaits it, then feeds the result to
//! `finish_submit`. [`LoginFlow`] bundles the same three calls for callers
//! that own the state outright.

use tracing::{debug, info, warn};

use crate::api::AuthApi;
use crate::code::{format_code, strip_code};
use crate::error::{LoginError, Result};
use crate::identifier::{clean_identifier, mask_identifier, normalize_identifier, IdentifierKind};
use crate::step::Step;

/// Remote call requested by [`LoginState::begin_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    RequestCode { identifier: String },
    VerifyCode { identifier: String, code: String },
}

impl Submission {
    /// Run the remote call this submission stands for.
    pub async fn execute<A: AuthApi + ?Sized>(&self, api: &A) -> anyhow::Result<()> {
        match self {
            Submission::RequestCode { identifier } => api.request_code(identifier).await,
            Submission::VerifyCode { identifier, code } => {
                api.verify_code(identifier, code).await
            }
        }
    }
}

/// What a finished submission did to the flow
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Code was sent; the flow moved to [`Step::CodeEntry`]
    CodeRequested,
    /// Code was accepted; the caller should navigate away
    SignedIn,
    Failed(LoginError),
}

impl SubmitOutcome {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SubmitOutcome::SignedIn)
    }
}

/// All mutable state of the sign-in view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    step: Step,
    /// Display form of the identifier
    identifier: String,
    /// Display form of the code
    code: String,
    acceptable: bool,
    is_submitting: bool,
    is_invalid: bool,
    completed: bool,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether the current identifier passes validation
    pub fn is_acceptable(&self) -> bool {
        self.acceptable
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the last submission attempt failed
    pub fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    /// Whether the code was verified and the view is done
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the submit button should be shown
    pub fn shows_submit(&self) -> bool {
        self.step == Step::CodeEntry || self.acceptable
    }

    /// Heading for the current step, switching to the failure wording when
    /// the last attempt was rejected.
    pub fn heading(&self) -> String {
        if self.is_invalid {
            self.step.invalid_message(&self.identifier)
        } else {
            self.step.title(&self.identifier)
        }
    }

    /// Apply an input event on the identifier field.
    pub fn edit_identifier(&mut self, raw: &str) -> IdentifierKind {
        if self.step != Step::IdentifierEntry {
            debug!("Ignoring identifier edit outside identifier entry");
            return normalize_identifier(&self.identifier).kind;
        }

        let normalized = normalize_identifier(raw);
        if self.acceptable != normalized.acceptable {
            debug!("Identifier acceptable: {}", normalized.acceptable);
            self.acceptable = normalized.acceptable;
        }
        self.clear_invalid();
        self.identifier = normalized.display;
        normalized.kind
    }

    /// Apply an input event on the code field.
    pub fn edit_code(&mut self, raw: &str) {
        self.clear_invalid();
        self.code = format_code(raw);
    }

    /// Start a submission from the current step.
    ///
    /// On success the submitting flag is set and the returned [`Submission`]
    /// must be executed and passed to [`finish_submit`](Self::finish_submit).
    /// Local failures set the invalid flag where [`LoginError::marks_invalid`]
    /// says so and leave the submitting flag clear.
    pub fn begin_submit(&mut self) -> Result<Submission> {
        if self.is_submitting {
            debug!("Submission already in progress");
            return Err(LoginError::Busy);
        }
        if self.completed {
            debug!("Sign-in already complete");
            return Err(LoginError::Completed);
        }

        let identifier = clean_identifier(&self.identifier);
        let submission = match self.step {
            Step::IdentifierEntry => {
                if !self.acceptable {
                    return Err(self.reject(LoginError::NotAcceptable));
                }
                Submission::RequestCode { identifier }
            }
            Step::CodeEntry => {
                let code = strip_code(&self.code);
                if code.is_empty() {
                    return Err(self.reject(LoginError::MissingCode));
                }
                Submission::VerifyCode { identifier, code }
            }
        };

        self.is_submitting = true;
        Ok(submission)
    }

    /// Record the result of the remote call started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Results that arrive after sign-in completed, or without a submission
    /// in flight, are dropped without touching the state.
    pub fn finish_submit(&mut self, result: anyhow::Result<()>) -> SubmitOutcome {
        if self.completed {
            debug!("Dropping submission result after sign-in completed");
            return SubmitOutcome::Failed(LoginError::Completed);
        }
        if !self.is_submitting {
            debug!("Dropping submission result with nothing in flight");
            return SubmitOutcome::Failed(LoginError::NotSubmitting);
        }
        self.is_submitting = false;

        let masked = mask_identifier(&clean_identifier(&self.identifier));
        match (result, self.step) {
            (Ok(()), Step::IdentifierEntry) => {
                info!("Sign-in code requested for {}", masked);
                self.step = Step::CodeEntry;
                self.clear_invalid();
                SubmitOutcome::CodeRequested
            }
            (Ok(()), Step::CodeEntry) => {
                info!("Sign-in code verified for {}", masked);
                self.completed = true;
                self.clear_invalid();
                SubmitOutcome::SignedIn
            }
            (Err(e), step) => {
                warn!("Sign-in {:?} failed for {}: {}", step, masked, e);
                SubmitOutcome::Failed(self.reject(LoginError::Remote(e)))
            }
        }
    }

    fn reject(&mut self, error: LoginError) -> LoginError {
        if error.marks_invalid() && !self.is_invalid {
            self.is_invalid = true;
        }
        error
    }

    fn clear_invalid(&mut self) {
        if self.is_invalid {
            self.is_invalid = false;
        }
    }
}

/// Owns a [`LoginState`] and an [`AuthApi`] and runs whole submissions
pub struct LoginFlow<A> {
    api: A,
    state: LoginState,
    on_signed_in: Option<Box<dyn FnMut()>>,
}

impl<A: AuthApi> LoginFlow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: LoginState::new(),
            on_signed_in: None,
        }
    }

    /// Register the navigation to run once the code is verified.
    pub fn on_signed_in(mut self, navigate: impl FnMut() + 'static) -> Self {
        self.on_signed_in = Some(Box::new(navigate));
        self
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn edit_identifier(&mut self, raw: &str) -> IdentifierKind {
        self.state.edit_identifier(raw)
    }

    pub fn edit_code(&mut self, raw: &str) {
        self.state.edit_code(raw)
    }

    /// Submit the current step and wait for the remote call.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.state.begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Sign-in submission refused: {}", e);
                return SubmitOutcome::Failed(e);
            }
        };

        let result = submission.execute(&self.api).await;
        let outcome = self.state.finish_submit(result);

        if outcome.is_signed_in() {
            if let Some(navigate) = self.on_signed_in.as_mut() {
                navigate();
            }
        }
        outcome
    }
}
