//! Contact-form submission workflow.
//!
//! ```text
//!            submit                 all valid
//!   Idle ───────────► Validating ─────────────► Submitting ──complete──► Completed ──► Idle
//!    ▲                    │                         │
//!    │     any invalid    ▼                         └──fail──► Failed ──► Idle
//!    └──────────────── Rejected
//! ```
//!
//! The workflow never starts a timer. On acceptance it hands back a
//! [`SubmissionTicket`] and the configured delay; the caller schedules
//! [`SubmissionWorkflow::complete`] through its [`Scheduler`](crate::Scheduler).

use std::time::Duration;

use crate::notify::Severity;
use crate::validation::{Field, FieldId, FormState};

/// Notification text after a successful submission
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Default simulated submit latency
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Submitting,
    Completed,
    Failed,
}

/// Identifies one accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; focus `first_invalid`
    Rejected {
        form: FormState,
        first_invalid: FieldId,
    },
    /// Every field passed; schedule completion after `delay`
    Accepted {
        form: FormState,
        ticket: SubmissionTicket,
        delay: Duration,
    },
    /// A submission is already in flight
    Ignored,
}

/// Stateless verdict over a set of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Rejected { first_invalid: FieldId },
    Accepted,
}

/// Validate `fields` in document order and decide.
pub fn run_workflow(fields: &[Field]) -> Verdict {
    match FormState::validate_all(fields).first_invalid() {
        Some(field) => Verdict::Rejected {
            first_invalid: field.id.clone(),
        },
        None => Verdict::Accepted,
    }
}

/// What the shell does when a submission completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub ticket: SubmissionTicket,
    pub message: String,
    pub severity: Severity,
    /// Clear every field value and its decoration
    pub clear_fields: bool,
}

/// What the shell does when a submission fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub ticket: SubmissionTicket,
    pub message: String,
    pub severity: Severity,
    /// Always false: the user keeps what they typed
    pub clear_fields: bool,
}

/// Coordinates validation and the delayed completion of one contact form.
#[derive(Debug, Clone)]
pub struct SubmissionWorkflow {
    state: WorkflowState,
    delay: Duration,
    next_ticket: u64,
    in_flight: Option<SubmissionTicket>,
    transitions: Vec<WorkflowState>,
}

impl Default for SubmissionWorkflow {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SubmissionWorkflow {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: WorkflowState::Idle,
            delay,
            next_ticket: 1,
            in_flight: None,
            transitions: vec![WorkflowState::Idle],
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// True while a submission waits for completion; the submit control
    /// should be disabled.
    pub fn is_busy(&self) -> bool {
        self.state == WorkflowState::Submitting
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// States visited by the latest attempt, starting from `Idle`
    pub fn transitions(&self) -> &[WorkflowState] {
        &self.transitions
    }

    fn enter(&mut self, state: WorkflowState) {
        tracing::debug!(from = ?self.state, to = ?state, "workflow transition");
        self.state = state;
        self.transitions.push(state);
    }

    /// Handle a submit trigger.
    ///
    /// Every field is validated even after the first failure.
    pub fn submit(&mut self, fields: &[Field]) -> SubmitOutcome {
        if self.is_busy() {
            tracing::debug!("submit ignored while a submission is in flight");
            return SubmitOutcome::Ignored;
        }

        self.transitions.clear();
        self.transitions.push(self.state);
        self.enter(WorkflowState::Validating);

        let form = FormState::validate_all(fields);
        let first_invalid = form.first_invalid().map(|field| field.id.clone());

        match first_invalid {
            Some(first_invalid) => {
                self.enter(WorkflowState::Rejected);
                tracing::info!(
                    errors = form.errors().count(),
                    first = %first_invalid,
                    "submission rejected"
                );
                self.enter(WorkflowState::Idle);
                SubmitOutcome::Rejected {
                    form,
                    first_invalid,
                }
            }
            None => {
                let ticket = SubmissionTicket(self.next_ticket);
                self.next_ticket += 1;
                self.in_flight = Some(ticket);
                self.enter(WorkflowState::Submitting);
                tracing::info!(
                    ticket = ticket.0,
                    delay_ms = self.delay.as_millis() as u64,
                    "submission accepted"
                );
                SubmitOutcome::Accepted {
                    form,
                    ticket,
                    delay: self.delay,
                }
            }
        }
    }

    /// Finish the in-flight submission.
    ///
    /// Returns `None` for a ticket that is not in flight, so a stray or
    /// duplicated timer cannot complete twice.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> Option<Completion> {
        self.take_in_flight(ticket)?;
        self.enter(WorkflowState::Completed);
        tracing::info!(ticket = ticket.0, "submission completed");
        self.enter(WorkflowState::Idle);

        Some(Completion {
            ticket,
            message: SUCCESS_MESSAGE.to_string(),
            severity: Severity::Success,
            clear_fields: true,
        })
    }

    /// Abort the in-flight submission with an error, keeping the form.
    pub fn fail(&mut self, ticket: SubmissionTicket, reason: impl Into<String>) -> Option<Failure> {
        self.take_in_flight(ticket)?;
        let reason = reason.into();
        self.enter(WorkflowState::Failed);
        tracing::warn!(ticket = ticket.0, %reason, "submission failed");
        self.enter(WorkflowState::Idle);

        Some(Failure {
            ticket,
            message: format!("Message could not be sent: {}", reason),
            severity: Severity::Error,
            clear_fields: false,
        })
    }

    fn take_in_flight(&mut self, ticket: SubmissionTicket) -> Option<SubmissionTicket> {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "ignoring stale submission ticket");
            return None;
        }
        self.in_flight.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> Vec<Field> {
        vec![
            Field::new("name", "Ada Lovelace"),
            Field::new("email", "ada@example.com"),
            Field::new("message", "I would like to talk about engines."),
        ]
    }

    #[test]
    fn starts_idle() {
        let workflow = SubmissionWorkflow::default();
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert_eq!(workflow.delay(), Duration::from_millis(2000));
        assert!(!workflow.is_busy());
    }

    #[test]
    fn accepted_then_completed() {
        let mut workflow = SubmissionWorkflow::default();
        let SubmitOutcome::Accepted { ticket, delay, form } = workflow.submit(&valid_fields())
        else {
            panic!("expected acceptance");
        };
        assert!(form.is_valid());
        assert_eq!(delay, Duration::from_millis(2000));
        assert!(workflow.is_busy());

        let done = workflow.complete(ticket).unwrap();
        assert_eq!(done.message, SUCCESS_MESSAGE);
        assert_eq!(done.severity, Severity::Success);
        assert!(done.clear_fields);
        assert_eq!(
            workflow.transitions(),
            &[
                WorkflowState::Idle,
                WorkflowState::Validating,
                WorkflowState::Submitting,
                WorkflowState::Completed,
                WorkflowState::Idle,
            ]
        );
    }

    #[test]
    fn rejected_reports_first_invalid_in_order() {
        let mut workflow = SubmissionWorkflow::default();
        let fields = vec![
            Field::new("name", "Ada"),
            Field::new("email", "broken"),
            Field::new("message", "short"),
        ];

        let SubmitOutcome::Rejected { first_invalid, form } = workflow.submit(&fields) else {
            panic!("expected rejection");
        };
        assert_eq!(first_invalid, FieldId::from("email"));
        assert_eq!(form.errors().count(), 2);
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(!workflow.transitions().contains(&WorkflowState::Submitting));
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut workflow = SubmissionWorkflow::default();
        let SubmitOutcome::Accepted { ticket, .. } = workflow.submit(&valid_fields()) else {
            panic!("expected acceptance");
        };
        assert_eq!(workflow.submit(&valid_fields()), SubmitOutcome::Ignored);
        assert!(workflow.complete(ticket).is_some());
        assert!(workflow.complete(ticket).is_none());
    }

    #[test]
    fn failure_keeps_form() {
        let mut workflow = SubmissionWorkflow::default();
        let SubmitOutcome::Accepted { ticket, .. } = workflow.submit(&valid_fields()) else {
            panic!("expected acceptance");
        };
        let failure = workflow.fail(ticket, "connection reset").unwrap();
        assert!(!failure.clear_fields);
        assert_eq!(failure.severity, Severity::Error);
        assert!(failure.message.contains("connection reset"));
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(workflow.transitions().contains(&WorkflowState::Failed));
    }

    #[test]
    fn run_workflow_verdicts() {
        assert_eq!(run_workflow(&valid_fields()), Verdict::Accepted);
        assert_eq!(
            run_workflow(&[Field::new("name", "")]),
            Verdict::Rejected {
                first_invalid: FieldId::from("name")
            }
        );
    }
}
