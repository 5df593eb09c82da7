//! Multi-step form controller
//!
//! `FormWizard` owns one form's navigation, validation and submission state.
//! It never draws anything: the UI renders its state and feeds it
//! [`WizardEvent`]s, and notices go out through a [`NotificationPort`].

mod notification;
mod submission;
mod submit_control;

pub use notification::{Notice, NoticeKind, NotificationPort};
pub use submission::{PendingSubmission, SubmissionOutcome};
pub use submit_control::SubmitControl;
#[cfg(test)]
pub use submit_control::{SENDING_LABEL, SUBMIT_LABEL};

use crate::endpoint::{EndpointReply, LeadSubmitter, SubmissionError};
use crate::state::validation::{self, INVALID_PHONE_TITLE};
use crate::state::{Form, FormField, LeadForm, SubmissionPayload, ValidationError};
use std::sync::Arc;
use uuid::Uuid;

/// User intents the wizard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// "Next" control
    Next,
    /// "Back" control
    Prev,
    /// Enter pressed inside the active step
    Enter,
    /// Submit control
    Submit,
}

#[derive(Debug, Clone)]
struct InFlight {
    id: Uuid,
    greeting: String,
}

/// Navigation, validation and submission for one form
pub struct FormWizard {
    form: LeadForm,
    submit_control: SubmitControl,
    sending: bool,
    in_flight: Option<InFlight>,
    submitter: Arc<dyn LeadSubmitter>,
    signature: String,
}

impl FormWizard {
    pub fn new(form: LeadForm, submitter: Arc<dyn LeadSubmitter>, signature: &str) -> Self {
        let mut wizard = Self {
            form,
            submit_control: SubmitControl::default(),
            sending: false,
            in_flight: None,
            submitter,
            signature: signature.to_string(),
        };
        wizard.show_step(0);
        wizard
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit_control
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn submitter(&self) -> Arc<dyn LeadSubmitter> {
        Arc::clone(&self.submitter)
    }

    /// Show step `index` and toggle the submit control: visible only on the last step
    pub fn show_step(&mut self, index: usize) {
        self.form.show_step(index);
        self.submit_control.visible = self.form.is_last_step();
    }

    /// Validate the active step and advance. Returns true if the step changed.
    pub fn next(&mut self, notifier: &mut dyn NotificationPort) -> bool {
        if let Err(err) = validation::validate_step(self.form.active_step()) {
            self.reject(&err, notifier);
            return false;
        }
        if self.form.is_last_step() {
            return false;
        }
        self.show_step(self.form.current() + 1);
        true
    }

    /// Go back one step without validating. Returns true if the step changed.
    pub fn prev(&mut self) -> bool {
        let moved = self.form.prev();
        self.submit_control.visible = self.form.is_last_step();
        moved
    }

    /// Dispatch an event. A returned submission must be sent and its outcome
    /// fed back through [`FormWizard::complete_submission`].
    pub fn handle_event(
        &mut self,
        event: WizardEvent,
        notifier: &mut dyn NotificationPort,
    ) -> Option<PendingSubmission> {
        match event {
            WizardEvent::Next => {
                self.next(notifier);
                None
            }
            WizardEvent::Prev => {
                self.prev();
                None
            }
            // Enter only submits from the last step
            WizardEvent::Enter if !self.form.is_last_step() => {
                self.next(notifier);
                None
            }
            WizardEvent::Enter | WizardEvent::Submit => self.begin_submission(notifier),
        }
    }

    /// Guard, validate and snapshot the form. Returns None when nothing should
    /// be sent: a submission is already in flight, the submit control is
    /// hidden, or validation failed.
    pub fn begin_submission(
        &mut self,
        notifier: &mut dyn NotificationPort,
    ) -> Option<PendingSubmission> {
        if self.sending {
            tracing::debug!("submission already in flight, ignoring");
            return None;
        }
        if !self.submit_control.visible {
            tracing::debug!(step = self.form.current(), "submit outside the last step, ignoring");
            return None;
        }
        if let Err(err) = validation::validate_required_fields(self.form.active_step()) {
            self.reject(&err, notifier);
            return None;
        }

        self.sending = true;
        self.submit_control.begin_loading();

        if let Err(err) = self.normalize_phone() {
            notifier.notify(NoticeKind::Warning, INVALID_PHONE_TITLE, &err.to_string());
            tracing::debug!(error = %err, "phone rejected at submit");
            self.reset_send_state();
            return None;
        }

        let payload = SubmissionPayload::from_form(&self.form);
        let pending = PendingSubmission::new(payload);
        self.in_flight = Some(InFlight {
            id: pending.id,
            greeting: pending.payload.greeting_name().to_string(),
        });
        tracing::info!(id = %pending.id, "submission started");
        Some(pending)
    }

    /// Apply the endpoint's answer for submission `id`. Returns true when the
    /// lead was accepted.
    pub fn complete_submission(
        &mut self,
        id: Uuid,
        result: Result<EndpointReply, SubmissionError>,
        notifier: &mut dyn NotificationPort,
    ) -> bool {
        let Some(in_flight) = self.in_flight.take_if(|f| f.id == id) else {
            tracing::warn!(%id, "completion for unknown submission, ignoring");
            return false;
        };

        let accepted = match result.and_then(EndpointReply::into_result) {
            Ok(_) => {
                notifier.notify(
                    NoticeKind::Success,
                    &format!("Thank you, {}!", in_flight.greeting),
                    &format!(
                        "We’ve received your details.\nOur team will contact you shortly.\n\n– {}",
                        self.signature
                    ),
                );
                self.form.reset();
                tracing::info!(%id, "lead accepted");
                true
            }
            Err(err) => {
                notifier.notify(NoticeKind::Error, "Error", &err.to_string());
                false
            }
        };

        self.reset_send_state();
        accepted
    }

    /// Run a whole submission, waiting for the endpoint
    #[cfg(test)]
    pub async fn submit(&mut self, notifier: &mut dyn NotificationPort) -> bool {
        let Some(pending) = self.begin_submission(notifier) else {
            return false;
        };
        let outcome = pending.send(self.submitter()).await;
        self.complete_submission(outcome.id, outcome.result, notifier)
    }

    /// Move focus to the next field of the active step
    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.form.get_active_field_mut()
    }

    fn normalize_phone(&mut self) -> Result<(), ValidationError> {
        if let Some(phone) = self.form.field_mut("phone") {
            let normalized = validation::normalize_phone(phone.value())?;
            phone.set_value(&normalized);
        }
        Ok(())
    }

    /// Focus the offending field and warn when the error calls for it
    fn reject(&mut self, err: &ValidationError, notifier: &mut dyn NotificationPort) {
        if let Some(index) = err.focus_index() {
            self.form.set_active_field(index);
        }
        if err.shows_dialog() {
            notifier.notify(NoticeKind::Warning, INVALID_PHONE_TITLE, &err.to_string());
        }
        tracing::debug!(error = %err, step = self.form.current(), "step validation failed");
    }

    fn reset_send_state(&mut self) {
        self.sending = false;
        self.in_flight = None;
        self.submit_control.restore();
    }
}
