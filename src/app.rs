//! Application state and key handling

use crate::config::LeadFormConfig;
use crate::endpoint::LeadSubmitter;
use crate::platform::{NEXT_STEP_KEY, PREV_STEP_KEY, SUBMIT_KEY};
use crate::state::{FormField, LeadForm};
use crate::wizard::{FormWizard, Notice, PendingSubmission, SubmissionOutcome, WizardEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// The form being filled in
    pub wizard: FormWizard,
    /// Notices waiting to be dismissed, front one is on screen
    pub notices: VecDeque<Notice>,
    pub config: LeadFormConfig,
    /// Whether the app should quit
    quit: bool,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: LeadFormConfig, submitter: Arc<dyn LeadSubmitter>) -> Self {
        let wizard = FormWizard::new(LeadForm::standard(), submitter, config.signature());
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            wizard,
            notices: VecDeque::new(),
            config,
            quit: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Notice currently shown as a modal dialog
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle notice dismissal first (modal)
        if !self.notices.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notices.pop_front();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if ctrl && c == SUBMIT_KEY => self.dispatch(WizardEvent::Submit),
            KeyCode::Char(c) if ctrl && c == NEXT_STEP_KEY => self.dispatch(WizardEvent::Next),
            KeyCode::Char(c) if ctrl && c == PREV_STEP_KEY => self.dispatch(WizardEvent::Prev),
            KeyCode::PageDown => self.dispatch(WizardEvent::Next),
            KeyCode::PageUp => self.dispatch(WizardEvent::Prev),
            KeyCode::Tab | KeyCode::Down => self.wizard.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.wizard.prev_field(),
            KeyCode::Right => {
                if let Some(field) = self.wizard.focused_field_mut() {
                    field.next_option();
                }
            }
            KeyCode::Left => {
                if let Some(field) = self.wizard.focused_field_mut() {
                    field.prev_option();
                }
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => {
                if let Some(field) = self.wizard.focused_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.wizard.focused_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Enter inside a multiline field of the last step types a newline, like
    /// a textarea. Everywhere else it goes to the wizard.
    fn handle_enter(&mut self) {
        let form = self.wizard.form();
        let in_textarea =
            form.is_last_step() && form.focused_field().is_some_and(FormField::is_multiline);
        if !in_textarea {
            self.dispatch(WizardEvent::Enter);
        } else if let Some(field) = self.wizard.focused_field_mut() {
            field.push_char('\n');
        }
    }

    fn dispatch(&mut self, event: WizardEvent) {
        if let Some(pending) = self.wizard.handle_event(event, &mut self.notices) {
            self.spawn_submission(pending);
        }
    }

    /// Send on a background task so the UI keeps drawing the loading state
    fn spawn_submission(&self, pending: PendingSubmission) {
        let submitter = self.wizard.submitter();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.send(submitter).await;
            if tx.send(outcome).is_err() {
                tracing::warn!("app closed before submission finished");
            }
        });
    }

    /// Apply finished submissions. Called once per frame.
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.wizard
                .complete_submission(outcome.id, outcome.result, &mut self.notices);
        }
    }
}
