//! State of the submit button

pub const SUBMIT_LABEL: &str = "Submit";
pub const SENDING_LABEL: &str = "⏳ Sending...";

/// Submit button: only shown on the last step, disabled while sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub visible: bool,
    pub enabled: bool,
    pub label: String,
    original_label: String,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            visible: false,
            enabled: true,
            label: label.to_string(),
            original_label: label.to_string(),
        }
    }

    /// Disable and swap in the loading label
    pub fn begin_loading(&mut self) {
        self.enabled = false;
        self.label = SENDING_LABEL.to_string();
    }

    /// Re-enable and put the original label back
    pub fn restore(&mut self) {
        self.enabled = true;
        self.label = self.original_label.clone();
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}
