//! Multi-step form state: steps, current step index and field focus

use super::field::FormField;
use super::step::Step;

/// Trait for common form operations on the fields of the visible step
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// A form made of ordered steps, exactly one of which is active
#[derive(Debug, Clone)]
pub struct LeadForm {
    steps: Vec<Step>,
    current: usize,
    focus: usize,
}

impl LeadForm {
    /// Build a custom form from its steps
    #[cfg(test)]
    pub fn new(steps: Vec<Step>) -> anyhow::Result<Self> {
        anyhow::ensure!(!steps.is_empty(), "a form needs at least one step");
        Ok(Self::from_steps(steps))
    }

    /// The contact / property / details form shipped with the app
    pub fn standard() -> Self {
        let steps = vec![
            Step::new(
                "Contact",
                vec![
                    FormField::text("name", "Full Name").required(),
                    FormField::email("email", "Email").required(),
                    FormField::phone("phone", "Phone").required(),
                ],
            ),
            Step::new(
                "Property",
                vec![
                    FormField::text("street", "Street Address").required(),
                    FormField::text("city", "City").required(),
                    FormField::text("state", "State").required(),
                    FormField::text("zip", "ZIP Code").required(),
                ],
            ),
            Step::new(
                "Details",
                vec![
                    FormField::choice(
                        "timeline",
                        "Timeline to Sell",
                        "Select...",
                        &["ASAP", "1-3 months", "3-6 months", "6+ months"],
                    )
                    .required(),
                    FormField::multiline("reason", "Reason for Selling"),
                ],
            ),
        ];
        Self::from_steps(steps)
    }

    /// Callers guarantee `steps` is non-empty
    fn from_steps(steps: Vec<Step>) -> Self {
        let mut form = Self {
            steps,
            current: 0,
            focus: 0,
        };
        form.show_step(0);
        form
    }

    /// Activate the step at `index` and deactivate every other step.
    /// Out-of-range indices are clamped to the last step.
    pub fn show_step(&mut self, index: usize) {
        let index = index.min(self.steps.len() - 1);
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.set_active(i == index);
        }
        self.current = index;
        self.focus = 0;
        tracing::debug!(step = index, "showing step");
    }

    /// Go back one step. Returns false on the first step.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.show_step(self.current - 1);
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.steps.len() - 1
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn active_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn active_step_mut(&mut self) -> &mut Step {
        &mut self.steps[self.current]
    }

    /// Index of the focused field within the active step
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.active_step().fields.get(self.focus)
    }

    /// Look a field up by name across all steps
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.steps.iter().find_map(|s| s.field(name))
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.steps.iter_mut().find_map(|s| s.field_mut(name))
    }

    /// Trimmed value of a named field, empty when the form has no such field
    pub fn trimmed_value(&self, name: &str) -> String {
        self.field(name)
            .map(|f| f.value().trim().to_string())
            .unwrap_or_default()
    }

    /// Clear every field of every step. The current step is kept.
    pub fn reset(&mut self) {
        for field in self.steps.iter_mut().flat_map(|s| s.fields.iter_mut()) {
            field.clear();
        }
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        self.active_step().fields.len()
    }
    fn active_field(&self) -> usize {
        self.focus
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus = index.min(self.field_count().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let focus = self.focus;
        self.active_step_mut().fields.get_mut(focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(form: &LeadForm) -> usize {
        form.steps().iter().filter(|s| s.is_active()).count()
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_standard_starts_on_first_step() {
            let form = LeadForm::standard();
            assert_eq!(form.current(), 0);
            assert_eq!(form.step_count(), 3);
            assert!(form.steps()[0].is_active());
            assert!(form.steps()[1].is_hidden());
            assert!(form.steps()[2].is_hidden());
        }

        #[test]
        fn test_new_rejects_empty_steps() {
            assert!(LeadForm::new(Vec::new()).is_err());
        }

        #[test]
        fn test_new_activates_first_step() {
            let form = LeadForm::new(vec![
                Step::new("A", vec![FormField::text("a", "A")]),
                Step::new("B", vec![FormField::text("b", "B")]),
            ])
            .unwrap();
            assert_eq!(active_count(&form), 1);
            assert!(form.steps()[0].is_active());
        }

        #[test]
        fn test_show_step_leaves_exactly_one_active() {
            let mut form = LeadForm::standard();
            for i in [2, 0, 1, 2] {
                form.show_step(i);
                assert_eq!(active_count(&form), 1);
                assert!(form.steps()[i].is_active());
                assert_eq!(form.current(), i);
            }
        }

        #[test]
        fn test_show_step_clamps_out_of_range() {
            let mut form = LeadForm::standard();
            form.show_step(10);
            assert_eq!(form.current(), 2);
            assert!(form.is_last_step());
        }

        #[test]
        fn test_show_step_resets_focus() {
            let mut form = LeadForm::standard();
            form.set_active_field(2);
            form.show_step(1);
            assert_eq!(form.focus(), 0);
        }

        #[test]
        fn test_prev_on_first_step_is_noop() {
            let mut form = LeadForm::standard();
            assert!(!form.prev());
            assert_eq!(form.current(), 0);
        }

        #[test]
        fn test_prev_goes_back() {
            let mut form = LeadForm::standard();
            form.show_step(2);
            assert!(form.prev());
            assert_eq!(form.current(), 1);
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn test_field_lookup_spans_steps() {
            let form = LeadForm::standard();
            for name in [
                "name", "email", "phone", "street", "city", "state", "zip", "timeline", "reason",
            ] {
                assert!(form.field(name).is_some(), "missing {name}");
            }
            assert!(form.field("fax").is_none());
        }

        #[test]
        fn test_trimmed_value() {
            let mut form = LeadForm::standard();
            form.field_mut("city").unwrap().set_value("  Austin ");
            assert_eq!(form.trimmed_value("city"), "Austin");
            assert_eq!(form.trimmed_value("fax"), "");
        }

        #[test]
        fn test_reset_clears_all_fields_and_keeps_step() {
            let mut form = LeadForm::standard();
            form.field_mut("name").unwrap().set_value("Ada");
            form.field_mut("timeline").unwrap().set_value("ASAP");
            form.show_step(2);
            form.reset();
            assert_eq!(form.trimmed_value("name"), "");
            assert_eq!(form.trimmed_value("timeline"), "");
            assert_eq!(form.current(), 2);
        }

        #[test]
        fn test_next_field_cycles_within_step() {
            let mut form = LeadForm::standard();
            for _ in 0..3 {
                form.next_field();
            }
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps_to_last() {
            let mut form = LeadForm::standard();
            form.prev_field();
            assert_eq!(form.active_field(), 2);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = LeadForm::standard();
            form.set_active_field(100);
            assert_eq!(form.active_field(), 2);
        }

        #[test]
        fn test_get_active_field_mut_follows_focus() {
            let mut form = LeadForm::standard();
            form.next_field();
            let field = form.get_active_field_mut().unwrap();
            assert_eq!(field.name, "email");
        }

        #[test]
        fn test_focused_field_follows_focus() {
            let mut form = LeadForm::standard();
            assert_eq!(form.focused_field().map(|f| f.name.as_str()), Some("name"));
            form.set_active_field(2);
            assert_eq!(form.focused_field().map(|f| f.name.as_str()), Some("phone"));
            form.show_step(2);
            assert_eq!(form.focused_field().map(|f| f.name.as_str()), Some("timeline"));
        }
    }
}
