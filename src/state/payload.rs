//! JSON body sent to the lead endpoint

use super::forms::LeadForm;
use serde::{Deserialize, Serialize};

/// Flat name → trimmed value mapping built once at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub timeline: String,
    pub reason: String,
}

impl SubmissionPayload {
    /// Collect the canonical fields. Fields the form lacks become empty strings.
    pub fn from_form(form: &LeadForm) -> Self {
        Self {
            name: form.trimmed_value("name"),
            email: form.trimmed_value("email"),
            phone: form.trimmed_value("phone"),
            street: form.trimmed_value("street"),
            city: form.trimmed_value("city"),
            state: form.trimmed_value("state"),
            zip: form.trimmed_value("zip"),
            timeline: form.trimmed_value("timeline"),
            reason: form.trimmed_value("reason"),
        }
    }

    /// First space-separated word of the name, or "Friend"
    pub fn greeting_name(&self) -> &str {
        self.name
            .split(' ')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("Friend")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, Step};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_standard_form() {
        let mut form = LeadForm::standard();
        for (name, value) in [
            ("name", " Ada Lovelace "),
            ("email", "ada@example.com"),
            ("phone", "(555) 123-4567"),
            ("street", "1 Main St"),
            ("city", "Austin"),
            ("state", "TX"),
            ("zip", "78701"),
            ("timeline", "ASAP"),
            ("reason", "Relocating\n"),
        ] {
            form.field_mut(name).unwrap().set_value(value);
        }

        assert_eq!(
            SubmissionPayload::from_form(&form),
            SubmissionPayload {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                street: "1 Main St".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip: "78701".to_string(),
                timeline: "ASAP".to_string(),
                reason: "Relocating".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let mut form = LeadForm::new(vec![Step::new(
            "Only",
            vec![FormField::text("name", "Name")],
        )])
        .unwrap();
        form.field_mut("name").unwrap().set_value("Grace");

        let payload = SubmissionPayload::from_form(&form);
        assert_eq!(payload.name, "Grace");
        assert_eq!(payload.phone, "");
        assert_eq!(payload.timeline, "");
    }

    #[test]
    fn test_serializes_all_keys_as_strings() {
        let json = serde_json::to_value(SubmissionPayload::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 9);
        for key in [
            "name", "email", "phone", "street", "city", "state", "zip", "timeline", "reason",
        ] {
            assert_eq!(object[key], serde_json::json!(""), "{key}");
        }
    }

    #[test]
    fn test_greeting_name() {
        let mut payload = SubmissionPayload {
            name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(payload.greeting_name(), "Ada");
        payload.name.clear();
        assert_eq!(payload.greeting_name(), "Friend");
        payload.name = "Cher".to_string();
        assert_eq!(payload.greeting_name(), "Cher");
    }
}
