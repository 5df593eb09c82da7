//! Form field value objects

/// What kind of input a field represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Telephone input, checked against the phone pattern on step advance
    Phone,
    /// Multi-line free text (textarea)
    Multiline,
    /// Fixed option list (select). The first option is the placeholder.
    Choice(Vec<String>),
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(usize),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub required: bool,
}

impl FormField {
    fn with_kind(name: &str, label: &str, kind: FieldKind) -> Self {
        let value = match kind {
            FieldKind::Choice(_) => FieldValue::Choice(0),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value,
            required: false,
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Text)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Email)
    }

    pub fn phone(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Phone)
    }

    pub fn multiline(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Multiline)
    }

    /// Create a choice field. `placeholder` becomes option 0 with an empty value.
    pub fn choice(name: &str, label: &str, placeholder: &str, options: &[&str]) -> Self {
        let mut all = vec![placeholder.to_string()];
        all.extend(options.iter().map(|o| o.to_string()));
        Self::with_kind(name, label, FieldKind::Choice(all))
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_phone(&self) -> bool {
        self.kind == FieldKind::Phone
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Get the submitted value. The placeholder option of a choice field is empty.
    pub fn value(&self) -> &str {
        match (&self.value, &self.kind) {
            (FieldValue::Text(s), _) => s,
            (FieldValue::Choice(0), _) => "",
            (FieldValue::Choice(i), FieldKind::Choice(options)) => {
                options.get(*i).map(String::as_str).unwrap_or("")
            }
            (FieldValue::Choice(_), _) => "",
        }
    }

    /// True when the trimmed value is empty
    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }

    /// Set the text value. For choice fields, selects the matching option
    /// (or the placeholder when nothing matches).
    pub fn set_value(&mut self, value: &str) {
        match &self.kind {
            FieldKind::Choice(options) => {
                let index = options
                    .iter()
                    .skip(1)
                    .position(|o| o == value)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.value = FieldValue::Choice(index);
            }
            _ => self.value = FieldValue::Text(value.to_string()),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Select the next option of a choice field (wraps around)
    pub fn next_option(&mut self) {
        if let (FieldValue::Choice(i), FieldKind::Choice(options)) = (&mut self.value, &self.kind)
        {
            *i = (*i + 1) % options.len().max(1);
        }
    }

    /// Select the previous option of a choice field (wraps around)
    pub fn prev_option(&mut self) {
        if let (FieldValue::Choice(i), FieldKind::Choice(options)) = (&mut self.value, &self.kind)
        {
            *i = if *i == 0 {
                options.len().saturating_sub(1)
            } else {
                *i - 1
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(i) => *i = 0,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.value, &self.kind) {
            (FieldValue::Choice(i), FieldKind::Choice(options)) => {
                let option = options.get(*i).cloned().unwrap_or_default();
                format!("◂ {option} ▸")
            }
            _ => self.value().to_string(),
        }
    }
}
