//! Form field value objects

use crate::state::validation::{self, FieldError, FieldKind};

/// Outcome of the most recent validation of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidity {
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// Represents a single form field with its current value and annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub label: String,
    pub value: String,
    pub validity: FieldValidity,
    /// Inline error text, present only while the field is invalid
    pub error_text: Option<String>,
}

impl FormField {
    /// Create an empty, unvalidated field
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            value: String::new(),
            validity: FieldValidity::Unvalidated,
            error_text: None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    /// The value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Run the field's rules and record the outcome.
    /// Any previous error text is dropped before the new outcome is applied.
    pub fn validate(&mut self) -> bool {
        self.clear_annotation();
        match validation::validate(self.kind, &self.value) {
            Ok(()) => {
                self.validity = FieldValidity::Valid;
                true
            }
            Err(err) => {
                self.mark_invalid(err);
                false
            }
        }
    }

    fn mark_invalid(&mut self, err: FieldError) {
        self.validity = FieldValidity::Invalid;
        self.error_text = Some(err.to_string());
    }

    /// Drop error text and validity styling
    pub fn clear_annotation(&mut self) {
        self.validity = FieldValidity::Unvalidated;
        self.error_text = None;
    }

    /// Clear the value and any annotation
    pub fn reset(&mut self) {
        self.value.clear();
        self.clear_annotation();
    }

    pub fn is_invalid(&self) -> bool {
        self.validity == FieldValidity::Invalid
    }
}
