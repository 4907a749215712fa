//! Contact form state and focus handling

use super::field::FormField;
use crate::state::validation::FieldKind;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Trimmed field values captured at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The name / email / message form plus its submit button
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    /// 0-2 are the fields, 3 is the submit button
    pub active_field_index: usize,
}

impl ContactForm {
    /// Focus index of the submit button
    pub const SUBMIT_INDEX: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldKind::Name),
            email: FormField::new(FieldKind::Email),
            message: FormField::new(FieldKind::Message),
            active_field_index: 0,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &FormField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Message => &mut self.message,
        }
    }

    /// The field that has focus, or `None` when the submit button does
    pub fn active_kind(&self) -> Option<FieldKind> {
        FieldKind::from_index(self.active_field_index)
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    pub fn focus(&mut self, kind: FieldKind) {
        self.active_field_index = kind.index();
    }

    /// First field currently annotated as invalid, in form order
    pub fn first_invalid(&self) -> Option<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| self.field(*kind).is_invalid())
    }

    pub fn clear_annotations(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).clear_annotation();
        }
    }

    /// Clear every value and annotation and return focus to the first field
    pub fn reset(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).reset();
        }
        self.active_field_index = 0;
    }

    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: self.name.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            message: self.message.trimmed().to_string(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldKind::from_index(index).map(|kind| self.field(kind))
    }
}
