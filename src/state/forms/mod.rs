//! Form domain layer
//!
//! Field values, their validation annotations, and focus handling for the
//! contact form.

mod field;
mod form_state;

pub use field::{FieldValidity, FormField};
pub use form_state::{ContactForm, Form, SubmissionPayload};
