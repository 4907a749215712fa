//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering with validation styling
//! - `contact_form`: The contact form screen

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
