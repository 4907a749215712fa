//! Application state and key handling

use crate::controller::FormController;
use crate::state::Form;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Form, submit button and banner
    pub controller: FormController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(controller: FormController) -> Self {
        Self {
            controller,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Expire the banner and pick up a finished delivery
    pub fn tick(&mut self) {
        self.controller.tick();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit_button = self.controller.form.is_submit_active();
        let active_kind = self.controller.form.active_kind();

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.blur();
                self.controller.form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur();
                self.controller.form.prev_field();
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.press_submit();
            }
            KeyCode::Esc => {
                if self.controller.banner.is_some() {
                    self.controller.dismiss_banner();
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if on_submit_button => self.press_submit(),
            KeyCode::Enter => match active_kind {
                Some(kind) if kind.is_multiline() => self.input_char('\n'),
                // Enter in a single-line input submits the form
                _ => self.press_submit(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_char(c);
            }
            KeyCode::Backspace => {
                if let Some(kind) = active_kind {
                    self.controller.form.field_mut(kind).pop_char();
                    self.controller.clear_annotation(kind);
                }
            }
            _ => {}
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(kind) = self.controller.form.active_kind() {
            self.controller.form.field_mut(kind).push_char(c);
            self.controller.clear_annotation(kind);
        }
    }

    /// Focus is leaving the active field
    fn blur(&mut self) {
        if let Some(kind) = self.controller.form.active_kind() {
            self.controller.validate_field(kind);
        }
    }

    /// Submit button press. A disabled button ignores the press.
    fn press_submit(&mut self) {
        if !self.controller.submit_state.is_enabled() {
            tracing::debug!("Submit pressed while the button is disabled");
            return;
        }
        self.controller.submit();
    }
}
