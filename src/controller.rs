//! Contact form controller
//!
//! Owns the form, the submit button state and the outcome banner, and drives
//! one submission at a time through the configured [`EmailProvider`].
//! Delivery runs on a background task so the UI keeps handling keys while a
//! request is in flight.

use crate::config::{ConfigError, ProviderConfig};
use crate::provider::{EmailProvider, ProviderError};
use crate::state::{Banner, ContactForm, FieldKind, SubmissionPayload, SubmitState};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Banner text when the provider ids are unusable
pub const CONFIG_ERROR_MESSAGE: &str = "Configuration error. Please configure EmailJS first.";

/// Banner text after a successful delivery
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

type DeliveryResult = Result<String, ProviderError>;

/// A locally valid submission, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSubmission {
    config: ProviderConfig,
    payload: SubmissionPayload,
}

pub struct FormController {
    pub form: ContactForm,
    pub submit_state: SubmitState,
    pub banner: Option<Banner>,
    provider_config: Result<ProviderConfig, ConfigError>,
    provider: Arc<dyn EmailProvider>,
    /// Receiver for the outcome of the delivery task, while one runs
    in_flight: Option<oneshot::Receiver<DeliveryResult>>,
}

impl FormController {
    /// Create a controller. The configuration is validated by the caller once
    /// at startup; an error here blocks every submission.
    pub fn new(
        provider_config: Result<ProviderConfig, ConfigError>,
        provider: Box<dyn EmailProvider>,
    ) -> Self {
        Self {
            form: ContactForm::new(),
            submit_state: SubmitState::Idle,
            banner: None,
            provider_config,
            provider: Arc::from(provider),
            in_flight: None,
        }
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        self.provider_config.as_ref().err()
    }

    /// Validate one field and update its annotation
    pub fn validate_field(&mut self, kind: FieldKind) -> bool {
        self.form.field_mut(kind).validate()
    }

    /// Validate every field. All validators run so every error is shown.
    pub fn validate_form(&mut self) -> bool {
        FieldKind::ALL
            .into_iter()
            .map(|kind| self.validate_field(kind))
            .fold(true, |all_valid, valid| all_valid && valid)
    }

    /// Input handler: editing a field back to a non-blank value removes its
    /// error annotation until the next blur or submit.
    pub fn clear_annotation(&mut self, kind: FieldKind) {
        let field = self.form.field_mut(kind);
        if !field.trimmed().is_empty() {
            field.clear_annotation();
        }
    }

    /// Replace any shown banner
    pub fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Drop the banner once its fade has finished and collect the outcome of
    /// a finished delivery
    pub fn tick(&mut self) {
        if self.banner.as_ref().is_some_and(Banner::is_expired) {
            self.banner = None;
        }
        self.poll_delivery();
    }

    /// Whether a delivery task is running
    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate the form and, when everything is in order, start delivering
    /// it in the background. Returns whether a delivery was started.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn submit(&mut self) -> bool {
        if self.is_sending() {
            tracing::debug!("Submit ignored while a submission is in flight");
            return false;
        }
        let Some(pending) = self.begin_submit() else {
            return false;
        };

        let provider = Arc::clone(&self.provider);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = provider.send(&pending.config, &pending.payload).await;
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(result);
        });
        self.in_flight = Some(rx);
        true
    }

    /// Local half of a submission: validation, configuration check and the
    /// Idle -> Sending transition. Returns `None` when nothing should be sent.
    fn begin_submit(&mut self) -> Option<PendingSubmission> {
        self.form.clear_annotations();

        if !self.validate_form() {
            if let Some(kind) = self.form.first_invalid() {
                self.form.focus(kind);
            }
            tracing::debug!("Submission blocked by field validation");
            return None;
        }

        let config = match &self.provider_config {
            Ok(config) => config.clone(),
            Err(err) => {
                tracing::error!("EmailJS is not configured: {err}");
                self.show_banner(Banner::error(CONFIG_ERROR_MESSAGE));
                return None;
            }
        };

        self.submit_state = SubmitState::Sending;
        Some(PendingSubmission {
            config,
            payload: self.form.payload(),
        })
    }

    /// Apply the delivery outcome if the background task has finished
    pub fn poll_delivery(&mut self) {
        let Some(rx) = self.in_flight.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(abandoned()),
        };
        self.in_flight = None;
        self.finish_delivery(result);
    }

    /// Wait for the running delivery, if any, and apply its outcome
    pub async fn wait_for_delivery(&mut self) {
        if let Some(rx) = self.in_flight.take() {
            let result = rx.await.unwrap_or_else(|_| Err(abandoned()));
            self.finish_delivery(result);
        }
    }

    /// The submit button is always returned to Idle, whatever the outcome.
    fn finish_delivery(&mut self, result: DeliveryResult) {
        match result {
            Ok(response) => {
                tracing::info!("Email sent: {response}");
                self.show_banner(Banner::success(SUCCESS_MESSAGE));
                self.form.reset();
            }
            Err(err) => {
                let category = err.category();
                tracing::error!(?category, "Email delivery failed: {err}");
                self.show_banner(Banner::error(category.user_message()));
            }
        }

        self.submit_state = SubmitState::Idle;
    }
}

/// Error for a delivery task that ended without reporting back
fn abandoned() -> ProviderError {
    ProviderError::Transport("delivery task ended without a result".to_string())
}
