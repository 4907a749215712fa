//! Email provider module for EmailJS delivery

mod client;
mod error;
mod traits;

pub use client::EmailJsClient;
pub use error::ProviderError;
pub use traits::EmailProvider;

#[cfg(test)]
pub use traits::MockEmailProvider;
