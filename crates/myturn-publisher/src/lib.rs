//! Publishing channel for rendered availability messages.
//!
//! [`Publisher`] is the seam the sweep publishes through; [`XPublisher`]
//! posts to the X API v2 using OAuth 1.0a user credentials.

pub mod error;
mod oauth;
pub mod x;

use std::future::Future;

pub use error::PublishError;
pub use x::XPublisher;

/// Accepts one rendered message. Each call is a single best-effort attempt.
pub trait Publisher {
    /// Publishes `text`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the channel did not accept the message.
    fn publish(&self, text: &str) -> impl Future<Output = Result<(), PublishError>> + Send;
}
