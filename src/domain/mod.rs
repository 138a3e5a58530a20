//! src/domain/mod.rs
mod email;

pub use email::{Email, Error as EmailError};

/// One subscription attempt, built fresh for every submission and dropped
/// once the attempt resolves. Nothing is persisted.
#[derive(Debug)]
pub struct SubscriptionRequest {
    pub email: Email,
}

impl SubscriptionRequest {
    pub fn parse(raw_email: &str) -> Result<Self, EmailError> {
        Ok(Self {
            email: Email::parse(raw_email.to_string())?,
        })
    }
}
