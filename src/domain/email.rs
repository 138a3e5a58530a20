//! src/domain/email.rs
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Empty email")]
    Empty,
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Email(String);

impl Email {
    /// Leading and trailing whitespace is trimmed before validation, so the
    /// stored value is exactly what goes on the wire.
    pub fn parse(s: String) -> Result<Self, Error> {
        let s = s.trim();

        if s.is_empty() {
            return Err(Error::Empty);
        }

        if is_email_shaped(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::Invalid(format!("Invalid email: {}", s)))
        }
    }
}

/// The permissive check the signup form has always used: something@something
/// with a dot somewhere after the `@`, no whitespace anywhere, nothing more.
/// Stricter validation is left to the delivery services.
fn is_email_shaped(s: &str) -> bool {
    if s.contains(char::is_whitespace) || s.matches('@').count() != 1 {
        return false;
    }

    let (local, domain) = match s.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    // The dot must have at least one character on each side.
    !local.is_empty()
        && domain
            .match_indices('.')
            .any(|(i, _)| i > 0 && i < domain.len() - 1)
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
