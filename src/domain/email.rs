//! src/domain/email.rs
use serde::{Deserialize, Serialize};
use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please enter your email address.")]
    Empty,
    #[error("{0} is not a valid email address.")]
    Invalid(String),
}

/// A trimmed, lower-cased, syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Email(String);

impl Email {
    pub fn parse(s: String) -> Result<Self, Error> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Err(Error::Empty);
        }

        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(Error::Invalid(s))
        }
    }
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
