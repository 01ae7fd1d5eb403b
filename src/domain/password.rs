//! src/domain/password.rs
use secrecy::{ExposeSecret, Secret};

pub const MIN_LENGTH: usize = 12;
pub const MAX_LENGTH: usize = 128;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter your password.")]
    Empty,
    #[error("Passwords must be at least 12 characters long.")]
    TooShort,
    #[error("Passwords must be at most 128 characters long.")]
    TooLong,
    #[error("The two passwords you entered do not match.")]
    Mismatch,
}

/// A password that is only ever forwarded to the identity provider.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Any non-empty password, as typed on the login form.
    pub fn parse(s: Secret<String>) -> Result<Self, Error> {
        if s.expose_secret().is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self(s))
    }

    /// A password chosen on the signup form, checked against its
    /// confirmation field.
    pub fn parse_new(s: Secret<String>, check: &Secret<String>) -> Result<Self, Error> {
        let password = Self::parse(s)?;

        let length = password.0.expose_secret().chars().count();
        if length < MIN_LENGTH {
            return Err(Error::TooShort);
        }
        if length > MAX_LENGTH {
            return Err(Error::TooLong);
        }

        if password.0.expose_secret() != check.expose_secret() {
            return Err(Error::Mismatch);
        }

        Ok(password)
    }
}

impl ExposeSecret<String> for Password {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
