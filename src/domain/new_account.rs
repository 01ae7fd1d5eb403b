//! src/domain/new_account.rs
use super::policy::{AccessError, DomainPolicy};
use super::{email, name, password, Email, Name, Password};
use secrecy::Secret;

#[derive(thiserror::Error, Debug)]
pub enum NewAccountError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error(transparent)]
    Email(#[from] email::Error),
    #[error(transparent)]
    Name(#[from] name::Error),
    #[error(transparent)]
    Password(#[from] password::Error),
}

/// Raw signup form fields.
#[derive(serde::Deserialize, Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
    pub password_check: Secret<String>,
}

#[derive(Debug)]
pub struct NewAccount {
    pub name: Name,
    pub email: Email,
    pub password: Password,
}

impl NewAccount {
    /// The domain policy runs first so that outsiders always see the access
    /// message, whatever else is wrong with the form.
    pub fn parse(form: SignupForm, policy: &DomainPolicy) -> Result<Self, NewAccountError> {
        policy.check(&form.email)?;

        Ok(Self {
            email: Email::parse(form.email)?,
            name: Name::parse(form.name)?,
            password: Password::parse_new(form.password, &form.password_check)?,
        })
    }
}
