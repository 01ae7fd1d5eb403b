//! src/domain/mod.rs
pub mod email;
pub use email::Email;

pub mod name;
pub use name::Name;

pub mod password;
pub use password::Password;

mod new_account;
pub use new_account::{NewAccount, NewAccountError, SignupForm};

pub mod policy;
pub use policy::{
    email_domain_error, is_valid_company_email, AccessError, DomainPolicy, PolicyError,
    ALLOWED_EMAIL_DOMAIN, ORGANIZATION,
};
