//! src/domain/policy.rs
//!
//! Company-only access: accounts may only be created (and used) with an
//! address under the organization's email suffix.

/// Suffix every accepted address must end with, leading `@` included.
pub const ALLOWED_EMAIL_DOMAIN: &str = "@bumex.mr";

/// Organization named in the rejection message.
pub const ORGANIZATION: &str = "BUMEX";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Access restricted to {organization} employees only. Please use your {suffix} email.")]
    OutsideDomain {
        organization: String,
        suffix: String,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("The allowed email domain must not be empty")]
    EmptySuffix,
    #[error("The allowed email domain must start with '@', got {0:?}")]
    MissingAt(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPolicy {
    suffix: String,
    organization: String,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self {
            suffix: ALLOWED_EMAIL_DOMAIN.to_string(),
            organization: ORGANIZATION.to_string(),
        }
    }
}

impl DomainPolicy {
    /// The suffix is stored normalized so that comparisons against a
    /// normalized address are a plain `ends_with`. A blank suffix would match
    /// every address, so it is refused along with one lacking the `@`.
    pub fn new(
        suffix: impl Into<String>,
        organization: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        let suffix = suffix.into().trim().to_lowercase();
        if suffix.is_empty() {
            return Err(PolicyError::EmptySuffix);
        }
        if !suffix.starts_with('@') || suffix.len() == 1 {
            return Err(PolicyError::MissingAt(suffix));
        }

        Ok(Self {
            suffix,
            organization: organization.into(),
        })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// `true` iff the trimmed, lower-cased address ends with the suffix.
    ///
    /// This is a textual suffix match, not an address parse: a bare
    /// `"@bumex.mr"` is accepted.
    pub fn is_valid_company_email(&self, email: Option<&str>) -> bool {
        match email {
            None | Some("") => false,
            Some(email) => email.trim().to_lowercase().ends_with(&self.suffix),
        }
    }

    /// Rejection message for display next to an email field.
    ///
    /// Returns `None` while the address cannot be judged yet (empty, or no
    /// `@` typed so far), even though such input is not a valid company
    /// address either.
    pub fn email_domain_error(&self, email: Option<&str>) -> Option<String> {
        let email = email.filter(|e| !e.is_empty() && e.contains('@'))?;

        self.check(email).err().map(|e| e.to_string())
    }

    pub fn check(&self, email: &str) -> Result<(), AccessError> {
        if self.is_valid_company_email(Some(email)) {
            Ok(())
        } else {
            Err(self.rejection())
        }
    }

    pub fn rejection(&self) -> AccessError {
        AccessError::OutsideDomain {
            organization: self.organization.clone(),
            suffix: self.suffix.clone(),
        }
    }
}

/// [`DomainPolicy::is_valid_company_email`] against the compiled-in suffix.
pub fn is_valid_company_email(email: Option<&str>) -> bool {
    DomainPolicy::default().is_valid_company_email(email)
}

/// [`DomainPolicy::email_domain_error`] against the compiled-in suffix.
pub fn email_domain_error(email: Option<&str>) -> Option<String> {
    DomainPolicy::default().email_domain_error(email)
}
