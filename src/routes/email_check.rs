//! src/routes/email_check.rs
use crate::domain::DomainPolicy;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct EmailCheckParams {
    email: Option<String>,
}

#[derive(Serialize)]
struct EmailCheck {
    valid: bool,
    error: Option<String>,
}

/// Live feedback for the email field while the user types.
#[tracing::instrument(name = "Check email domain", skip(policy))]
pub async fn email_check(
    params: web::Query<EmailCheckParams>,
    policy: web::Data<DomainPolicy>,
) -> HttpResponse {
    let email = params.email.as_deref();

    HttpResponse::Ok().json(EmailCheck {
        valid: policy.is_valid_company_email(email),
        error: policy.email_domain_error(email),
    })
}
