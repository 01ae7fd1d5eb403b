//! src/routes/signup/post.rs
use crate::configuration::HmacSecret;
use crate::domain::{DomainPolicy, NewAccount, SignupForm};
use crate::identity::{IdentityClient, IdentityError};
use crate::routes::error_query::redirect_with_error;
use crate::utils::{e500, see_other};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[tracing::instrument(
    name = "Signing up a new account",
    skip(form, policy, identity, hmac_secret),
    fields(
        request_id = %Uuid::new_v4(),
        email = %form.email,
    )
)]
pub async fn signup(
    form: web::Form<SignupForm>,
    policy: web::Data<DomainPolicy>,
    identity: web::Data<IdentityClient>,
    hmac_secret: web::Data<HmacSecret>,
) -> Result<HttpResponse, actix_web::Error> {
    let account = match NewAccount::parse(form.into_inner(), &policy) {
        Ok(account) => account,
        Err(e) => {
            tracing::info!(error = %e, "Rejected signup form");
            return redirect_with_error("/signup", &e.to_string(), &hmac_secret);
        }
    };

    match identity.sign_up(&account).await {
        Ok(()) => Ok(see_other("/login")),
        Err(IdentityError::Rejected(message)) => {
            redirect_with_error("/signup", &message, &hmac_secret)
        }
        Err(e @ IdentityError::Unexpected(_)) => Err(e500(e)),
    }
}
