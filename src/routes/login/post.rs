//! src/routes/login/post.rs
use crate::configuration::HmacSecret;
use crate::domain::{DomainPolicy, Email, Password};
use crate::identity::{IdentityClient, IdentityError};
use crate::routes::error_query::redirect_with_error;
use crate::session_state::TypedSession;
use crate::utils::{e500, see_other};
use actix_web::{web, HttpResponse};
use secrecy::Secret;

#[derive(serde::Deserialize)]
pub struct LoginForm {
    email: String,
    password: Secret<String>,
}

#[tracing::instrument(
    name = "Logging in",
    skip(form, policy, identity, hmac_secret, session),
    fields(email = %form.email, user_id = tracing::field::Empty)
)]
pub async fn login(
    form: web::Form<LoginForm>,
    policy: web::Data<DomainPolicy>,
    identity: web::Data<IdentityClient>,
    hmac_secret: web::Data<HmacSecret>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let LoginForm { email, password } = form.into_inner();

    if let Err(e) = policy.check(&email) {
        return redirect_with_error("/login", &e.to_string(), &hmac_secret);
    }

    let credentials = Email::parse(email)
        .map_err(|e| e.to_string())
        .and_then(|email| {
            Password::parse(password)
                .map(|password| (email, password))
                .map_err(|e| e.to_string())
        });
    let (email, password) = match credentials {
        Ok(credentials) => credentials,
        Err(message) => return redirect_with_error("/login", &message, &hmac_secret),
    };

    let user_id = match identity.sign_in(&email, &password).await {
        Ok(user_id) => user_id,
        Err(IdentityError::Rejected(message)) => {
            return redirect_with_error("/login", &message, &hmac_secret)
        }
        Err(e @ IdentityError::Unexpected(_)) => return Err(e500(e)),
    };
    tracing::Span::current().record("user_id", &tracing::field::display(&user_id));

    session.renew();
    session.insert_user(user_id, &email).map_err(e500)?;

    Ok(see_other("/board"))
}
