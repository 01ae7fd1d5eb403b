//! src/routes/signup/get.rs
use crate::configuration::HmacSecret;
use crate::domain::DomainPolicy;
use crate::routes::ErrorQuery;
use crate::ui;
use actix_web::{http::header::ContentType, web, HttpResponse};

#[tracing::instrument(name = "GET /signup", skip(hmac_secret, policy))]
pub async fn signup_form(
    query: Option<web::Query<ErrorQuery>>,
    hmac_secret: web::Data<HmacSecret>,
    policy: web::Data<DomainPolicy>,
) -> HttpResponse {
    let error = query
        .as_ref()
        .and_then(|q| q.verified(hmac_secret.get_ref()));

    let notice = format!(
        "Only {} email addresses can create an account.",
        policy.suffix()
    );

    let form = format!(
        r#"{header}
{notice}
{error}
    <form action="/signup" method="post">
        <label>Full name
            <input type="text" placeholder="Enter your name" name="name">
        </label>
        <label>Work email
            <input type="email" placeholder="name{suffix}" name="email">
        </label>
        <label>Password
            <input type="password" placeholder="Choose a password" name="password">
        </label>
        <label>Confirm password
            <input type="password" placeholder="Type the password again" name="password_check">
        </label>
        <button type="submit">Create account</button>
    </form>
    <p>Already have an account? <a href="/login">Log in</a></p>"#,
        header = ui::form_header(
            "Create your account",
            &format!("{} project board", policy.organization())
        ),
        notice = ui::security_warning(Some(notice.as_str())),
        error = ui::security_warning(error),
        suffix = htmlescape::encode_attribute(policy.suffix()),
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(ui::page("Sign up", &ui::auth_card("Sign up", &form)))
}
