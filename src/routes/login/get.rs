//! src/routes/login/get.rs
use crate::configuration::HmacSecret;
use crate::routes::ErrorQuery;
use crate::ui;
use actix_web::{http::header::ContentType, web, HttpResponse};

#[tracing::instrument(name = "GET /login", skip(hmac_secret))]
pub async fn login_form(
    query: Option<web::Query<ErrorQuery>>,
    hmac_secret: web::Data<HmacSecret>,
) -> HttpResponse {
    let error = query
        .as_ref()
        .and_then(|q| q.verified(hmac_secret.get_ref()));

    let form = format!(
        r#"{header}
{error}
    <form action="/login" method="post">
        <label>Email
            <input
                type="email"
                placeholder="Enter your work email"
                name="email"
            >
        </label>
        <label>Password
            <input
                type="password"
                placeholder="Enter Password"
                name="password"
            >
        </label>
        <button type="submit">Login</button>
    </form>
    <p>No account yet? <a href="/signup">Sign up</a></p>"#,
        header = ui::form_header("Welcome back", "Log in to the project board"),
        error = ui::security_warning(error),
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(ui::page("Login", &ui::auth_card("Login", &form)))
}
