//! src/routes/board.rs
use crate::session_state::TypedSession;
use crate::ui;
use crate::utils::{e500, see_other};
use actix_web::{http::header::ContentType, HttpResponse};

/// The project board shell. Issues are fetched and placed into the columns
/// client-side.
pub async fn project_board(session: TypedSession) -> Result<HttpResponse, actix_web::Error> {
    let email = match session.get_email().map_err(e500)? {
        Some(email) => email,
        None => return Ok(see_other("/login")),
    };

    let columns: String = ui::BOARD_COLUMNS
        .iter()
        .map(|column| {
            format!(
                r#"    <section class="column" data-column="{}">
        <h2>{}</h2>
        <p class="empty">No issues</p>
    </section>
"#,
                htmlescape::encode_attribute(column),
                htmlescape::encode_minimal(column),
            )
        })
        .collect();

    let body = format!(
        r#"{header}
{controls}
{location}
<main class="board">
{columns}</main>"#,
        header = ui::mobile_header("Project board", email.as_ref()),
        controls = ui::controls_section(),
        location = ui::test_location_button(),
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(ui::page("Project board", &body)))
}
