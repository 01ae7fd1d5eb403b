//! src/routes/home.rs
use crate::session_state::TypedSession;
use crate::utils::{e500, see_other};
use actix_web::HttpResponse;

pub async fn home(session: TypedSession) -> Result<HttpResponse, actix_web::Error> {
    if session.get_user_id().map_err(e500)?.is_some() {
        Ok(see_other("/board"))
    } else {
        Ok(see_other("/login"))
    }
}
