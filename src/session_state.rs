//! src/session_state.rs
use crate::domain::Email;
use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Session with typed accessors for the signed-in user.
pub struct TypedSession(Session);

impl TypedSession {
    const USER_ID_KEY: &'static str = "user_id";
    const EMAIL_KEY: &'static str = "email";

    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_user(&self, user_id: Uuid, email: &Email) -> Result<(), SessionInsertError> {
        self.0.insert(Self::USER_ID_KEY, user_id)?;
        self.0.insert(Self::EMAIL_KEY, email)
    }

    pub fn get_user_id(&self) -> Result<Option<Uuid>, SessionGetError> {
        self.0.get(Self::USER_ID_KEY)
    }

    pub fn get_email(&self) -> Result<Option<Email>, SessionGetError> {
        self.0.get(Self::EMAIL_KEY)
    }

    pub fn log_out(self) {
        self.0.purge()
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
