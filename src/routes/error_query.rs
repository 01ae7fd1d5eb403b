//! src/routes/error_query.rs
//!
//! Error messages travel to the auth pages as `?error=..&tag=..`, where `tag`
//! is an HMAC of the query so pages never render text from a forged link.
use crate::configuration::HmacSecret;
use crate::utils::{e500, see_other};
use actix_web::HttpResponse;
use hmac::{Hmac, Mac};

#[derive(serde::Deserialize, Debug)]
pub struct ErrorQuery {
    error: String,
    tag: Option<String>,
}

impl ErrorQuery {
    /// The error message, if its tag verifies.
    pub fn verified(&self, secret: &HmacSecret) -> Option<&str> {
        self.is_valid(secret).then_some(self.error.as_str())
    }

    fn is_valid(&self, secret: &HmacSecret) -> bool {
        let tag = match &self.tag {
            Some(tag) => tag,
            None => {
                tracing::error!("Missing hmac tag in query params");
                return false;
            }
        };

        let tag = match hex::decode(tag) {
            Ok(tag) => tag,
            Err(_) => {
                tracing::error!("Invalid hex in hmac tag");
                return false;
            }
        };

        let mut mac = match Hmac::<sha2::Sha256>::new_from_slice(secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => {
                tracing::error!("Invalid hmac secret");
                return false;
            }
        };

        mac.update(query_string(&self.error).as_bytes());

        match mac.verify_slice(&tag) {
            Ok(_) => true,
            Err(_) => {
                tracing::error!("Invalid hmac tag");
                false
            }
        }
    }
}

fn query_string(error: &str) -> String {
    format!("error={}", urlencoding::Encoded::new(error))
}

/// 303 back to `location` carrying a signed error message.
pub fn redirect_with_error(
    location: &str,
    error: &str,
    secret: &HmacSecret,
) -> Result<HttpResponse, actix_web::Error> {
    let query_string = query_string(error);

    let mut mac = Hmac::<sha2::Sha256>::new_from_slice(secret.as_bytes()).map_err(e500)?;
    mac.update(query_string.as_bytes());
    let tag = hex::encode(mac.finalize().into_bytes());

    Ok(see_other(&format!("{}?{}&tag={}", location, query_string, tag)))
}
