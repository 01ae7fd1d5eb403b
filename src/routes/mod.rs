//! src/routes/mod.rs
mod health_check;
pub use health_check::*;

mod home;
pub use home::*;

mod email_check;
pub use email_check::*;

mod error_query;
pub use error_query::ErrorQuery;

mod signup;
pub use signup::*;

mod login;
pub use login::*;

mod board;
pub use board::*;

mod logout;
pub use logout::*;
