//! src/routes/signup/mod.rs
mod get;
pub use get::signup_form;

mod post;
pub use post::signup;
