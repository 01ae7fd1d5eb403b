//! src/identity/mod.rs
//!
//! Client for the external identity provider that owns user accounts.
mod client;
pub use client::{IdentityClient, IdentityError};
