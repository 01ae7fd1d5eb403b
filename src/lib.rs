pub mod configuration;
pub mod domain;
pub mod identity;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod ui;
pub mod utils;
