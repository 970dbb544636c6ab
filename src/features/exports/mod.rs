//! CSV downloads of filtered and per-state report sets.

pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
