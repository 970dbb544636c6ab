//! Report classification.
//!
//! The gateway asks the remote model for a category, severity, summary and
//! entities, and answers with the deterministic offline classifier whenever
//! the model is not configured, slow or returns something unusable.
//!
//! Used by report submission and by the admin reclassify action; it exposes
//! no routes of its own.

pub mod models;
pub mod services;
