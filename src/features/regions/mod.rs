//! Catalog of Mexican states used to locate reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions` | List all states |
//! | GET | `/api/regions/{code}` | Get state by code or name |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
