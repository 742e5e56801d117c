//! Shared plumbing for EERS services: health endpoints, request-id middleware,
//! tracing setup, and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
