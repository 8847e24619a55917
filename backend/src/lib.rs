//! Workout plan and scheduled workout lifecycle backend.
//!
//! The crate follows a hexagonal layout: [`domain`] owns entities, rules and
//! services behind port traits; [`outbound`] adapts those ports to storage;
//! [`inbound`] exposes them over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
