//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The current status of the resource does not allow the operation.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing store is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "cannot start a workout that is COMPLETED")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::WorkoutStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::WorkoutStatus)]
pub enum WorkoutStatusSchema {
    /// Initial state after scheduling.
    #[schema(rename = "SCHEDULED")]
    Scheduled,
    /// Started and not yet finished.
    #[schema(rename = "IN_PROGRESS")]
    InProgress,
    /// Finished; terminal.
    #[schema(rename = "COMPLETED")]
    Completed,
    /// Abandoned; terminal.
    #[schema(rename = "CANCELLED")]
    Cancelled,
}

/// OpenAPI schema for [`crate::domain::EligibleAction`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EligibleAction)]
pub enum EligibleActionSchema {
    #[schema(rename = "START")]
    Start,
    #[schema(rename = "COMPLETE")]
    Complete,
    #[schema(rename = "NONE")]
    None,
}
