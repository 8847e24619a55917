//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod scheduled_workouts;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod workout_plans;

pub use error::ApiResult;
