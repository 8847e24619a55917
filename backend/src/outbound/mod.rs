//! Outbound adapters implementing domain ports for storage.
//!
//! - **memory**: process-local repositories backed by locked hash maps.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic beyond the version guard
//! the scheduled workout port requires.

pub mod memory;
