//! Test utilities for the backend crate.
//!
//! Shared helpers for both unit tests (in `src/`) and integration tests (in
//! `tests/`).

pub mod clock;

pub mod openapi {
    //! OpenAPI schema traversal helpers.
    //!
    //! Resolves utoipa `RefOr<Schema>` wrappers to concrete `Object` schemas
    //! with diagnostic panics on type mismatches.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::{Object, Schema};

    /// Extract an `Object` schema, panicking with a diagnostic if not an Object.
    pub fn unwrap_object_schema<'a>(schema: &'a RefOr<Schema>, name: &str) -> &'a Object {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj,
            RefOr::Ref(reference) => {
                panic!(
                    "schema '{name}' is a $ref to '{}'; resolve the reference first",
                    reference.ref_location
                );
            }
            RefOr::T(Schema::Array(_)) => {
                panic!("schema '{name}' is an Array, not an Object");
            }
            _ => panic!("schema '{name}' has unexpected type"),
        }
    }

    /// Names of the properties an Object schema declares.
    pub fn property_names(obj: &Object) -> Vec<&str> {
        obj.properties.keys().map(String::as_str).collect()
    }
}
