//! `define_port_error!` declares the error enum of a workout or plan store
//! port.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor
//! whose arguments take `impl Into<FieldType>`, so adapters can write
//! `ScheduledWorkoutRepositoryError::query("...")` without building a
//! `String` first.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation for store error enums.
    use uuid::Uuid;

    define_port_error! {
        pub enum CalendarStoreError {
            Unavailable { message: String } => "calendar store unavailable: {message}",
            StaleWorkout { workout_id: Uuid, expected: u64 } =>
                "workout {workout_id} moved past version {expected}",
            ReadOnly => "calendar store is read-only",
        }
    }

    #[test]
    fn string_fields_accept_borrowed_text() {
        let err = CalendarStoreError::unavailable("connection refused");
        assert_eq!(
            err.to_string(),
            "calendar store unavailable: connection refused"
        );
    }

    #[test]
    fn typed_fields_keep_their_types() {
        let workout_id = Uuid::nil();
        let err = CalendarStoreError::stale_workout(workout_id, 4_u64);
        assert_eq!(
            err,
            CalendarStoreError::StaleWorkout {
                workout_id,
                expected: 4
            }
        );
        assert_eq!(
            err.to_string(),
            format!("workout {workout_id} moved past version 4")
        );
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(CalendarStoreError::read_only(), CalendarStoreError::ReadOnly);
    }
}
