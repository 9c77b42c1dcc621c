//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and gets a documented snake_case
//! constructor whose parameters accept anything convertible into the field
//! type, so adapters can write `MoodStoreError::query(err.to_string())` or
//! pass a `&str`. Fields may carry their own doc comments.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($field:ident : $ty:ty),*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident {
                    $($(#[$field_meta:meta])* $field:ident : $ty:ty),* $(,)?
                } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($(#[$field_meta])* $field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant ($($field : $ty),*));
            )*
        }
    };
}

pub(crate) use define_port_error;
