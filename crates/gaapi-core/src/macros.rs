//! Record definition macro.
//!
//! The `record!` macro expands a declarative field list into a record struct,
//! its accessors, its [`Record`](crate::record::Record) implementation, the
//! wire encoding and the `describe` rendering. Every record in the crate goes
//! through it, so all shapes share one template.
//!
//! Each field is written as `name @ "wire_key": Type => FieldKind`. The stored
//! type is always `Option<Type>`.

macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident @ $wire:literal : $ty:ty => $kind:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire, default)]
                $field: Option<$ty>,
            )*
            /// Keys not declared above.
            #[serde(flatten)]
            extension: $crate::record::Extension,
        }

        impl $name {
            /// Create an empty record: every field unset, no extension entries.
            pub fn new() -> Self {
                Self::default()
            }

            ::paste::paste! {
                $(
                    $(#[doc = $doc])*
                    pub fn $field(&self) -> Option<&$ty> {
                        self.$field.as_ref()
                    }

                    /// Replace the stored value.
                    pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                        self.$field = value;
                    }

                    /// Replace the stored value and hand the record back for chaining.
                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: Option<$ty>) -> Self {
                        self.[<set_ $field>](value);
                        self
                    }

                    /// Remove and return the stored value.
                    pub fn [<take_ $field>](&mut self) -> Option<$ty> {
                        self.$field.take()
                    }
                )*
            }
        }

        impl $crate::record::Record for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const FIELDS: &'static [$crate::record::FieldDescriptor] = &[
                $(
                    $crate::record::FieldDescriptor {
                        name: stringify!($field),
                        wire_key: $wire,
                        kind: $kind,
                    },
                )*
            ];

            fn extension(&self) -> &$crate::record::Extension {
                &self.extension
            }

            fn extension_mut(&mut self) -> &mut $crate::record::Extension {
                &mut self.extension
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(None)?;
                $(
                    if let Some(value) = &self.$field {
                        map.serialize_entry($wire, value)?;
                    }
                )*
                for (key, value) in &self.extension {
                    if <Self as $crate::record::Record>::is_fixed_key(key) {
                        ::tracing::warn!(
                            record = stringify!($name),
                            key = %key,
                            "Dropping extension entry that shadows a fixed field"
                        );
                        continue;
                    }
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(concat!(stringify!($name), " ["))?;
                $(
                    f.write_str(concat!(stringify!($field), "="))?;
                    $crate::record::write_value(f, self.$field.as_ref())?;
                    f.write_str(", ")?;
                )*
                f.write_str("extension=")?;
                $crate::record::write_value(f, Some(&self.extension))?;
                f.write_str("]")
            }
        }
    };
}
