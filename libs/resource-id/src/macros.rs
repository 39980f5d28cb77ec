//! Macros for defining typed resource ID types.

/// Macro to define a typed resource ID over a segment schema.
///
/// This generates a struct with one `String` field per value slot of the
/// schema, in slot order, with:
/// - `ID_TYPE` and `SEGMENTS` constants
/// - `new()` and one accessor per field
/// - `id()` to render the canonical path
/// - `parse()` (exact literal casing) and `parse_insensitively()`
/// - `validate()`, `template()` and `description()`
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (as the canonical path)
///
/// The number of fields is checked against the schema at compile time.
///
/// # Example
///
/// ```ignore
/// define_resource_id!(
///     /// A shelf in a warehouse.
///     ShelfId, "Shelf", SHELF_SEGMENTS, { warehouse_name, name }
/// );
///
/// let id = ShelfId::parse("/warehouses/north/shelves/top")?;
/// assert_eq!(id.name(), "top");
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident, $display:literal, $segments:expr, { $($field:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $($field: String,)+
        }

        const _: () = assert!(
            $crate::schema::value_count($segments) == [$(stringify!($field)),+].len(),
            concat!("fields of ", stringify!($name), " do not match its value segments"),
        );

        impl $name {
            /// The name this ID type is reported under in errors.
            pub const ID_TYPE: &'static str = stringify!($name);

            /// The segment schema for this ID type.
            pub const SEGMENTS: &'static [$crate::Segment] = $segments;

            /// Creates an ID from its segment values.
            ///
            /// Values are not validated; they must be non-empty and must not
            /// contain `/` for the ID to format into a parseable path.
            #[must_use]
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }

            $(
                #[doc = concat!("Returns the `", stringify!($field), "` segment.")]
                #[must_use]
                pub fn $field(&self) -> &str {
                    &self.$field
                }
            )+

            /// Formats the ID as its canonical path.
            #[must_use]
            pub fn id(&self) -> String {
                $crate::schema::format(Self::SEGMENTS, [$(self.$field.as_str()),+])
            }

            /// Parses an ID, requiring every fixed segment in its canonical casing.
            pub fn parse(input: &str) -> Result<Self, $crate::IdError> {
                Self::parse_with(input, $crate::Casing::Exact)
            }

            /// Parses an ID, accepting fixed segments in any casing.
            ///
            /// Value segments keep the casing of the input.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::IdError> {
                Self::parse_with(input, $crate::Casing::Insensitive)
            }

            /// Parses an ID with the given literal casing rule.
            pub fn parse_with(input: &str, casing: $crate::Casing) -> Result<Self, $crate::IdError> {
                let [$($field),+] = $crate::schema::parse::<{ [$(stringify!($field)),+].len() }>(
                    Self::ID_TYPE,
                    Self::SEGMENTS,
                    input,
                    casing,
                )?;
                Ok(Self {
                    $($field: $field.to_string(),)+
                })
            }

            /// Checks that `input` is a valid ID of this type.
            pub fn validate(input: &str) -> Result<(), $crate::IdError> {
                Self::parse(input).map(|_| ())
            }

            /// Returns the path with every value shown as `{placeholder}`.
            #[must_use]
            pub fn template() -> String {
                $crate::schema::template(Self::SEGMENTS)
            }

            /// Returns a human-readable description of this ID.
            #[must_use]
            pub fn description(&self) -> String {
                $crate::schema::describe($display, Self::SEGMENTS, [$(self.$field.as_str()),+])
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
