//! Macros for defining typed resource IDs.

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}

/// Macro to define a typed resource ID from a segment template.
///
/// This generates a struct with one `String` field per data segment and:
/// - `new()` to build the ID from known components (no validation)
/// - `parse()` and `parse_insensitively()`
/// - `validate()` for front-end input checks
/// - `id()` and `segments()`
/// - an implementation of [`ResourceId`](crate::ResourceId)
/// - `Display` (human-readable), `FromStr` (strict parse)
/// - `Serialize` (canonical ID) and `Deserialize` (case-insensitive parse)
///
/// Fields are listed as `field: "segmentName" => "Display Label"` and must
/// appear in the same order as the data segments of the template.
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// A Host in Connected VMware vSphere.
///     HostId("Host") {
///         subscription_id: "subscriptionId" => "Subscription",
///         resource_group_name: "resourceGroupName" => "Resource Group Name",
///         host_name: "hostName" => "Host Name",
///     }
///     segments: [
///         Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
///         Segment::static_segment("staticResourceGroups", "resourceGroups", "resourceGroups"),
///         Segment::resource_group("resourceGroupName", "example-resource-group"),
///         Segment::static_segment("staticProviders", "providers", "providers"),
///         Segment::resource_provider("staticMicrosoftConnectedVMwarevSphere", "Microsoft.ConnectedVMwarevSphere", "Microsoft.ConnectedVMwarevSphere"),
///         Segment::static_segment("staticHosts", "hosts", "hosts"),
///         Segment::user_specified("hostName", "hostValue"),
///     ]
/// }
///
/// let id = HostId::parse("/subscriptions/.../hosts/esx01")?;
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident($resource:literal) {
            $( $field:ident: $key:literal => $label:literal ),+ $(,)?
        }
        segments: [ $( $segment:expr ),+ $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $( pub $field: String, )+
        }

        impl $name {
            /// Creates the ID from its components. No validation is performed.
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $field: impl Into<String> ),+) -> Self {
                Self {
                    $( $field: $field.into(), )+
                }
            }

            /// Parses an ID, matching literal segments exactly.
            pub fn parse(input: &str) -> Result<Self, $crate::ResourceIdError> {
                <Self as $crate::ResourceId>::parse(input)
            }

            /// Parses an ID, matching literal segments case-insensitively.
            ///
            /// Only use this for API response data, not user input.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::ResourceIdError> {
                <Self as $crate::ResourceId>::parse_insensitively(input)
            }

            /// Checks that `input` can be parsed as this ID.
            pub fn validate(
                input: &$crate::__private::serde_json::Value,
                key: &str,
            ) -> $crate::Validation {
                $crate::validate::<Self>(input, key)
            }

            /// Formats the canonical resource ID.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }

            /// Returns the segments which comprise this ID.
            #[must_use]
            pub fn segments(&self) -> &'static [$crate::Segment] {
                <Self as $crate::ResourceId>::SEGMENTS
            }
        }

        impl $crate::ResourceId for $name {
            const RESOURCE_NAME: &'static str = $resource;
            const SEGMENTS: &'static [$crate::Segment] = &[ $( $segment ),+ ];
            const FIELD_NAMES: &'static [&'static str] = &[ $( $key ),+ ];

            fn from_parse_result(
                result: &$crate::ParseResult,
            ) -> Result<Self, $crate::ResourceIdError> {
                Ok(Self {
                    $( $field: result.require($resource, $key)?.to_string(), )+
                })
            }

            fn field_values(&self) -> Vec<&str> {
                vec![ $( self.$field.as_str() ),+ ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components = [ $( format!("{}: {:?}", $label, self.$field) ),+ ];
                write!(f, "{} ({})", $resource, components.join("\n"))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ResourceIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse_insensitively(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
