//! Segment descriptors and the canonical formatter.

use std::fmt;

/// What a template segment matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// A fixed literal such as `resourceGroups`.
    Static,
    /// A fixed provider namespace such as `Microsoft.Web`.
    ResourceProvider,
    /// The subscription the resource lives in.
    SubscriptionId,
    /// The resource group the resource lives in.
    ResourceGroup,
    /// Any other user-supplied value (resource names, IDs).
    UserSpecified,
}

impl SegmentType {
    /// Returns true for segments that match a fixed literal.
    pub const fn is_static(&self) -> bool {
        matches!(self, SegmentType::Static | SegmentType::ResourceProvider)
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegmentType::Static => "static",
            SegmentType::ResourceProvider => "resource_provider",
            SegmentType::SubscriptionId => "subscription_id",
            SegmentType::ResourceGroup => "resource_group",
            SegmentType::UserSpecified => "user_specified",
        };
        write!(f, "{}", s)
    }
}

/// One element of a resource ID template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    name: &'static str,
    segment_type: SegmentType,
    fixed_value: Option<&'static str>,
    example_value: &'static str,
}

impl Segment {
    /// A fixed literal, matched exactly or case-insensitively.
    pub const fn static_segment(
        name: &'static str,
        fixed_value: &'static str,
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            segment_type: SegmentType::Static,
            fixed_value: Some(fixed_value),
            example_value,
        }
    }

    /// A resource provider namespace, e.g. `Microsoft.ApiManagement`.
    pub const fn resource_provider(
        name: &'static str,
        fixed_value: &'static str,
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            segment_type: SegmentType::ResourceProvider,
            fixed_value: Some(fixed_value),
            example_value,
        }
    }

    /// A subscription ID. The value is not checked for UUID format.
    pub const fn subscription_id(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::SubscriptionId,
            fixed_value: None,
            example_value,
        }
    }

    /// A resource group name.
    pub const fn resource_group(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::ResourceGroup,
            fixed_value: None,
            example_value,
        }
    }

    /// An opaque user-supplied value.
    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::UserSpecified,
            fixed_value: None,
            example_value,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    /// The canonical literal for static segments, `None` for data segments.
    #[must_use]
    pub const fn fixed_value(&self) -> Option<&'static str> {
        self.fixed_value
    }

    #[must_use]
    pub const fn example_value(&self) -> &'static str {
        self.example_value
    }

    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.segment_type.is_static()
    }

    /// Describes what this segment expects, for error messages.
    pub(crate) fn expectation(&self) -> String {
        match self.fixed_value {
            Some(fixed) => format!("{:?}", fixed),
            None => format!("a value such as {:?}", self.example_value),
        }
    }
}

/// Formats a resource ID from a template and the data values in order.
///
/// Static segments emit their canonical literal; every other segment takes
/// the next value. The result always starts with `/`.
pub fn format_segments(segments: &[Segment], values: &[&str]) -> String {
    debug_assert_eq!(
        segments.iter().filter(|s| !s.is_static()).count(),
        values.len(),
        "value count does not match the template"
    );

    let mut values = values.iter();
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        match segment.fixed_value {
            Some(fixed) => out.push_str(fixed),
            None => out.push_str(values.next().copied().unwrap_or_default()),
        }
    }
    out
}

/// Builds the ID made of every segment's example value.
pub fn example_id(segments: &[Segment]) -> String {
    let values: Vec<&str> = segments
        .iter()
        .filter(|s| !s.is_static())
        .map(|s| s.example_value)
        .collect();
    format_segments(segments, &values)
}
