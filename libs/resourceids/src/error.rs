//! Error types for resource ID parsing and template checks.

use thiserror::Error;

/// Errors that can occur when parsing or validating resource IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The input ran out before the template did.
    #[error(
        "parsing {input:?} for {resource} ID: the ID ended before segment '{segment}' (expected {expected})"
    )]
    Incomplete {
        resource: &'static str,
        input: String,
        segment: &'static str,
        expected: String,
    },

    /// A static or resource provider segment did not match its literal.
    #[error(
        "parsing {input:?} for {resource} ID: expected segment '{segment}' to be {expected:?} but got {actual:?}"
    )]
    ValueMismatch {
        resource: &'static str,
        input: String,
        segment: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// The input has tokens left over after the template fully matched.
    #[error("parsing {input:?} for {resource} ID: unexpected extra segment {extra:?}")]
    ExtraSegment {
        resource: &'static str,
        input: String,
        extra: String,
    },

    /// A data segment was present but empty.
    #[error("parsing {input:?} for {resource} ID: segment '{segment}' cannot be empty")]
    EmptySegment {
        resource: &'static str,
        input: String,
        segment: &'static str,
    },

    /// A template field was missing from an otherwise successful parse.
    #[error("{resource} ID: segment '{segment}' was not specified in the parse result for {input:?}")]
    SegmentNotSpecified {
        resource: &'static str,
        input: String,
        segment: &'static str,
    },

    /// The value handed to a validator was not a string.
    #[error("expected {key:?} to be a string")]
    NotAString { key: String },
}

impl ResourceIdError {
    /// Returns true if the input was a strict prefix of the template.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ResourceIdError::Incomplete { .. })
    }

    /// Returns true if a literal segment did not match.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ResourceIdError::ValueMismatch { .. })
    }

    /// Returns true if the input continued past the template.
    pub fn is_extra_segment(&self) -> bool {
        matches!(self, ResourceIdError::ExtraSegment { .. })
    }

    /// Returns true if this error indicates a template bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ResourceIdError::SegmentNotSpecified { .. })
    }
}

/// Problems found when checking a template against its struct fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("{resource} ID has no segments")]
    Empty { resource: &'static str },

    #[error("{resource} ID has more than one segment named '{name}'")]
    DuplicateName {
        resource: &'static str,
        name: &'static str,
    },

    #[error("{resource} ID: static segment '{name}' has no fixed value")]
    MissingFixedValue {
        resource: &'static str,
        name: &'static str,
    },

    #[error("{resource} ID: data segments {segments:?} do not match fields {fields:?}")]
    FieldMismatch {
        resource: &'static str,
        segments: Vec<&'static str>,
        fields: Vec<&'static str>,
    },
}
