//! # arm-resourceids
//!
//! Typed resource IDs for the Azure Resource Manager API surface.
//!
//! ## Design Principles
//!
//! - Every resource kind is described by a template: an ordered list of
//!   [`Segment`]s fixed at compile time
//! - One parser and one formatter serve every template; a resource kind is
//!   only a declaration (see [`define_resource_id!`])
//! - IDs support roundtrip serialization (parse → format → parse)
//! - Case sensitivity is chosen by the caller, not by the type
//!
//! ## ID Format
//!
//! Resource IDs are slash-delimited paths that alternate fixed literals and
//! user-supplied values:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.ElasticSan/elasticSans/{elasticSanName}
//! ```
//!
//! Literals (`subscriptions`, `resourceGroups`, `Microsoft.ElasticSan`, ...)
//! are always emitted in their canonical casing. Values are kept verbatim.
//!
//! ## Parsing Modes
//!
//! - `parse` matches literals exactly; use it for user input so typos surface
//! - `parse_insensitively` matches literals ignoring ASCII case; use it for
//!   IDs returned by the API, which may not echo the requested casing

pub mod commonids;
mod error;
mod macros;
mod parser;
mod segment;
mod template;
mod validation;

pub use error::{ResourceIdError, TemplateError};
#[doc(hidden)]
pub use macros::__private;
pub use parser::{ParseResult, Parser};
pub use segment::{example_id, format_segments, Segment, SegmentType};
pub use template::check_template;
pub use validation::{validate, Validation};

/// A typed resource ID backed by a segment template.
///
/// Implemented by every type declared through [`define_resource_id!`]. The
/// provided methods are the generic codec; implementors only describe their
/// template and how to move values in and out of their fields.
pub trait ResourceId: Sized {
    /// Human-readable resource name, e.g. `"Snapshot"`.
    const RESOURCE_NAME: &'static str;

    /// The template this ID is parsed from and formatted with.
    const SEGMENTS: &'static [Segment];

    /// Parse-result keys of the struct fields, in template order.
    const FIELD_NAMES: &'static [&'static str];

    /// Builds the ID from a successful parse.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError>;

    /// Field values in template order.
    fn field_values(&self) -> Vec<&str>;

    /// Formats the canonical resource ID.
    fn id(&self) -> String {
        format_segments(Self::SEGMENTS, &self.field_values())
    }

    /// Returns the segments which comprise this ID.
    fn segments(&self) -> &'static [Segment] {
        Self::SEGMENTS
    }

    /// Parses `input`, matching literal segments exactly.
    fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let parsed = Parser::for_type::<Self>().parse(input, false)?;
        Self::from_parse_result(&parsed)
    }

    /// Parses `input`, matching literal segments case-insensitively.
    ///
    /// Only use this for data returned by the API, never for user input.
    fn parse_insensitively(input: &str) -> Result<Self, ResourceIdError> {
        let parsed = Parser::for_type::<Self>().parse(input, true)?;
        Self::from_parse_result(&parsed)
    }
}
