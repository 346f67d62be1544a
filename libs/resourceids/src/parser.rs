//! The template-driven resource ID parser.

use std::collections::BTreeMap;

use crate::{ResourceId, ResourceIdError, Segment};

/// Values captured by a successful parse, keyed by segment name.
///
/// Static segments are recorded with their canonical literal, data segments
/// with the input token verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub parsed: BTreeMap<&'static str, String>,
    pub raw_input: String,
}

impl ParseResult {
    /// Returns the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parsed.get(name).map(String::as_str)
    }

    /// Returns the value captured for `name`, or a consistency error.
    pub fn require(&self, resource: &'static str, name: &'static str) -> Result<&str, ResourceIdError> {
        self.get(name).ok_or_else(|| ResourceIdError::SegmentNotSpecified {
            resource,
            input: self.raw_input.clone(),
            segment: name,
        })
    }
}

/// Parses inputs against one template.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    resource: &'static str,
    segments: &'static [Segment],
}

impl Parser {
    pub const fn new(resource: &'static str, segments: &'static [Segment]) -> Self {
        Self { resource, segments }
    }

    /// A parser for the template of `T`.
    pub fn for_type<T: ResourceId>() -> Self {
        Self::new(T::RESOURCE_NAME, T::SEGMENTS)
    }

    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Parses `input` against the template.
    ///
    /// With `insensitively` set, static and resource provider literals are
    /// compared ignoring ASCII case. Data values are never case-folded.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ResourceIdError> {
        let trimmed = input.strip_prefix('/').unwrap_or(input);
        // "" and "/" carry no tokens; everywhere else an empty token is kept
        let mut tokens = (!trimmed.is_empty())
            .then(|| trimmed.split('/'))
            .into_iter()
            .flatten();

        let mut parsed = BTreeMap::new();
        for segment in self.segments {
            let Some(token) = tokens.next() else {
                return Err(ResourceIdError::Incomplete {
                    resource: self.resource,
                    input: input.to_string(),
                    segment: segment.name(),
                    expected: segment.expectation(),
                });
            };

            match segment.fixed_value() {
                Some(expected) => {
                    let matches = if insensitively {
                        token.eq_ignore_ascii_case(expected)
                    } else {
                        token == expected
                    };
                    if !matches {
                        return Err(ResourceIdError::ValueMismatch {
                            resource: self.resource,
                            input: input.to_string(),
                            segment: segment.name(),
                            expected,
                            actual: token.to_string(),
                        });
                    }
                    parsed.insert(segment.name(), expected.to_string());
                }
                None => {
                    if token.is_empty() {
                        return Err(ResourceIdError::EmptySegment {
                            resource: self.resource,
                            input: input.to_string(),
                            segment: segment.name(),
                        });
                    }
                    parsed.insert(segment.name(), token.to_string());
                }
            }
        }

        if let Some(extra) = tokens.next() {
            return Err(ResourceIdError::ExtraSegment {
                resource: self.resource,
                input: input.to_string(),
                extra: extra.to_string(),
            });
        }

        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
        })
    }
}
