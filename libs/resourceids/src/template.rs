//! Consistency checks for segment templates.

use std::collections::HashSet;

use crate::{Segment, TemplateError};

/// Checks that a template is well-formed and lines up with its struct fields.
///
/// A template must be non-empty, its segment names must be unique, static
/// segments must carry a literal, and the data segments must appear in the
/// same order as `field_names`.
pub fn check_template(
    resource: &'static str,
    segments: &'static [Segment],
    field_names: &[&'static str],
) -> Result<(), TemplateError> {
    if segments.is_empty() {
        return Err(TemplateError::Empty { resource });
    }

    let mut seen = HashSet::new();
    for segment in segments {
        if !seen.insert(segment.name()) {
            return Err(TemplateError::DuplicateName {
                resource,
                name: segment.name(),
            });
        }
        if segment.is_static() && segment.fixed_value().is_none() {
            return Err(TemplateError::MissingFixedValue {
                resource,
                name: segment.name(),
            });
        }
    }

    let data: Vec<&'static str> = segments
        .iter()
        .filter(|s| !s.is_static())
        .map(Segment::name)
        .collect();
    if data != field_names {
        return Err(TemplateError::FieldMismatch {
            resource,
            segments: data,
            fields: field_names.to_vec(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &[Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId", "12345678-1234-9876-4563-123456789012"),
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::resource_provider(
            "staticMicrosoftMarketplaceOrdering",
            "Microsoft.MarketplaceOrdering",
            "Microsoft.MarketplaceOrdering",
        ),
        Segment::static_segment("staticAgreements", "agreements", "agreements"),
        Segment::user_specified("publisherId", "publisherIdValue"),
        Segment::static_segment("staticOffers", "offers", "offers"),
        Segment::user_specified("offerId", "offerIdValue"),
        Segment::static_segment("staticPlans", "plans", "plans"),
        Segment::user_specified("planId", "planIdValue"),
    ];

    const DUPLICATED: &[Segment] = &[
        Segment::static_segment("staticProviders", "providers", "providers"),
        Segment::user_specified("name", "nameValue"),
        Segment::static_segment("staticProviders", "providers", "providers"),
    ];

    #[test]
    fn test_valid_template() {
        assert_eq!(
            check_template("Plan", PLAN, &["subscriptionId", "publisherId", "offerId", "planId"]),
            Ok(())
        );
    }

    #[test]
    fn test_duplicate_names() {
        assert_eq!(
            check_template("Dup", DUPLICATED, &["name"]),
            Err(TemplateError::DuplicateName {
                resource: "Dup",
                name: "staticProviders",
            })
        );
    }

    #[test]
    fn test_field_order_mismatch() {
        let err = check_template("Plan", PLAN, &["subscriptionId", "offerId", "publisherId", "planId"])
            .unwrap_err();
        assert!(matches!(err, TemplateError::FieldMismatch { .. }));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(
            check_template("Nothing", &[], &[]),
            Err(TemplateError::Empty { resource: "Nothing" })
        );
    }
}
