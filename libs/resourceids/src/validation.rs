//! Front-end validation of resource IDs.

use serde_json::Value;

use crate::{ResourceId, ResourceIdError};

/// Outcome of validating one input value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ResourceIdError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks that `input` is a string which parses strictly as a `T`.
///
/// `key` names the input in the error raised for non-string values. A
/// successful parse produces neither warnings nor errors.
pub fn validate<T: ResourceId>(input: &Value, key: &str) -> Validation {
    let mut validation = Validation::default();

    let Some(v) = input.as_str() else {
        validation.errors.push(ResourceIdError::NotAString {
            key: key.to_string(),
        });
        return validation;
    };

    if let Err(e) = T::parse(v) {
        validation.errors.push(e);
    }

    validation
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commonids::ResourceGroupId;

    #[test]
    fn test_valid_input_is_silent() {
        let validation = validate::<ResourceGroupId>(
            &json!("/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example"),
            "resource_group_id",
        );
        assert!(validation.is_valid());
        assert!(validation.warnings.is_empty());
        assert_eq!(validation, Validation::default());
    }

    #[test]
    fn test_non_string_input() {
        let validation = validate::<ResourceGroupId>(&json!(42), "resource_group_id");
        assert_eq!(
            validation.errors,
            vec![ResourceIdError::NotAString {
                key: "resource_group_id".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let validation = ResourceGroupId::validate(
            &json!("/subscriptions/12345678-1234-9876-4563-123456789012/resourcegroups/example"),
            "resource_group_id",
        );
        assert!(!validation.is_valid());
        assert!(validation.errors[0].is_mismatch());
    }
}
