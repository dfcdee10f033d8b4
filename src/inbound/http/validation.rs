//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;
use tracing::warn;

use crate::domain::Error;

/// Newtype wrapper for query parameter names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_query_param(field: FieldName) -> Error {
    let field = field.as_str();
    warn!(parameter = field, "missing required query parameter");
    Error::invalid_request(format!("missing required query parameter: {field}"))
        .with_details(json!({ "parameter": field }))
}

/// Require a query parameter, treating an empty string as missing.
pub(crate) fn require_query_param(
    value: Option<String>,
    field: FieldName,
) -> Result<String, Error> {
    value
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| missing_query_param(field))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    fn absent_or_empty_values_are_missing(#[case] value: Option<String>) {
        let error = require_query_param(value, FieldName::new("name"))
            .expect_err("value should be rejected");
        assert_eq!(error.message(), "missing required query parameter: name");
        assert_eq!(
            error
                .details()
                .and_then(|details| details.get("parameter"))
                .and_then(serde_json::Value::as_str),
            Some("name")
        );
    }

    #[test]
    fn present_values_pass_through() {
        let value = require_query_param(Some("pikachu".to_owned()), FieldName::new("name"))
            .expect("value should pass");
        assert_eq!(value, "pikachu");
    }
}
