//! Projections applied to successful responses.
//!
//! The grammar is closed:
//!
//! - `*` selects the whole response.
//! - `Name` selects a single top-level response field.
//! - `^Name` echoes back the value bound to the input parameter `Name`.
//!
//! Names are matched case-insensitively against the operation's static schema when the selector
//! is compiled, so an unknown name fails before anything is sent.

use serde_json::Value;

use crate::{parameters::ParameterSpec, Error, Parameters};

pub const IDENTITY: &str = "*";

/// A compiled selector expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    Identity,
    Field(&'static str),
    Parameter(&'static str),
}

impl Selector {
    /// Compile `expression` against an operation's parameters and response fields.
    pub fn compile(
        expression: &str,
        parameters: &'static [ParameterSpec],
        fields: &'static [&'static str],
    ) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidSelector {
            expression: expression.to_string(),
            reason,
        };

        let trimmed = expression.trim();
        if trimmed == IDENTITY {
            return Ok(Self::Identity);
        }

        let (echo, name) = match trimmed.strip_prefix('^') {
            Some(name) => (true, name),
            None => (false, trimmed),
        };
        if !is_identifier(name) {
            return Err(invalid(
                "expected `*`, a response field name, or `^` followed by a parameter name"
                    .to_string(),
            ));
        }

        if echo {
            parameters
                .iter()
                .find(|spec| spec.name.eq_ignore_ascii_case(name))
                .map(|spec| Self::Parameter(spec.name))
                .ok_or_else(|| {
                    invalid(format!(
                        "unknown parameter `{name}`, expected one of: {}",
                        parameters
                            .iter()
                            .map(|spec| spec.name)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })
        } else if fields.is_empty() {
            Err(invalid(
                "the response has no fields, use `*` or `^Parameter`".to_string(),
            ))
        } else {
            fields
                .iter()
                .copied()
                .find(|field| field.eq_ignore_ascii_case(name))
                .map(Self::Field)
                .ok_or_else(|| {
                    invalid(format!(
                        "unknown response field `{name}`, expected one of: {}",
                        fields.join(", ")
                    ))
                })
        }
    }

    /// Project a response (or the invocation's parameters).
    pub fn select(&self, response: &Value, parameters: &Parameters) -> Value {
        match self {
            Self::Identity => response.clone(),
            Self::Field(field) => response.get(field).cloned().unwrap_or(Value::Null),
            Self::Parameter(name) => parameters.get(name).cloned().unwrap_or(Value::Null),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const PARAMETERS: &[ParameterSpec] = &[
        ParameterSpec::required("RestApiId"),
        ParameterSpec::required("ModelName"),
        ParameterSpec::optional("Flatten"),
    ];
    const FIELDS: &[&str] = &["id", "name", "schema", "contentType"];

    fn compile(expression: &str) -> Result<Selector, Error> {
        Selector::compile(expression, PARAMETERS, FIELDS)
    }

    #[test]
    fn compiles_the_grammar() {
        assert_eq!(compile("*").unwrap(), Selector::Identity);
        assert_eq!(compile(" * ").unwrap(), Selector::Identity);
        assert_eq!(compile("schema").unwrap(), Selector::Field("schema"));
        assert_eq!(compile("^ModelName").unwrap(), Selector::Parameter("ModelName"));
    }

    #[test]
    fn resolves_names_case_insensitively() {
        assert_eq!(compile("ContentType").unwrap(), Selector::Field("contentType"));
        assert_eq!(compile("^restapiid").unwrap(), Selector::Parameter("RestApiId"));
    }

    #[test]
    fn rejects_malformed_expressions() {
        for expression in ["", "^", "**", "a.b", "^1abc", "name[0]"] {
            let error = compile(expression).unwrap_err();
            assert!(
                matches!(error, Error::InvalidSelector { .. }),
                "{expression}: {error}"
            );
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let error = compile("etag").unwrap_err();
        assert!(error.to_string().contains("unknown response field `etag`"), "{error}");

        let error = compile("^VpcLinkId").unwrap_err();
        assert!(error.to_string().contains("unknown parameter `VpcLinkId`"), "{error}");
    }

    #[test]
    fn fields_are_rejected_when_the_response_has_none() {
        const NONE: &[&str] = &[];
        let error = Selector::compile("id", PARAMETERS, NONE).unwrap_err();
        assert!(error.to_string().contains("no fields"), "{error}");
        assert_eq!(
            Selector::compile("^ModelName", PARAMETERS, NONE).unwrap(),
            Selector::Parameter("ModelName")
        );
    }

    #[test]
    fn selects_from_response_or_parameters() {
        let response = json!({ "id": "m1", "name": "UserModel" });
        let parameters = Parameters::capture(&json!({
            "RestApiId": "abc123",
            "ModelName": "UserModel",
        }))
        .unwrap();

        assert_eq!(Selector::Identity.select(&response, &parameters), response);
        assert_eq!(
            Selector::Field("id").select(&response, &parameters),
            json!("m1")
        );
        assert_eq!(
            Selector::Field("schema").select(&response, &parameters),
            Value::Null
        );
        assert_eq!(
            Selector::Parameter("RestApiId").select(&response, &parameters),
            json!("abc123")
        );
        assert_eq!(
            Selector::Parameter("Flatten").select(&response, &parameters),
            Value::Null
        );
    }
}
