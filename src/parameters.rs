use serde::Serialize;
use serde_json::{Map, Value};

use crate::Error;

/// Static description of one parameter of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub required: bool,
}

impl ParameterSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// What to do when a required parameter is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MissingParameterPolicy {
    /// Fail before anything is sent.
    #[default]
    Strict,

    /// Log a warning and send the request anyway.
    Warn,
}

/// The named inputs of a single invocation, keyed by API parameter name (e.g. `RestApiId`).
///
/// `null` values and empty lists are treated as absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    /// Capture the parameter set from an operation's arguments.
    pub fn capture(params: &impl Serialize) -> Result<Self, Error> {
        match serde_json::to_value(params).map_err(Error::other)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::other(format!(
                "expected parameters to be an object, found `{other}`"
            ))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| match value {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The required parameters in `specs` that are absent.
    pub fn missing<'s>(
        &'s self,
        specs: &'s [ParameterSpec],
    ) -> impl Iterator<Item = &'s ParameterSpec> + 's {
        specs
            .iter()
            .filter(move |spec| spec.required && !self.is_present(spec.name))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SPECS: &[ParameterSpec] = &[
        ParameterSpec::required("RestApiId"),
        ParameterSpec::required("ModelName"),
        ParameterSpec::optional("Flatten"),
    ];

    #[test]
    fn nulls_are_absent() {
        let parameters =
            Parameters::capture(&json!({ "RestApiId": "abc123", "ModelName": null })).unwrap();
        assert_eq!(parameters.get("RestApiId"), Some(&json!("abc123")));
        assert!(!parameters.is_present("ModelName"));
        assert!(!parameters.is_present("Flatten"));
    }

    #[test]
    fn empty_lists_are_absent() {
        let parameters =
            Parameters::capture(&json!({ "ApiKey": "k1", "PatchOperations": [] })).unwrap();
        assert_eq!(parameters.get("PatchOperations"), None);
        assert_eq!(parameters.get("ApiKey"), Some(&json!("k1")));
    }

    #[test]
    fn reports_only_missing_required_parameters() {
        let parameters = Parameters::capture(&json!({ "ModelName": "UserModel" })).unwrap();
        let missing: Vec<_> = parameters.missing(SPECS).map(|spec| spec.name).collect();
        assert_eq!(missing, ["RestApiId"]);
    }

    #[test]
    fn rejects_non_object_parameters() {
        assert!(Parameters::capture(&json!(["RestApiId"])).is_err());
        assert_eq!(
            Parameters::capture(&Value::Null).unwrap(),
            Parameters::default()
        );
    }
}
