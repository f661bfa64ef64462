use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The operation applied by a [`PatchOperation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl PatchOp {
    const ALL: [PatchOp; 6] = [
        Self::Add,
        Self::Remove,
        Self::Replace,
        Self::Move,
        Self::Copy,
        Self::Test,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Replace => "replace",
            Self::Move => "move",
            Self::Copy => "copy",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for PatchOp {
    type Err = InvalidPatchOperation;
    fn from_str(op: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(op))
            .ok_or_else(|| {
                InvalidPatchOperation::new(
                    op,
                    format!(
                        "unknown op, should be one of {}",
                        Self::ALL.map(PatchOp::as_str).join(", ")
                    ),
                )
            })
    }
}

/// A single patch operation, as used by the `Update*` operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchOperation {
    pub op: PatchOp,

    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Parse a patch operation from the command line.
///
/// Either a JSON object (e.g. `{"op": "replace", "path": "/name", "value": "new"}`) or
/// comma-separated `key=value` pairs (e.g. `op=replace,path=/name,value=new`). JSON is tried
/// first. Values containing commas must use the JSON form.
impl FromStr for PatchOperation {
    type Err = InvalidPatchOperation;
    fn from_str(operation: &str) -> Result<Self, Self::Err> {
        if operation.trim_start().starts_with('{') {
            return serde_json::from_str(operation)
                .map_err(|error| InvalidPatchOperation::new(operation, error.to_string()));
        }

        let mut op = None;
        let mut path = None;
        let mut value = None;
        let mut from = None;
        for pair in operation.split(',') {
            let kv: Vec<_> = pair.splitn(2, '=').collect();
            let [key, val]: [_; 2] = kv.try_into().map_err(|_| {
                InvalidPatchOperation::new(operation, format!("`{pair}` is not `key=value`"))
            })?;
            match key.trim() {
                "op" => op = Some(val.parse()?),
                "path" => path = Some(val.to_string()),
                "value" => value = Some(val.to_string()),
                "from" => from = Some(val.to_string()),
                key => {
                    return Err(InvalidPatchOperation::new(
                        operation,
                        format!("unknown key `{key}`, should be one of op, path, value, from"),
                    ))
                }
            }
        }

        Ok(Self {
            op: op.ok_or_else(|| InvalidPatchOperation::new(operation, "missing `op`"))?,
            path: path.ok_or_else(|| InvalidPatchOperation::new(operation, "missing `path`"))?,
            value,
            from,
        })
    }
}

#[derive(Debug)]
pub struct InvalidPatchOperation {
    operation: String,
    reason: String,
}

impl InvalidPatchOperation {
    fn new(operation: &str, reason: impl Into<String>) -> Self {
        Self {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidPatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid patch operation `{}`: {}",
            self.operation, self.reason
        )
    }
}

impl std::error::Error for InvalidPatchOperation {}
