/// Convenient alias for [`Result`]`<T, `[`Error`]`>`.
///
/// [`Result`]: std::result::Result
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for failures that aren't otherwise classified.
pub const EXIT_OTHER: i32 = 1;

/// Exit code when a remote operation was dispatched and failed.
pub const EXIT_REMOTE_FAILURE: i32 = 4;

/// Errors that can occur when binding, confirming, or dispatching an operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required parameter was not supplied.
    #[error("{operation}: missing required parameter `{parameter}`")]
    MissingRequiredParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    /// A `--select` expression could not be compiled against the operation's schema.
    #[error("invalid selector `{expression}`: {reason}")]
    InvalidSelector { expression: String, reason: String },

    /// The API client failed while performing the operation.
    #[error("{operation} failed: {message}")]
    RemoteOperationFailure {
        operation: &'static str,
        message: String,
    },

    /// The confirmation step itself failed (e.g. the prompt couldn't be displayed).
    #[error("couldn't confirm operation: {0}")]
    Confirmation(String),

    /// Some items of a batch failed. Each failure has already been reported.
    #[error("{failed} of {total} batch items failed")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Other(error.into())
    }

    /// The process exit code that should be used when this error terminates the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RemoteOperationFailure { .. } | Self::BatchFailed { .. } => EXIT_REMOTE_FAILURE,
            _ => EXIT_OTHER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failures_have_their_own_exit_code() {
        let error = Error::RemoteOperationFailure {
            operation: "GetModel",
            message: "boom".to_string(),
        };
        assert_eq!(error.exit_code(), EXIT_REMOTE_FAILURE);
        assert_eq!(error.to_string(), "GetModel failed: boom");
    }

    #[test]
    fn bind_failures_exit_with_other() {
        let error = Error::MissingRequiredParameter {
            operation: "DeleteVpcLink",
            parameter: "VpcLinkId",
        };
        assert_eq!(error.exit_code(), EXIT_OTHER);
        assert_eq!(
            error.to_string(),
            "DeleteVpcLink: missing required parameter `VpcLinkId`"
        );
        assert_eq!(Error::other("nope").exit_code(), EXIT_OTHER);
    }
}
