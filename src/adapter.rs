//! The request-dispatch adapter shared by every operation.
//!
//! An invocation moves through bind, confirm, dispatch and select, strictly in that order:
//!
//! - [`Adapter::new`] compiles the selector against the operation's schema.
//! - [`Adapter::bind`] captures the parameter set and checks required parameters.
//! - [`Adapter::confirm`] gates destructive operations.
//! - [`Adapter::dispatch`] builds the request, calls the client and wraps the outcome in an
//!   [`Envelope`]. Client failures never escape as `Err`.
//!
//! Bind-time failures are returned as `Err` since nothing has been sent yet.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::{ApiGateway, ClientError, ClientErrorKind, Pending},
    confirm::{Confirm, Confirmation},
    parameters::{MissingParameterPolicy, ParameterSpec},
    selector::Selector,
    Error, Parameters,
};

/// Static definition of one API operation.
pub trait Operation: 'static {
    /// The API operation name, e.g. `GetModel`.
    const NAME: &'static str;

    /// The parameter named in confirmation prompts.
    const TARGET: &'static str;

    /// Whether the operation must be confirmed before it is dispatched.
    const DESTRUCTIVE: bool = false;

    const PARAMETERS: &'static [ParameterSpec];

    /// Top-level fields of the serialized response, for selectors.
    const RESPONSE_FIELDS: &'static [&'static str];

    type Params: Serialize + DeserializeOwned;

    /// Built from the parameters, copying only the fields that were set.
    type Request: From<Self::Params> + Serialize;

    type Response: Serialize;

    fn send(client: &dyn ApiGateway, request: Self::Request) -> Pending<'_, Self::Response>;
}

/// Immutable configuration shared by every invocation of an adapter.
#[derive(Clone, Debug, Default)]
pub struct AdapterConfig {
    /// The selector expression. `None` selects the whole response.
    pub select: Option<String>,

    /// Skip confirmation of destructive operations.
    pub force: bool,

    pub missing_parameters: MissingParameterPolicy,
}

/// The outcome of a dispatched (or aborted) invocation.
#[derive(Debug)]
pub enum Envelope {
    Succeeded { response: Value, payload: Value },
    Failed(Error),
    Aborted,
}

impl Envelope {
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Succeeded { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Parameters that have passed binding.
pub struct Bound<O: Operation> {
    params: O::Params,
    parameters: Parameters,
}

pub struct Adapter<O> {
    selector: Selector,
    force: bool,
    missing_parameters: MissingParameterPolicy,
    operation: PhantomData<fn() -> O>,
}

impl<O: Operation> Adapter<O> {
    pub fn new(config: &AdapterConfig) -> Result<Self, Error> {
        let selector = match config.select.as_deref() {
            Some(expression) => Selector::compile(expression, O::PARAMETERS, O::RESPONSE_FIELDS)?,
            None => Selector::Identity,
        };
        Ok(Self {
            selector,
            force: config.force,
            missing_parameters: config.missing_parameters,
            operation: PhantomData,
        })
    }

    pub fn bind(&self, params: O::Params) -> Result<Bound<O>, Error> {
        let parameters = Parameters::capture(&params)?;
        for spec in parameters.missing(O::PARAMETERS) {
            match self.missing_parameters {
                MissingParameterPolicy::Strict => {
                    return Err(Error::MissingRequiredParameter {
                        operation: O::NAME,
                        parameter: spec.name,
                    })
                }
                MissingParameterPolicy::Warn => {
                    tracing::warn!(
                        operation = O::NAME,
                        parameter = spec.name,
                        "missing required parameter, sending anyway"
                    );
                }
            }
        }
        tracing::debug!(operation = O::NAME, ?parameters, "bound");
        Ok(Bound { params, parameters })
    }

    pub fn confirm(&self, bound: &Bound<O>, confirm: &dyn Confirm) -> Confirmation {
        if !O::DESTRUCTIVE || self.force {
            return Confirmation::Proceed;
        }
        let target = match bound.parameters.get(O::TARGET) {
            Some(Value::String(target)) => target.clone(),
            Some(target) => target.to_string(),
            None => "(unset)".to_string(),
        };
        confirm.confirm(&format!(
            "Performing {} on {} `{target}`. Continue?",
            O::NAME,
            O::TARGET
        ))
    }

    pub async fn dispatch(&self, client: &dyn ApiGateway, bound: Bound<O>) -> Envelope {
        let Bound { params, parameters } = bound;
        let request = O::Request::from(params);
        tracing::debug!(operation = O::NAME, "dispatching");

        let response = match O::send(client, request).await {
            Ok(response) => response,
            Err(error) => {
                let error = remote_failure(O::NAME, error);
                tracing::debug!(operation = O::NAME, %error, "failed");
                return Envelope::Failed(error);
            }
        };

        match serde_json::to_value(&response) {
            Ok(response) => {
                let payload = self.selector.select(&response, &parameters);
                Envelope::Succeeded { response, payload }
            }
            Err(error) => Envelope::Failed(Error::other(format!(
                "couldn't serialize {} response: {error}",
                O::NAME
            ))),
        }
    }

    /// Bind, confirm and dispatch one parameter set.
    pub async fn invoke(
        &self,
        client: &dyn ApiGateway,
        confirm: &dyn Confirm,
        params: O::Params,
    ) -> Result<Envelope, Error> {
        let bound = self.bind(params)?;
        match self.confirm(&bound, confirm) {
            Confirmation::Proceed => {}
            Confirmation::Abort => {
                tracing::info!(operation = O::NAME, "aborted by user");
                return Ok(Envelope::Aborted);
            }
            Confirmation::Error(error) => return Err(Error::Confirmation(error)),
        }
        Ok(self.dispatch(client, bound).await)
    }
}

fn remote_failure(operation: &'static str, error: ClientError) -> Error {
    let message = match error.kind {
        ClientErrorKind::Connectivity => format!(
            concat!(
                "couldn't reach the API Gateway endpoint, check your network connection and the ",
                "configured region or endpoint URL ({})"
            ),
            error.message
        ),
        ClientErrorKind::Timeout => format!("the request timed out ({})", error.message),
        ClientErrorKind::Service { .. } | ClientErrorKind::Other => error.message,
    };
    Error::RemoteOperationFailure { operation, message }
}
