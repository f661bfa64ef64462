use serde::{Deserialize, Serialize};

use crate::{
    adapter::Operation,
    api::{ApiGateway, GetModelRequest, Model, Pending},
    parameters::ParameterSpec,
};

/// Describe an existing model defined for a REST API.
///
/// # Output
///
/// The model is printed to STDOUT, or the projection chosen with `--select`: a response field
/// (`id`, `name`, `description`, `schema`, `contentType`) or an input parameter (`^ModelName`).
///
/// # Exit code
///
/// If the model is retrieved successfully, the CLI exits with code 0.
///
/// If API Gateway returns an error, the error is printed to STDERR and the exit code is 4.
///
/// If the invocation fails for any other reason, then the exit code is 1.
#[derive(Debug, Default, clap::Parser, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct Args {
    /// The RestApi identifier under which the model exists. Required.
    #[clap(long)]
    pub rest_api_id: Option<String>,

    /// The name of the model as an identifier. Required.
    #[clap(long)]
    pub model_name: Option<String>,

    /// Resolve all external model references and return a flattened model schema.
    ///
    /// Only applies to models of a REST API. If unset, the service default applies.
    #[clap(long, num_args(0..=1), default_missing_value("true"))]
    pub flatten: Option<bool>,
}

impl From<Args> for GetModelRequest {
    fn from(args: Args) -> Self {
        GetModelRequest {
            rest_api_id: args.rest_api_id,
            model_name: args.model_name,
            flatten: args.flatten,
        }
    }
}

pub struct GetModel;

impl Operation for GetModel {
    const NAME: &'static str = "GetModel";
    const TARGET: &'static str = "ModelName";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("RestApiId"),
        ParameterSpec::required("ModelName"),
        ParameterSpec::optional("Flatten"),
    ];
    const RESPONSE_FIELDS: &'static [&'static str] =
        &["id", "name", "description", "schema", "contentType"];

    type Params = Args;
    type Request = GetModelRequest;
    type Response = Model;

    fn send(client: &dyn ApiGateway, request: GetModelRequest) -> Pending<'_, Model> {
        client.get_model(request)
    }
}
