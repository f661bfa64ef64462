use serde::{Deserialize, Serialize};

use crate::{
    adapter::Operation,
    api::{ApiGateway, ApiKey, Pending, UpdateApiKeyRequest},
    parameters::ParameterSpec,
    patch::PatchOperation,
};

/// Change information about an API key resource.
///
/// # Output
///
/// The updated API key is printed to STDOUT, or the projection chosen with `--select`.
///
/// # Exit code
///
/// If the API key is updated, the CLI exits with code 0.
///
/// If API Gateway returns an error, the error is printed to STDERR and the exit code is 4.
///
/// If the invocation fails for any other reason, then the exit code is 1.
#[derive(Debug, Default, clap::Parser, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct Args {
    /// The identifier of the API key resource to update. Required.
    #[clap(long)]
    pub api_key: Option<String>,

    /// Update operations to apply to the API key, in order.
    ///
    /// Each operation is either comma-separated `key=value` pairs (e.g.
    /// `op=replace,path=/enabled,value=false`) or a JSON object (e.g.
    /// `{"op": "add", "path": "/stages", "value": "abc123/prod"}`).
    #[clap(long, num_args(1..))]
    pub patch_operations: Vec<PatchOperation>,
}

impl From<Args> for UpdateApiKeyRequest {
    fn from(args: Args) -> Self {
        Self {
            api_key: args.api_key,
            patch_operations: if args.patch_operations.is_empty() {
                None
            } else {
                Some(args.patch_operations)
            },
        }
    }
}

pub struct UpdateApiKey;

impl Operation for UpdateApiKey {
    const NAME: &'static str = "UpdateApiKey";
    const TARGET: &'static str = "ApiKey";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("ApiKey"),
        ParameterSpec::optional("PatchOperations"),
    ];
    const RESPONSE_FIELDS: &'static [&'static str] = &[
        "id",
        "value",
        "name",
        "customerId",
        "description",
        "enabled",
        "createdDate",
        "lastUpdatedDate",
        "stageKeys",
        "tags",
    ];

    type Params = Args;
    type Request = UpdateApiKeyRequest;
    type Response = ApiKey;

    fn send(client: &dyn ApiGateway, request: UpdateApiKeyRequest) -> Pending<'_, ApiKey> {
        client.update_api_key(request)
    }
}
