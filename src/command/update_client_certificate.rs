use serde::{Deserialize, Serialize};

use crate::{
    adapter::Operation,
    api::{ApiGateway, ClientCertificate, Pending, UpdateClientCertificateRequest},
    parameters::ParameterSpec,
    patch::PatchOperation,
};

/// Change information about a client certificate.
///
/// # Output
///
/// The updated client certificate is printed to STDOUT, or the projection chosen with
/// `--select`.
///
/// # Exit code
///
/// If the client certificate is updated, the CLI exits with code 0.
///
/// If API Gateway returns an error, the error is printed to STDERR and the exit code is 4.
///
/// If the invocation fails for any other reason, then the exit code is 1.
#[derive(Debug, Default, clap::Parser, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct Args {
    /// The identifier of the client certificate to be updated. Required.
    #[clap(long)]
    pub client_certificate_id: Option<String>,

    /// Update operations to apply to the client certificate, in order.
    ///
    /// See `update-api-key --help` for the accepted forms.
    #[clap(long, num_args(1..))]
    pub patch_operations: Vec<PatchOperation>,
}

impl From<Args> for UpdateClientCertificateRequest {
    fn from(args: Args) -> Self {
        Self {
            client_certificate_id: args.client_certificate_id,
            patch_operations: if args.patch_operations.is_empty() {
                None
            } else {
                Some(args.patch_operations)
            },
        }
    }
}

pub struct UpdateClientCertificate;

impl Operation for UpdateClientCertificate {
    const NAME: &'static str = "UpdateClientCertificate";
    const TARGET: &'static str = "ClientCertificateId";
    const PARAMETERS: &'static [ParameterSpec] = &[
        ParameterSpec::required("ClientCertificateId"),
        ParameterSpec::optional("PatchOperations"),
    ];
    const RESPONSE_FIELDS: &'static [&'static str] = &[
        "clientCertificateId",
        "description",
        "pemEncodedCertificate",
        "createdDate",
        "expirationDate",
        "tags",
    ];

    type Params = Args;
    type Request = UpdateClientCertificateRequest;
    type Response = ClientCertificate;

    fn send(
        client: &dyn ApiGateway,
        request: UpdateClientCertificateRequest,
    ) -> Pending<'_, ClientCertificate> {
        client.update_client_certificate(request)
    }
}
