use std::fmt;

use aws_sdk_apigateway::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types as sdk, Client,
};
use aws_smithy_types_convert::date_time::DateTimeExt as _;
use chrono::{DateTime, Utc};

use super::{
    ApiGateway, ApiKey, ClientCertificate, ClientError, DeleteVpcLinkRequest,
    DeleteVpcLinkResponse, GetModelRequest, Model, UpdateApiKeyRequest,
    UpdateClientCertificateRequest,
};
use crate::patch::PatchOperation;

#[async_trait::async_trait]
impl ApiGateway for Client {
    async fn get_model(&self, request: GetModelRequest) -> Result<Model, ClientError> {
        let output = Client::get_model(self)
            .set_rest_api_id(request.rest_api_id)
            .set_model_name(request.model_name)
            .set_flatten(request.flatten)
            .send()
            .await
            .map_err(classify)?;
        Ok(Model {
            id: output.id,
            name: output.name,
            description: output.description,
            schema: output.schema,
            content_type: output.content_type,
        })
    }

    async fn delete_vpc_link(
        &self,
        request: DeleteVpcLinkRequest,
    ) -> Result<DeleteVpcLinkResponse, ClientError> {
        Client::delete_vpc_link(self)
            .set_vpc_link_id(request.vpc_link_id)
            .send()
            .await
            .map_err(classify)?;
        Ok(DeleteVpcLinkResponse)
    }

    async fn update_api_key(&self, request: UpdateApiKeyRequest) -> Result<ApiKey, ClientError> {
        let output = Client::update_api_key(self)
            .set_api_key(request.api_key)
            .set_patch_operations(request.patch_operations.map(to_sdk_patch))
            .send()
            .await
            .map_err(classify)?;
        Ok(ApiKey {
            id: output.id,
            value: output.value,
            name: output.name,
            customer_id: output.customer_id,
            description: output.description,
            enabled: output.enabled,
            created_date: output.created_date.as_ref().and_then(to_chrono),
            last_updated_date: output.last_updated_date.as_ref().and_then(to_chrono),
            stage_keys: output.stage_keys.unwrap_or_default(),
            tags: output.tags.unwrap_or_default().into_iter().collect(),
        })
    }

    async fn update_client_certificate(
        &self,
        request: UpdateClientCertificateRequest,
    ) -> Result<ClientCertificate, ClientError> {
        let output = Client::update_client_certificate(self)
            .set_client_certificate_id(request.client_certificate_id)
            .set_patch_operations(request.patch_operations.map(to_sdk_patch))
            .send()
            .await
            .map_err(classify)?;
        Ok(ClientCertificate {
            client_certificate_id: output.client_certificate_id,
            description: output.description,
            pem_encoded_certificate: output.pem_encoded_certificate,
            created_date: output.created_date.as_ref().and_then(to_chrono),
            expiration_date: output.expiration_date.as_ref().and_then(to_chrono),
            tags: output.tags.unwrap_or_default().into_iter().collect(),
        })
    }
}

fn to_sdk_patch(operations: Vec<PatchOperation>) -> Vec<sdk::PatchOperation> {
    operations
        .into_iter()
        .map(|operation| {
            sdk::PatchOperation::builder()
                .op(sdk::Op::from(operation.op.as_str()))
                .path(operation.path)
                .set_value(operation.value)
                .set_from(operation.from)
                .build()
        })
        .collect()
}

fn to_chrono(date: &aws_sdk_apigateway::primitives::DateTime) -> Option<DateTime<Utc>> {
    date.to_chrono_utc().ok()
}

/// Sort an SDK error into the [`ClientErrorKind`](super::ClientErrorKind)s the adapter cares
/// about, keeping the full error chain as the message.
fn classify<E, R>(error: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: fmt::Debug,
{
    let message = DisplayErrorContext(&error).to_string();
    match &error {
        SdkError::DispatchFailure(failure) => {
            dispatch_failure(failure.is_timeout(), failure.is_user(), message)
        }
        SdkError::TimeoutError(_) => ClientError::timeout(message),
        SdkError::ServiceError(context) => {
            ClientError::service(context.err().code().map(str::to_string), message)
        }
        _ => ClientError::other(message),
    }
}

/// A request that never got a response. Unless it timed out or the connector refused to build it
/// (a user error), the endpoint couldn't be reached.
fn dispatch_failure(timeout: bool, user: bool, message: String) -> ClientError {
    if timeout {
        ClientError::timeout(message)
    } else if user {
        ClientError::other(message)
    } else {
        ClientError::connectivity(message)
    }
}
