//! The API Gateway operations the CLI drives, as a trait over typed requests and responses.
//!
//! [`ApiGateway`] is implemented for [`aws_sdk_apigateway::Client`] in [`sdk`]. Tests substitute
//! an in-memory implementation.

mod sdk;

use std::{collections::BTreeMap, future::Future, pin::Pin};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::patch::PatchOperation;

/// Boxed future returned by [`ApiGateway`] methods.
pub type Pending<'a, T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + Send + 'a>>;

/// Trait representing interactions with API Gateway.
#[async_trait::async_trait]
pub trait ApiGateway: Send + Sync {
    async fn get_model(&self, request: GetModelRequest) -> Result<Model, ClientError>;

    async fn delete_vpc_link(
        &self,
        request: DeleteVpcLinkRequest,
    ) -> Result<DeleteVpcLinkResponse, ClientError>;

    async fn update_api_key(&self, request: UpdateApiKeyRequest) -> Result<ApiKey, ClientError>;

    async fn update_client_certificate(
        &self,
        request: UpdateClientCertificateRequest,
    ) -> Result<ClientCertificate, ClientError>;
}

/// Request to describe an existing model defined for a REST API.
///
/// Unset fields are left unset on the wire, so the service applies its own defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_api_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten: Option<bool>,
}

/// Represents the data structure of a method's request or response payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVpcLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_link_id: Option<String>,
}

/// `DeleteVpcLink` returns no content. Serializes as `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DeleteVpcLinkResponse;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApiKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_operations: Option<Vec<PatchOperation>>,
}

/// A resource that can be distributed to callers for executing method resources that require an
/// API key.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stage_keys: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientCertificateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_operations: Option<Vec<PatchOperation>>,
}

/// A client certificate used to configure client-side SSL authentication while sending requests
/// to the integration endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCertificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pem_encoded_certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// An error raised by an [`ApiGateway`] implementation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// The endpoint couldn't be reached (name resolution, refused connections, TLS, ...).
    Connectivity,

    /// The request timed out.
    Timeout,

    /// The service rejected the request.
    Service { code: Option<String> },

    Other,
}

impl ClientError {
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Connectivity, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Timeout, message)
    }

    pub fn service(code: Option<String>, message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Service { code }, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Other, message)
    }

    fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
