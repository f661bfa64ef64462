use serde::{Deserialize, Serialize};

use crate::{
    adapter::Operation,
    api::{ApiGateway, DeleteVpcLinkRequest, DeleteVpcLinkResponse, Pending},
    parameters::ParameterSpec,
};

/// Delete an existing VPC link.
///
/// This is destructive, so you'll be asked to confirm unless `--force` is given. When STDIN isn't
/// a terminal the deletion is skipped unless `--force` is given.
///
/// # Output
///
/// Nothing is printed on success, unless `--select ^VpcLinkId` is used to echo the deleted link.
///
/// # Exit code
///
/// If the VPC link is deleted, or the deletion was declined, the CLI exits with code 0.
///
/// If API Gateway returns an error, the error is printed to STDERR and the exit code is 4.
///
/// If the invocation fails for any other reason, then the exit code is 1.
#[derive(Debug, Default, clap::Parser, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct Args {
    /// The identifier of the VPC link. Required.
    #[clap(long)]
    pub vpc_link_id: Option<String>,
}

impl From<Args> for DeleteVpcLinkRequest {
    fn from(args: Args) -> Self {
        Self {
            vpc_link_id: args.vpc_link_id,
        }
    }
}

pub struct DeleteVpcLink;

impl Operation for DeleteVpcLink {
    const NAME: &'static str = "DeleteVpcLink";
    const TARGET: &'static str = "VpcLinkId";
    const DESTRUCTIVE: bool = true;
    const PARAMETERS: &'static [ParameterSpec] = &[ParameterSpec::required("VpcLinkId")];
    const RESPONSE_FIELDS: &'static [&'static str] = &[];

    type Params = Args;
    type Request = DeleteVpcLinkRequest;
    type Response = DeleteVpcLinkResponse;

    fn send(
        client: &dyn ApiGateway,
        request: DeleteVpcLinkRequest,
    ) -> Pending<'_, DeleteVpcLinkResponse> {
        client.delete_vpc_link(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        adapter::{
            tests::{Answer, MockClient},
            Adapter, AdapterConfig,
        },
        Confirmation, Error,
    };

    fn args() -> Args {
        Args {
            vpc_link_id: Some("vpc-1".to_string()),
        }
    }

    #[tokio::test]
    async fn prompt_names_the_vpc_link() {
        struct Capture(std::sync::Mutex<String>);
        impl crate::Confirm for Capture {
            fn confirm(&self, prompt: &str) -> Confirmation {
                *self.0.lock().unwrap() = prompt.to_string();
                Confirmation::Abort
            }
        }

        let capture = Capture(Default::default());
        let adapter = Adapter::<DeleteVpcLink>::new(&AdapterConfig::default()).unwrap();
        let envelope = adapter
            .invoke(&MockClient::default(), &capture, args())
            .await
            .unwrap();
        assert!(envelope.is_aborted());
        assert_eq!(
            *capture.0.lock().unwrap(),
            "Performing DeleteVpcLink on VpcLinkId `vpc-1`. Continue?"
        );
    }

    #[tokio::test]
    async fn confirmed_deletion_echoes_the_link_id() {
        let client = MockClient::default();
        let adapter = Adapter::<DeleteVpcLink>::new(&AdapterConfig {
            select: Some("^VpcLinkId".to_string()),
            ..AdapterConfig::default()
        })
        .unwrap();
        let envelope = adapter
            .invoke(&client, &Answer::new(Confirmation::Proceed), args())
            .await
            .unwrap();
        assert_eq!(envelope.payload(), Some(&json!("vpc-1")));
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn missing_link_id_fails_before_prompting() {
        let answer = Answer::new(Confirmation::Proceed);
        let adapter = Adapter::<DeleteVpcLink>::new(&AdapterConfig::default()).unwrap();
        let error = adapter
            .invoke(&MockClient::default(), &answer, Args::default())
            .await
            .unwrap_err();
        assert!(matches!(error, Error::MissingRequiredParameter { .. }), "{error}");
        assert_eq!(answer.prompts(), 0);
    }

    #[test]
    fn response_has_no_selectable_fields() {
        let error = Adapter::<DeleteVpcLink>::new(&AdapterConfig {
            select: Some("id".to_string()),
            ..AdapterConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(error, Error::InvalidSelector { .. }), "{error}");
        assert_eq!(
            serde_json::to_value(DeleteVpcLinkResponse).unwrap(),
            Value::Null
        );
    }
}
