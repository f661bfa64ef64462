use aws_config::BehaviorVersion;
use aws_types::{region::Region, SdkConfig};

use crate::Error;

const MISSING_REGION: &str = "Unable to determine the AWS region.
You can set it in your profile, assign `AWS_REGION`, or supply `--region`.";

/// Explicit configuration for the API Gateway client.
///
/// Anything left unset falls back to the usual AWS sources (environment, shared config and
/// credentials files, instance metadata).
#[derive(Clone, Debug, Default, clap::Args)]
pub struct ClientConfig {
    /// The AWS region to send requests to.
    #[clap(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// The named profile to take credentials and settings from.
    #[clap(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Send requests to this URL instead of the regional API Gateway endpoint.
    #[clap(long, global = true)]
    pub endpoint_url: Option<String>,
}

pub async fn get_config(config: &ClientConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}

pub async fn get_client(config: &ClientConfig) -> Result<aws_sdk_apigateway::Client, Error> {
    let sdk_config = get_config(config).await;
    match sdk_config.region() {
        Some(region) => {
            tracing::debug!(%region, endpoint_url = ?sdk_config.endpoint_url(), "configured client");
        }
        None => return Err(Error::other(MISSING_REGION)),
    }
    Ok(aws_sdk_apigateway::Client::new(&sdk_config))
}
