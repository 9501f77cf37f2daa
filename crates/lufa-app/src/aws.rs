//! AWS session setup for the planner: the SDK config Bedrock calls run
//! under and a startup check of who those calls will be billed to.

use std::fmt;

use aws_sdk_sts::config::Credentials;

use crate::config::{CredentialSource, LufaConfig};

const PROVIDER_NAME: &str = "lufa-config";

/// The account and principal Bedrock requests will run as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.arn, self.account_id)
    }
}

/// Keys stored in the config file, if any. Profiles and the default chain
/// are resolved by the SDK loader instead.
pub fn static_credentials(creds: &CredentialSource) -> Option<Credentials> {
    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => Some(Credentials::new(
            access_key_id,
            secret_access_key,
            session_token.clone(),
            None,
            PROVIDER_NAME,
        )),
        CredentialSource::Profile { .. } | CredentialSource::DefaultChain => None,
    }
}

/// Load the SDK config for the configured region and credential source.
pub async fn sdk_config(config: &LufaConfig) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(credentials) = static_credentials(&config.credentials) {
        loader = loader.credentials_provider(credentials);
    } else if let CredentialSource::Profile { profile_name } = &config.credentials {
        loader = loader.profile_name(profile_name);
    }

    loader.load().await
}

/// Resolve the caller through STS so bad credentials surface before the
/// first (slow) plan request rather than as a generic connection failure.
pub async fn caller_identity(sdk: &aws_config::SdkConfig) -> eyre::Result<CallerIdentity> {
    let resp = aws_sdk_sts::Client::new(sdk)
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| eyre::eyre!("STS GetCallerIdentity failed: {}", e.into_service_error()))?;

    Ok(CallerIdentity {
        account_id: resp.account().unwrap_or_default().to_string(),
        arn: resp.arn().unwrap_or_default().to_string(),
    })
}
