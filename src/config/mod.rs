use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty, validate_not_placeholder, validate_url, Validate,
};
use clap::Parser;

/// Sentinel left in place when no real request id has been configured.
/// A run against it is refused before any network call goes out.
pub const REQUEST_ID_PLACEHOLDER: &str = "YOUR_REQUEST_ID_HERE";

#[derive(Debug, Clone, Parser)]
#[command(name = "autopop")]
#[command(about = "Populate a request with randomized comments and replies")]
pub struct CliConfig {
    /// Base URL of the target instance
    #[arg(long, env = "AUTOPOP_BASE_URL")]
    pub base_url: String,

    /// Access token used as a bearer credential
    #[arg(long, env = "AUTOPOP_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Request to thread the generated comments under
    #[arg(long, env = "AUTOPOP_REQUEST_ID", default_value = REQUEST_ID_PLACEHOLDER)]
    pub request_id: String,

    /// Number of top-level comments to create
    #[arg(long, default_value = "50")]
    pub num_comments: usize,

    /// Number of replies per comment
    #[arg(long, default_value = "3")]
    pub num_replies: usize,

    /// Skip TLS certificate validation (local/self-signed instances only)
    #[arg(long)]
    pub insecure: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn request_id(&self) -> &str {
        &self.request_id
    }

    fn num_comments(&self) -> usize {
        self.num_comments
    }

    fn num_replies(&self) -> usize {
        self.num_replies
    }

    fn accept_invalid_certs(&self) -> bool {
        self.insecure
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty("access_token", &self.access_token)?;
        validate_non_empty("request_id", &self.request_id)?;
        validate_not_placeholder("request_id", &self.request_id, REQUEST_ID_PLACEHOLDER)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            base_url: "https://instance.example.com".to_string(),
            access_token: "token-abc".to_string(),
            request_id: "REQ-123".to_string(),
            num_comments: 50,
            num_replies: 3,
            insecure: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_placeholder_request_id_is_a_config_error() {
        let mut config = config();
        config.request_id = REQUEST_ID_PLACEHOLDER.to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_id"));
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let mut config = config();
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_access_token_is_rejected() {
        let mut config = config();
        config.access_token = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_volumes_are_allowed() {
        let mut config = config();
        config.num_comments = 0;
        config.num_replies = 0;
        assert!(config.validate().is_ok());
    }
}
