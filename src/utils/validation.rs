use crate::utils::error::{PopulateError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PopulateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PopulateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PopulateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PopulateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_not_placeholder(field_name: &str, value: &str, placeholder: &str) -> Result<()> {
    if value == placeholder {
        return Err(PopulateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Value is still the placeholder {:?}; supply a real identifier",
                placeholder
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "https://example.com/api").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_bad_input() {
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not a url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_not_placeholder() {
        assert!(validate_not_placeholder("request_id", "REQ-123", "YOUR_REQUEST_ID_HERE").is_ok());

        let err = validate_not_placeholder(
            "request_id",
            "YOUR_REQUEST_ID_HERE",
            "YOUR_REQUEST_ID_HERE",
        )
        .unwrap_err();
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("access_token", "token").is_ok());
        assert!(validate_non_empty("access_token", "").is_err());
        assert!(validate_non_empty("access_token", "   ").is_err());
    }
}
