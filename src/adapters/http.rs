use crate::domain::model::{CommentEnvelope, CommentId, CreatedComment, CreatedReply};
use crate::domain::ports::{CommentApi, ConfigProvider};
use crate::utils::error::{PopulateError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Reqwest-backed client for the comment service. One network write per
/// call; failures are returned to the caller, never retried here.
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    pub fn from_config(config: &impl ConfigProvider) -> Result<Self> {
        if config.accept_invalid_certs() {
            tracing::warn!("⚠️ TLS certificate validation is disabled for this run");
        }

        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            access_token: config.access_token().to_string(),
        })
    }

    async fn post_envelope(&self, url: String, content: &str) -> Result<reqwest::Response> {
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&CommentEnvelope::html(content))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PopulateError::ServerRejection { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl CommentApi for ApiClient {
    async fn create_comment(&self, request_id: &str, content: &str) -> Result<CreatedComment> {
        let url = format!("{}/requests/{}/comments", self.base_url, request_id);
        let response = self.post_envelope(url, content).await?;
        Ok(response.json::<CreatedComment>().await?)
    }

    async fn create_reply(
        &self,
        request_id: &str,
        parent_id: &CommentId,
        content: &str,
    ) -> Result<CreatedReply> {
        let url = format!(
            "{}/requests/{}/comments/{}/reply",
            self.base_url, request_id, parent_id
        );
        let response = self.post_envelope(url, content).await?;
        Ok(response.json::<CreatedReply>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct TestConfig {
        base_url: String,
    }

    impl ConfigProvider for TestConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn access_token(&self) -> &str {
            "test_token_123"
        }

        fn request_id(&self) -> &str {
            "REQ-9"
        }

        fn num_comments(&self) -> usize {
            1
        }

        fn num_replies(&self) -> usize {
            0
        }

        fn accept_invalid_certs(&self) -> bool {
            false
        }
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::from_config(&TestConfig {
            base_url: server.base_url(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_comment_posts_envelope_with_bearer_auth() {
        let server = MockServer::start();
        let comment_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/requests/REQ-9/comments")
                .header("authorization", "Bearer test_token_123")
                .json_body(serde_json::json!({
                    "payload": {"content": "Looks good to me.", "format": "html"}
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "c-1"}));
        });

        let client = client_for(&server);
        let created = client
            .create_comment("REQ-9", "Looks good to me.")
            .await
            .unwrap();

        comment_mock.assert();
        assert_eq!(created.id, CommentId::Text("c-1".to_string()));
    }

    #[tokio::test]
    async fn test_create_reply_targets_parent_path_segment() {
        let server = MockServer::start();
        let reply_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/requests/REQ-9/comments/42/reply")
                .header("authorization", "Bearer test_token_123");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": 43}));
        });

        let client = client_for(&server);
        let created = client
            .create_reply("REQ-9", &CommentId::Number(42), "Thanks!")
            .await
            .unwrap();

        reply_mock.assert();
        assert_eq!(created.id, CommentId::Number(43));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_server_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/requests/REQ-9/comments");
            then.status(422).body("content failed moderation");
        });

        let client = client_for(&server);
        let err = client
            .create_comment("REQ-9", "Looks good to me.")
            .await
            .unwrap_err();

        match err {
            PopulateError::ServerRejection { status, body } => {
                assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(body, "content failed moderation");
            }
            other => panic!("expected ServerRejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_without_id_field_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/requests/REQ-9/comments");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "queued"}));
        });

        let client = client_for(&server);
        let result = client.create_comment("REQ-9", "Looks good to me.").await;

        assert!(matches!(result, Err(PopulateError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_normalized() {
        let server = MockServer::start();
        let comment_mock = server.mock(|when, then| {
            when.method(POST).path("/requests/REQ-9/comments");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": 1}));
        });

        let client = ApiClient::from_config(&TestConfig {
            base_url: format!("{}/", server.base_url()),
        })
        .unwrap();
        client.create_comment("REQ-9", "Ship it.").await.unwrap();

        comment_mock.assert();
    }
}
