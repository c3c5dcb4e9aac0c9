use crate::domain::model::{CommentId, CreatedComment, CreatedReply};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote discussion service, reduced to the two writes this tool issues.
#[async_trait]
pub trait CommentApi: Send + Sync {
    /// Create a top-level comment on the given request.
    async fn create_comment(&self, request_id: &str, content: &str) -> Result<CreatedComment>;

    /// Create a reply under an existing comment on the given request.
    async fn create_reply(
        &self,
        request_id: &str,
        parent_id: &CommentId,
        content: &str,
    ) -> Result<CreatedReply>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn access_token(&self) -> &str;
    fn request_id(&self) -> &str;
    fn num_comments(&self) -> usize;
    fn num_replies(&self) -> usize;
    fn accept_invalid_certs(&self) -> bool;
}

/// Uniform random index supply. `bound` is always > 0; implementations
/// return a value in `0..bound`. Tests script the sequence to pin down
/// exactly which template and fragments get chosen.
pub trait IndexSource {
    fn pick(&mut self, bound: usize) -> usize;
}
