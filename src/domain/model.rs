use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for comment and reply creation. The service wraps the
/// actual content in a `payload` object and expects an explicit format tag.
#[derive(Debug, Serialize)]
pub struct CommentEnvelope<'a> {
    pub payload: CommentBody<'a>,
}

#[derive(Debug, Serialize)]
pub struct CommentBody<'a> {
    pub content: &'a str,
    pub format: &'a str,
}

impl<'a> CommentEnvelope<'a> {
    pub fn html(content: &'a str) -> Self {
        Self {
            payload: CommentBody {
                content,
                format: "html",
            },
        }
    }
}

/// Comment identifier as returned by the service. Some deployments hand out
/// numeric ids, others opaque strings; both address the same path segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommentId {
    Text(String),
    Number(i64),
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentId::Text(id) => write!(f, "{}", id),
            CommentId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// Subset of the creation response the driver needs: the id replies attach to.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedComment {
    pub id: CommentId,
}

/// Reply-creation response; retained only long enough to count it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedReply {
    pub id: CommentId,
}

/// Aggregate counts for one population run. Attempted and created are
/// tracked separately so a shortfall is visible without diffing logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationReport {
    pub comments_attempted: usize,
    pub comments_created: usize,
    pub replies_attempted: usize,
    pub replies_created: usize,
}

impl PopulationReport {
    pub fn total_created(&self) -> usize {
        self.comments_created + self.replies_created
    }
}
