pub mod phrases;
pub mod populate;
pub mod synthesizer;

pub use crate::domain::model::{
    CommentId, CreatedComment, CreatedReply, PopulationReport,
};
pub use crate::domain::ports::{CommentApi, ConfigProvider, IndexSource};
pub use crate::utils::error::Result;
