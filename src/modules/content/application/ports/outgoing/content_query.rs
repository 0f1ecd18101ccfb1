use async_trait::async_trait;

use crate::content::application::domain::entities::Post;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Content source error: {0}")]
    SourceError(String),
}

#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Posts in display order.
    async fn list_posts(&self) -> Result<Vec<Post>, ContentQueryError>;
}
