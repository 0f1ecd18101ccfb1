use async_trait::async_trait;

use crate::content::application::domain::entities::Post;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListContentError {
    #[error("Failed to list content: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Post>, ListContentError>;
}
