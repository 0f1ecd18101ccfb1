use async_trait::async_trait;

use crate::content::application::{
    domain::entities::Post,
    ports::incoming::use_cases::{ListContentError, ListContentUseCase},
    ports::outgoing::ContentQuery,
};

#[derive(Debug, Clone)]
pub struct ListContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListContentUseCase for ListContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Post>, ListContentError> {
        self.query
            .list_posts()
            .await
            .map_err(|e| ListContentError::QueryFailed(e.to_string()))
    }
}
