use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of the public content listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    #[schema(example = "Lorem Ipsum")]
    pub title: String,
    #[schema(example = "lorem-ipsum")]
    pub slug: String,
    pub content: String,
}

impl Post {
    pub fn new(title: &str, slug: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
            content: content.to_string(),
        }
    }
}
