use async_trait::async_trait;

use crate::content::application::{
    domain::entities::Post,
    ports::outgoing::{ContentQuery, ContentQueryError},
};

const POSTS: [(&str, &str, &str); 5] = [
    (
        "Lorem Ipsum",
        "lorem-ipsum",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer nec odio. Praesent libero.",
    ),
    (
        "Dolor Sit Amet",
        "dolor-sit-amet",
        "Sed cursus ante dapibus diam. Sed nisi. Nulla quis sem at nibh elementum imperdiet.",
    ),
    (
        "Consectetur Adipiscing",
        "consectetur-adipiscing",
        "Duis sagittis ipsum. Praesent mauris. Fusce nec tellus sed augue semper porta.",
    ),
    (
        "Integer Nec Odio",
        "integer-nec-odio",
        "Mauris massa. Vestibulum lacinia arcu eget nulla. Class aptent taciti sociosqu ad litora torquent.",
    ),
    (
        "Praesent Libero",
        "praesent-libero",
        "Suspendisse in justo eu magna luctus suscipit. Sed lectus. Integer euismod lacus luctus magna.",
    ),
];

/// Compiled-in content listing.
#[derive(Debug, Clone, Default)]
pub struct StaticContentQuery;

impl StaticContentQuery {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentQuery for StaticContentQuery {
    async fn list_posts(&self) -> Result<Vec<Post>, ContentQueryError> {
        Ok(POSTS
            .iter()
            .map(|(title, slug, content)| Post::new(title, slug, content))
            .collect())
    }
}
