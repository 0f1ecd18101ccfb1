pub mod static_content_query;

pub use static_content_query::StaticContentQuery;
