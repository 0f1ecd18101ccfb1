mod list_content_service;

pub use list_content_service::ListContentService;
