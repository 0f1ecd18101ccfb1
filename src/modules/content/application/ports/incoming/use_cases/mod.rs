mod list_content_use_case;

pub use list_content_use_case::{ListContentError, ListContentUseCase};
