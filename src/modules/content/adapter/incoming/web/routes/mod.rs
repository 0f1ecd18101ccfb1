mod get_content;

pub use get_content::*;
