pub mod accounts;
pub mod sessions;
pub mod users;
pub mod verification_tokens;
