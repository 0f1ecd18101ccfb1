pub mod session;

pub use session::{resolve_session_or_response, SessionToken, DEFAULT_SESSION_COOKIE_NAMES};
