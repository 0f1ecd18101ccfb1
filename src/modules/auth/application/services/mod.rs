pub mod expired_record_sweeper;
pub mod session_resolver;

pub use expired_record_sweeper::{ExpiredRecordSweeper, SweepReport};
pub use session_resolver::SessionResolver;
