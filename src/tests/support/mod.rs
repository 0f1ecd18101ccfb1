pub mod app_state_builder;
pub mod mocks;
pub mod stubs;
