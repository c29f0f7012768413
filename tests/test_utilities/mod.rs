/// Shared test helpers for integration tests
#[allow(dead_code)]
pub mod mocks;
