// Shared test utilities and crate-level rendering tests
pub mod common;
