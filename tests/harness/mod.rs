//! Test harness for cabundle integration tests

pub mod runner;

pub use runner::{cabundle, cabundle_with_env};
