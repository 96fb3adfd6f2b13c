#![cfg(test)]

//! Unit-test logging bootstrap; delegates to the shared test-support crate
//! so unit and integration tests filter logs the same way
//! (`TEST_LOG`, then `RUST_LOG`, then `warn`).

pub fn init() {
    judge_test_support::logging::init();
}
