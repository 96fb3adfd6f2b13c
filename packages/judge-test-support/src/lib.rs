//! Judge test support utilities
//!
//! Shared by the judge crate's unit and integration tests: unified logging
//! initialization and the project-wide proptest configuration.

pub mod logging;
pub mod proptest_config;
