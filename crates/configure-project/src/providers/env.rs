// License: MIT OR Apache-2.0
//! This module provides a wrapper around a subset of `std::env` methods,
//! offering a simplified and testable interface for reading environment
//! variables.
//! It also integrates with `mockall` to enable mocking for unit tests.

#![allow(clippy::unused_self)]

use std::env::VarError;

/// Provides limited access to `std::env` methods
#[derive(Debug, Default)]
pub struct Env {}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(
    test,
    allow(
        dead_code,
        reason = "This implementation is mocked in test configuration."
    )
)]
impl Env {
    pub fn var(&self, var: &str) -> Result<String, VarError> {
        std::env::var(var)
    }
}
