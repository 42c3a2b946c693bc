//! Shared helpers for quadmap integration tests.

pub mod test_util;
