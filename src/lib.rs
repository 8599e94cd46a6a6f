//! Pass/fail accounting for unit tests.
//!
//! A [`Suite`] counts assertion outcomes for one run and reports each
//! failure on standard error as `<file>:<line>: test failed: <name>`.
//! Deciding what a failed run means (exit status, escalation) is left to
//! the caller.

pub mod core;


pub use crate::core::suite::{ContractViolation, Suite, BAD_MEM, DEFAULT_SYSTEM_NAME, MAGIC};
