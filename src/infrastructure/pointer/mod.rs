//! Platform pointer service implementations.
//!
//! The production adapter is selected at compile time via
//! `#[cfg(target_os = ...)]`; the mock adapter is always available for tests
//! and for demo builds on hosts without the platform primitive.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
