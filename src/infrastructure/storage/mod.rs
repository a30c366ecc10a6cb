//! Config storage for the demo binary.

pub mod config;
