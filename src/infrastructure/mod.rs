//! Infrastructure layer: OS adapters, host call surface, and config storage.

pub mod host_bridge;
pub mod pointer;
pub mod storage;
