//! Domain layer: pure confinement geometry.
//!
//! Everything in this module is plain data and arithmetic — no OS calls,
//! no I/O, no logging.  The platform adapters in the infrastructure layer
//! consume these types.

pub mod region;
