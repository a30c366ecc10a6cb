//! # cursor-lock
//!
//! System-wide cursor confinement: trap the pointer inside a rectangular
//! region of the screen, and release it again.
//!
//! This crate is used by both the embedding host (through the JSON bridge)
//! and the demo binary in `main.rs`.
//!
//! # How it works (for beginners)
//!
//! Operating systems keep a single, process-visible piece of state for the
//! cursor: it is either free to roam the whole desktop, or *confined* to one
//! rectangle (on Windows this is the `ClipCursor` primitive).  There is no
//! queue and no nesting — applying a new rectangle replaces the old one in a
//! single system call, and releasing restores free movement no matter how
//! many times confinement was applied.
//!
//! The crate is split into three layers:
//!
//! - **`domain`** – Pure geometry.  [`ConfinementRegion`] validates the
//!   caller's `(x, y, width, height)` rectangle and translates it into the
//!   `{left, top, right, bottom}` edge form the platform consumes.
//!
//! - **`application`** – The [`ConfinementController`] use case: `lock`,
//!   `unlock`, and the RAII [`ConfinementGuard`] that releases confinement
//!   when dropped (including on panic).  The OS facility is abstracted behind
//!   the [`PlatformPointerService`] trait.
//!
//! - **`infrastructure`** – Adapters: the Win32 `ClipCursor` implementation,
//!   an in-memory mock for tests, the JSON [`HostBridge`] call surface for
//!   dynamically-typed embedding hosts, and TOML config for the demo binary.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the most-used types at the crate root so callers can write
// `cursor_lock::ConfinementController` instead of spelling out the full path.
pub use application::confinement::{
    ConfinementController, ConfinementError, ConfinementGuard, PlatformPointerService,
    PointerServiceError,
};
pub use domain::region::{ClipRect, ConfinementRegion, RegionError};
pub use infrastructure::host_bridge::{HostBridge, HostErrorKind, HostRequest, HostResponse};
