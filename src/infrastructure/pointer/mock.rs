//! Mock pointer service for unit and integration testing.
//!
//! # Why a mock service?
//!
//! The real adapter (`WindowsPointerService`) makes an OS call that:
//!
//! - Requires a desktop session to run.
//! - Actually traps the cursor on the test machine.
//! - Offers no way to read back which rectangle was applied.
//!
//! The `MockPointerService` replaces the OS call with in-memory recording.
//! Every `confine`/`release` call is logged, and the rectangle the platform
//! would currently be enforcing is kept in `active`, so tests can assert both
//! the call sequence and the resulting confinement state.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` (and optionally `fail_code`) before sharing the
//! mock to make every call return a [`PointerServiceError`].  This exercises
//! the error-handling paths in the controller without a broken OS.

use std::sync::Mutex;

use crate::application::confinement::{PlatformPointerService, PointerServiceError};
use crate::domain::region::ClipRect;

/// A pointer service that records all calls without touching the OS.
///
/// Records live in `Mutex` fields so tests can share the mock across threads
/// behind an `Arc`.
#[derive(Default)]
pub struct MockPointerService {
    /// Every rectangle passed to `confine`, in call order.
    pub confine_calls: Mutex<Vec<ClipRect>>,
    /// Number of `release` calls made.
    pub release_calls: Mutex<usize>,
    /// The rectangle the platform would currently be enforcing, if any.
    pub active: Mutex<Option<ClipRect>>,
    /// When `true`, every call fails with `fail_code`.
    pub should_fail: bool,
    /// Error code used for injected failures.
    pub fail_code: i32,
}

impl MockPointerService {
    /// Creates a mock with empty records that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose every call fails with the given error code.
    pub fn failing(code: i32) -> Self {
        Self {
            should_fail: true,
            fail_code: code,
            ..Self::default()
        }
    }

    /// The confinement rectangle the platform would report right now.
    pub fn active_confinement(&self) -> Option<ClipRect> {
        *self.active.lock().unwrap()
    }
}

impl PlatformPointerService for MockPointerService {
    /// Records the rectangle, or returns an error if `should_fail` is set.
    fn confine(&self, rect: ClipRect) -> Result<(), PointerServiceError> {
        if self.should_fail {
            return Err(PointerServiceError {
                code: self.fail_code,
                message: "mock failure".to_string(),
            });
        }
        self.confine_calls.lock().unwrap().push(rect);
        *self.active.lock().unwrap() = Some(rect);
        Ok(())
    }

    /// Clears the active rectangle, or returns an error if `should_fail` is set.
    fn release(&self) -> Result<(), PointerServiceError> {
        if self.should_fail {
            return Err(PointerServiceError {
                code: self.fail_code,
                message: "mock failure".to_string(),
            });
        }
        *self.release_calls.lock().unwrap() += 1;
        *self.active.lock().unwrap() = None;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
