//! Windows pointer confinement via the `ClipCursor` Win32 API.
//!
//! `ClipCursor(Some(&rect))` restricts system-wide cursor movement to the
//! given screen-space rectangle until changed or cleared; `ClipCursor(None)`
//! removes the restriction.  Each call is a single synchronous system call, so
//! replacing one confinement with another leaves no window where the cursor is
//! free or confined to a stale rectangle.
//!
//! Win32 screen coordinates already match the crate's convention (pixels,
//! origin at the primary display's top-left corner), so rectangles pass
//! through untransformed.  The OS drops any confinement this process applied
//! when the process exits or the user switches desktops; the RAII guard in the
//! application layer exists so we do not rely on that alone.

#![cfg(target_os = "windows")]

use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::ClipCursor;

use crate::application::confinement::{PlatformPointerService, PointerServiceError};
use crate::domain::region::ClipRect;

/// Windows implementation of [`PlatformPointerService`] using `ClipCursor`.
pub struct WindowsPointerService;

impl WindowsPointerService {
    /// Creates a new `WindowsPointerService`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsPointerService {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPointerService for WindowsPointerService {
    fn confine(&self, rect: ClipRect) -> Result<(), PointerServiceError> {
        let rect = RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        };
        // SAFETY: `rect` is a valid RECT on the stack; ClipCursor copies it
        // before returning and does not retain the pointer.
        unsafe { ClipCursor(Some(&rect)) }.map_err(win32_error)
    }

    fn release(&self) -> Result<(), PointerServiceError> {
        // SAFETY: passing None removes any active confinement; no pointer is
        // dereferenced.
        unsafe { ClipCursor(None) }.map_err(win32_error)
    }
}

/// Maps a `windows` crate error to the crate's platform error type.
fn win32_error(e: windows::core::Error) -> PointerServiceError {
    PointerServiceError {
        code: e.code().0,
        message: e.message(),
    }
}
