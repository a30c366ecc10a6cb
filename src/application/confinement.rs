//! ConfinementController: locks and unlocks system-wide cursor confinement.
//!
//! The controller sits at the application layer and delegates to a
//! [`PlatformPointerService`] trait object for the actual OS call.  The
//! platform-specific implementations live in the infrastructure layer
//! (`ClipCursor` on Windows, an in-memory recorder for tests).
//!
//! # State model
//!
//! Confinement state is process-wide, binary, and owned entirely by the OS:
//! the cursor is either *unconfined* (the default) or *confined* to the last
//! successfully applied rectangle.  The controller keeps no shadow copy and
//! offers no query — each `lock` replaces any prior confinement atomically
//! (the underlying primitive is a single synchronous system call), and
//! `unlock` always transitions to unconfined, even when already there.
//!
//! # Lifetime and cleanup
//!
//! The OS releases confinement when the process exits, but relying on that
//! alone leaves the cursor trapped across panics and early returns while the
//! process lives on.  [`ConfinementController::lock_guard`] ties the release
//! to a value's `Drop` instead, so confinement ends when the guard leaves
//! scope — on success, error unwind, or panic alike.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::region::{ClipRect, ConfinementRegion, RegionError};

// ── Errors ────────────────────────────────────────────────────────────────────

/// A failure reported by the platform pointer service itself.
///
/// Carries the OS error code so callers can tell *why* confinement did not
/// take effect instead of silently continuing with a free cursor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("platform pointer call failed: {message} (code {code})")]
pub struct PointerServiceError {
    /// OS-level error code (`HRESULT` on Windows; adapter-defined elsewhere).
    pub code: i32,
    /// Human-readable description for logs.
    pub message: String,
}

/// Error type for confinement operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfinementError {
    /// The requested rectangle failed validation; no state was changed.
    #[error("invalid confinement region: {0}")]
    InvalidArgument(#[from] RegionError),

    /// The platform rejected the confinement call.
    #[error(transparent)]
    Platform(#[from] PointerServiceError),
}

// ── Collaborator contract ─────────────────────────────────────────────────────

/// The OS-provided pointer confinement facility, as seen by the controller.
///
/// One production implementation exists per supported build target; the mock
/// implementation in the infrastructure layer records calls for tests.
/// Implementations must be `Send + Sync` so a host application can share the
/// controller across threads; per-call atomicity and last-writer-wins ordering
/// across overlapping calls are the platform's own guarantees.
pub trait PlatformPointerService: Send + Sync {
    /// Restricts system-wide cursor movement to `rect`, replacing any prior
    /// confinement.
    fn confine(&self, rect: ClipRect) -> Result<(), PointerServiceError>;

    /// Removes any active confinement, restoring free cursor movement.
    /// Releasing while already unconfined is a successful no-op.
    fn release(&self) -> Result<(), PointerServiceError>;
}

// ── Controller ────────────────────────────────────────────────────────────────

/// The Cursor Confinement Controller.
///
/// Validates caller-supplied rectangles, translates them to the platform's
/// edge representation, and forwards them to the pointer service.  Cloning is
/// cheap (the service handle is shared).
#[derive(Clone)]
pub struct ConfinementController {
    service: Arc<dyn PlatformPointerService>,
}

impl ConfinementController {
    /// Creates a controller backed by the given pointer service.
    pub fn new(service: Arc<dyn PlatformPointerService>) -> Self {
        Self { service }
    }

    /// Confines the cursor to `region`.
    ///
    /// On success the process-wide state is *confined to this region*; any
    /// previous region is replaced with no unconfined window in between.
    ///
    /// # Errors
    ///
    /// Returns [`ConfinementError::Platform`] when the OS rejects the call.
    /// State is then whatever the platform left it as — typically unchanged.
    pub fn lock(&self, region: ConfinementRegion) -> Result<(), ConfinementError> {
        let rect = region.to_clip_rect();
        self.service.confine(rect)?;
        debug!(
            left = rect.left,
            top = rect.top,
            right = rect.right,
            bottom = rect.bottom,
            "cursor confined"
        );
        Ok(())
    }

    /// Validates `(x, y, width, height)` and confines the cursor.
    ///
    /// Convenience wrapper over [`ConfinementRegion::new`] + [`Self::lock`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfinementError::InvalidArgument`] for degenerate geometry
    /// (the platform is not called) or [`ConfinementError::Platform`] when the
    /// OS rejects the call.
    pub fn lock_xywh(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), ConfinementError> {
        let region = ConfinementRegion::new(x, y, width, height)?;
        self.lock(region)
    }

    /// Releases any active confinement.
    ///
    /// Infallible from the caller's perspective: unlocking while already
    /// unconfined succeeds, and a platform-level release failure is only
    /// logged (the OS also releases confinement when the process exits).
    pub fn unlock(&self) {
        match self.service.release() {
            Ok(()) => debug!("cursor confinement released"),
            Err(e) => warn!("cursor confinement release failed: {e}"),
        }
    }

    /// Confines the cursor and returns a guard that releases the confinement
    /// when dropped.
    ///
    /// Prefer this over a bare [`Self::lock`] whenever the confinement should
    /// end with a scope: the guard releases on normal exit, `?`-propagated
    /// errors, and panics alike.
    ///
    /// # Errors
    ///
    /// Same as [`Self::lock`]; no guard is created when the lock fails.
    pub fn lock_guard(
        &self,
        region: ConfinementRegion,
    ) -> Result<ConfinementGuard, ConfinementError> {
        self.lock(region)?;
        Ok(ConfinementGuard {
            service: Arc::clone(&self.service),
        })
    }
}

/// Releases cursor confinement when dropped.
///
/// Created by [`ConfinementController::lock_guard`].  Dropping the guard while
/// the confinement was already replaced or released is harmless: release is
/// idempotent at the platform level.
#[must_use = "dropping the guard immediately releases the confinement"]
pub struct ConfinementGuard {
    service: Arc<dyn PlatformPointerService>,
}

impl Drop for ConfinementGuard {
    fn drop(&mut self) {
        if let Err(e) = self.service.release() {
            warn!("cursor confinement release on drop failed: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ── Recording service ─────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingPointerService {
        confines: Mutex<Vec<ClipRect>>,
        releases: Mutex<usize>,
        should_fail: bool,
    }

    impl PlatformPointerService for RecordingPointerService {
        fn confine(&self, rect: ClipRect) -> Result<(), PointerServiceError> {
            if self.should_fail {
                return Err(PointerServiceError {
                    code: 5,
                    message: "injected failure".to_string(),
                });
            }
            self.confines.lock().unwrap().push(rect);
            Ok(())
        }

        fn release(&self) -> Result<(), PointerServiceError> {
            if self.should_fail {
                return Err(PointerServiceError {
                    code: 5,
                    message: "injected failure".to_string(),
                });
            }
            *self.releases.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn make_controller() -> (ConfinementController, Arc<RecordingPointerService>) {
        let service = Arc::new(RecordingPointerService::default());
        let controller =
            ConfinementController::new(Arc::clone(&service) as Arc<dyn PlatformPointerService>);
        (controller, service)
    }

    // ── lock ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_lock_forwards_translated_rect_to_service() {
        // Arrange
        let (controller, service) = make_controller();
        let region = ConfinementRegion::new(100, 100, 200, 150).unwrap();

        // Act
        controller.lock(region).unwrap();

        // Assert
        assert_eq!(
            *service.confines.lock().unwrap(),
            vec![ClipRect { left: 100, top: 100, right: 300, bottom: 250 }]
        );
    }

    #[test]
    fn test_relock_replaces_region_without_release_in_between() {
        // Arrange
        let (controller, service) = make_controller();

        // Act
        controller.lock_xywh(100, 100, 200, 150).unwrap();
        controller.lock_xywh(50, 50, 10, 10).unwrap();

        // Assert: two confine calls, zero releases
        let confines = service.confines.lock().unwrap();
        assert_eq!(confines.len(), 2);
        assert_eq!(
            confines[1],
            ClipRect { left: 50, top: 50, right: 60, bottom: 60 }
        );
        assert_eq!(*service.releases.lock().unwrap(), 0);
    }

    #[test]
    fn test_lock_xywh_rejects_degenerate_region_without_touching_service() {
        // Arrange
        let (controller, service) = make_controller();

        // Act
        let result = controller.lock_xywh(0, 0, 0, 0);

        // Assert
        assert!(matches!(result, Err(ConfinementError::InvalidArgument(_))));
        assert!(service.confines.lock().unwrap().is_empty());
    }

    #[test]
    fn test_lock_surfaces_platform_failure_with_code() {
        // Arrange
        let service = Arc::new(RecordingPointerService {
            should_fail: true,
            ..Default::default()
        });
        let controller =
            ConfinementController::new(Arc::clone(&service) as Arc<dyn PlatformPointerService>);
        let region = ConfinementRegion::new(0, 0, 100, 100).unwrap();

        // Act
        let result = controller.lock(region);

        // Assert
        match result {
            Err(ConfinementError::Platform(e)) => assert_eq!(e.code, 5),
            other => panic!("expected Platform error, got {other:?}"),
        }
    }

    // ── unlock ────────────────────────────────────────────────────────────────

    #[test]
    fn test_unlock_calls_release() {
        let (controller, service) = make_controller();
        controller.unlock();
        assert_eq!(*service.releases.lock().unwrap(), 1);
    }

    #[test]
    fn test_unlock_is_idempotent() {
        // Arrange
        let (controller, service) = make_controller();

        // Act: unlock twice with no confinement active
        controller.unlock();
        controller.unlock();

        // Assert: both calls went through; neither panicked or errored
        assert_eq!(*service.releases.lock().unwrap(), 2);
    }

    #[test]
    fn test_unlock_swallows_platform_failure() {
        // Arrange
        let service = Arc::new(RecordingPointerService {
            should_fail: true,
            ..Default::default()
        });
        let controller =
            ConfinementController::new(Arc::clone(&service) as Arc<dyn PlatformPointerService>);

        // Act / Assert: must not panic
        controller.unlock();
    }

    // ── guard ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_guard_releases_on_drop() {
        // Arrange
        let (controller, service) = make_controller();
        let region = ConfinementRegion::new(0, 0, 800, 600).unwrap();

        // Act
        {
            let _guard = controller.lock_guard(region).unwrap();
            assert_eq!(*service.releases.lock().unwrap(), 0);
        }

        // Assert: leaving the scope released the confinement
        assert_eq!(*service.releases.lock().unwrap(), 1);
    }

    #[test]
    fn test_guard_releases_on_panic_unwind() {
        // Arrange
        let (controller, service) = make_controller();
        let region = ConfinementRegion::new(0, 0, 800, 600).unwrap();

        // Act
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = controller.lock_guard(region).unwrap();
            panic!("boom");
        }));

        // Assert
        assert!(result.is_err());
        assert_eq!(*service.releases.lock().unwrap(), 1);
    }

    #[test]
    fn test_failed_lock_produces_no_guard_and_no_release() {
        // Arrange
        let service = Arc::new(RecordingPointerService {
            should_fail: true,
            ..Default::default()
        });
        let controller =
            ConfinementController::new(Arc::clone(&service) as Arc<dyn PlatformPointerService>);
        let region = ConfinementRegion::new(0, 0, 100, 100).unwrap();

        // Act
        let result = controller.lock_guard(region);

        // Assert
        assert!(result.is_err());
    }
}
