//! Cursor confinement demo entry point.
//!
//! Reproduces the original host program: confine the cursor to a rectangle,
//! hold for a few seconds, then release.  Region and hold duration come from
//! the optional TOML config (see `infrastructure::storage::config`); absent
//! config falls back to `0,0 1080x600` held for five seconds.
//!
//! The confinement is held through a [`ConfinementGuard`], so the cursor is
//! released even if the demo panics mid-hold.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cursor_lock::infrastructure::storage::config::load_config;
use cursor_lock::{ConfinementController, ConfinementRegion, PlatformPointerService};

#[cfg(target_os = "windows")]
use cursor_lock::infrastructure::pointer::windows::WindowsPointerService;

#[cfg(not(target_os = "windows"))]
use cursor_lock::infrastructure::pointer::mock::MockPointerService;

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Initialise structured logging.  RUST_LOG overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.demo.log_level.clone())),
        )
        .init();

    info!("cursor-lock demo starting");

    // ── Platform pointer service ──────────────────────────────────────────────
    // Windows builds drive the real ClipCursor primitive; elsewhere the mock
    // records calls so the demo flow can still be exercised on dev machines.
    #[cfg(target_os = "windows")]
    let service: Arc<dyn PlatformPointerService> = Arc::new(WindowsPointerService::new());
    #[cfg(not(target_os = "windows"))]
    let service: Arc<dyn PlatformPointerService> = Arc::new(MockPointerService::new());

    let controller = ConfinementController::new(service);

    let region = ConfinementRegion::new(
        config.confinement.x,
        config.confinement.y,
        config.confinement.width,
        config.confinement.height,
    )?;

    let guard = controller.lock_guard(region)?;
    info!(
        x = region.x(),
        y = region.y(),
        width = region.width(),
        height = region.height(),
        "cursor confined; holding for {} ms",
        config.demo.hold_ms
    );

    std::thread::sleep(Duration::from_millis(config.demo.hold_ms));

    drop(guard);
    info!("cursor released");

    Ok(())
}
