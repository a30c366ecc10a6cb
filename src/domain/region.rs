//! Confinement region geometry.
//!
//! A [`ConfinementRegion`] is the rectangle a caller asks the cursor to be
//! confined to: an origin `(x, y)` plus extents `(width, height)`, all in
//! screen-space pixels with the origin at the primary display's top-left
//! corner.  Construction validates the extents, so every region that exists
//! has positive width and height and representable corners.
//!
//! A [`ClipRect`] is the translated edge form `{left, top, right, bottom}`
//! that the platform pointer service actually consumes
//! (`right = x + width`, `bottom = y + height`).

use thiserror::Error;

/// Errors produced when validating a confinement rectangle.
///
/// Degenerate rectangles are rejected up front rather than passed through to
/// the OS: zero or negative extents confine the cursor to nothing meaningful,
/// and the platform's behaviour for them is undocumented.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegionError {
    /// The requested width was zero or negative.
    #[error("confinement width must be positive, got {0}")]
    NonPositiveWidth(i32),

    /// The requested height was zero or negative.
    #[error("confinement height must be positive, got {0}")]
    NonPositiveHeight(i32),

    /// `origin + extent` does not fit in the i32 screen coordinate space.
    #[error("confinement region exceeds the i32 coordinate space")]
    Overflow,
}

/// A rectangle in the platform's edge representation.
///
/// This is the exact shape handed to the pointer service: all four values are
/// screen-space pixel coordinates, `right` and `bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// A validated cursor confinement rectangle.
///
/// Invariants held by every instance:
///
/// - `width > 0` and `height > 0`
/// - `x + width` and `y + height` are representable as `i32`
///
/// A region value is constructed transiently per lock request, translated to a
/// [`ClipRect`], and discarded; it is never retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfinementRegion {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl ConfinementRegion {
    /// Validates and constructs a confinement region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NonPositiveWidth`] / [`RegionError::NonPositiveHeight`]
    /// for zero or negative extents, and [`RegionError::Overflow`] when a corner
    /// coordinate would not fit in `i32`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, RegionError> {
        if width <= 0 {
            return Err(RegionError::NonPositiveWidth(width));
        }
        if height <= 0 {
            return Err(RegionError::NonPositiveHeight(height));
        }
        x.checked_add(width).ok_or(RegionError::Overflow)?;
        y.checked_add(height).ok_or(RegionError::Overflow)?;

        Ok(Self { x, y, width, height })
    }

    /// X coordinate of the top-left corner (may be negative on multi-monitor
    /// desktops that extend left of the primary display).
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate of the top-left corner.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width in pixels (always positive).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels (always positive).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Translates the region into the platform's edge representation.
    pub fn to_clip_rect(&self) -> ClipRect {
        ClipRect {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
