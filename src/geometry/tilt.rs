//! Pure pointer-to-tilt geometry.
//!
//! Both functions assume non-degenerate bounds; callers check
//! [`crate::foundation::core::is_degenerate`] first. Pointer samples outside
//! the bounds are not clamped, so they overshoot `max_degrees`.

use crate::foundation::core::{Point, Rect};

/// Scale applied while a surface is tilted.
pub const ACTIVE_SCALE: f64 = 0.98;
/// Default peak-to-peak tilt for edge-anchored surfaces.
pub const DEFAULT_MAX_DEGREES: f64 = 10.0;

/// 3D rotation and scale for one surface. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub active: bool,
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TiltTransform {
    pub const IDENTITY: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        active: false,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` value; empty for the identity so the stylesheet's own
    /// transform applies again.
    pub fn to_css(&self, perspective_px: f64) -> String {
        if self.is_identity() {
            return String::new();
        }
        format!(
            "perspective({perspective_px}px) rotateX({}deg) rotateY({}deg) scale3d({s},{s},{s})",
            self.rotate_x,
            self.rotate_y,
            s = self.scale
        )
    }
}

/// Edge-anchored tilt: the pointer position relative to the box edges,
/// recentred on 0.5, times `max_degrees`.
pub fn tilt_from_pointer(pointer: Point, bounds: Rect, max_degrees: f64) -> TiltTransform {
    let relative_x = (pointer.x - bounds.x0) / bounds.width();
    let relative_y = (pointer.y - bounds.y0) / bounds.height();

    TiltTransform {
        rotate_x: (relative_y - 0.5) * max_degrees,
        rotate_y: (relative_x - 0.5) * -max_degrees,
        scale: ACTIVE_SCALE,
        active: true,
    }
}

/// Center-offset tilt: the pointer offset from the box center, normalized by
/// the half-extent. Same sign convention as [`tilt_from_pointer`], but an
/// in-bounds pointer reaches the full `max_degrees` at the edges.
pub fn tilt_from_center_offset(pointer: Point, bounds: Rect, max_degrees: f64) -> TiltTransform {
    let center_x = bounds.width() / 2.0;
    let center_y = bounds.height() / 2.0;
    let x = pointer.x - bounds.x0;
    let y = pointer.y - bounds.y0;

    TiltTransform {
        rotate_x: ((y - center_y) / center_y) * max_degrees,
        rotate_y: ((x - center_x) / center_x) * -max_degrees,
        scale: 1.0,
        active: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/tilt.rs"]
mod tests;
