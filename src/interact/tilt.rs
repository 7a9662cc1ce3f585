use crate::{
    animation::{
        ease::Ease,
        tween::{PropValue, Timing, Tween},
    },
    effect::Effect,
    foundation::{
        core::{ElementRef, Point, Rect, is_degenerate},
        error::Skip,
    },
    geometry::tilt::{
        ACTIVE_SCALE, DEFAULT_MAX_DEGREES, TiltTransform, tilt_from_center_offset,
        tilt_from_pointer,
    },
};

/// Where a surface's layout box comes from. `None` means it is not mounted.
pub trait BoundsSource {
    fn bounds(&self) -> Option<Rect>;
}

impl<F> BoundsSource for F
where
    F: Fn() -> Option<Rect>,
{
    fn bounds(&self) -> Option<Rect> {
        self()
    }
}

/// When layout is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Read once after mount or resize, reuse until invalidated.
    #[default]
    Cached,
    /// Read on every pointer sample.
    AlwaysRead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltMode {
    EdgeAnchored,
    CenterOffset,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    pub mode: TiltMode,
    pub max_degrees: f64,
    pub active_scale: f64,
    pub perspective_px: f64,
    /// Renderer-side easing; `None` applies the transform immediately.
    pub timing: Option<Timing>,
    pub bounds_policy: BoundsPolicy,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self::card()
    }
}

impl TiltSettings {
    /// Feature cards: edge-anchored, slight shrink, applied immediately.
    pub fn card() -> Self {
        Self {
            mode: TiltMode::EdgeAnchored,
            max_degrees: DEFAULT_MAX_DEGREES,
            active_scale: ACTIVE_SCALE,
            perspective_px: 700.0,
            timing: None,
            bounds_policy: BoundsPolicy::Cached,
        }
    }

    /// Story image: centred, no shrink, eased by the renderer.
    pub fn story() -> Self {
        Self {
            mode: TiltMode::CenterOffset,
            max_degrees: DEFAULT_MAX_DEGREES,
            active_scale: 1.0,
            perspective_px: 500.0,
            timing: Some(Timing::new(0.3, Ease::InOutQuad)),
            bounds_policy: BoundsPolicy::Cached,
        }
    }
}

/// Pointer tilt for one surface.
#[derive(Debug)]
pub struct TiltController {
    target: ElementRef,
    settings: TiltSettings,
    cached_bounds: Option<Rect>,
    transform: TiltTransform,
}

impl TiltController {
    pub fn new(target: impl Into<ElementRef>, settings: TiltSettings) -> Self {
        Self {
            target: target.into(),
            settings,
            cached_bounds: None,
            transform: TiltTransform::IDENTITY,
        }
    }

    pub fn target(&self) -> &ElementRef {
        &self.target
    }

    pub fn settings(&self) -> &TiltSettings {
        &self.settings
    }

    pub fn transform(&self) -> TiltTransform {
        self.transform
    }

    /// Drop cached layout; call on resize, mount and unmount.
    pub fn invalidate_bounds(&mut self) {
        self.cached_bounds = None;
    }

    pub fn on_pointer_move(&mut self, pointer: Point, source: &dyn BoundsSource) -> Vec<Effect> {
        let bounds = match self.resolve_bounds(source) {
            Ok(b) => b,
            Err(skip) => {
                tracing::trace!(surface = %self.target, ?skip, "pointer move skipped");
                return Vec::new();
            }
        };

        let mut next = match self.settings.mode {
            TiltMode::EdgeAnchored => tilt_from_pointer(pointer, bounds, self.settings.max_degrees),
            TiltMode::CenterOffset => {
                tilt_from_center_offset(pointer, bounds, self.settings.max_degrees)
            }
        };
        if self.settings.mode == TiltMode::EdgeAnchored {
            next.scale = self.settings.active_scale;
        }
        self.transform = next;
        vec![self.publish()]
    }

    /// Unconditionally returns the surface to its neutral pose.
    pub fn on_pointer_leave(&mut self) -> Vec<Effect> {
        self.transform = TiltTransform::IDENTITY;
        vec![self.publish()]
    }

    fn resolve_bounds(&mut self, source: &dyn BoundsSource) -> Result<Rect, Skip> {
        let bounds = match (self.settings.bounds_policy, self.cached_bounds) {
            (BoundsPolicy::Cached, Some(b)) => b,
            _ => {
                let b = source.bounds().ok_or(Skip::MissingElement)?;
                if self.settings.bounds_policy == BoundsPolicy::Cached {
                    self.cached_bounds = Some(b);
                }
                b
            }
        };
        if is_degenerate(bounds) {
            return Err(Skip::DegenerateGeometry);
        }
        Ok(bounds)
    }

    fn publish(&self) -> Effect {
        let t = self.transform;
        let tween = match self.settings.timing {
            Some(timing) => Tween::animate_to(self.target.clone(), timing)
                .prop("rotateX", PropValue::Number(t.rotate_x))
                .prop("rotateY", PropValue::Number(t.rotate_y))
                .prop("scale", PropValue::Number(t.scale))
                .prop(
                    "transformPerspective",
                    PropValue::Px(self.settings.perspective_px),
                ),
            None => Tween::set(self.target.clone()).prop(
                "transform",
                PropValue::text(t.to_css(self.settings.perspective_px)),
            ),
        };
        Effect::Animate(tween)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/tilt.rs"]
mod tests;
