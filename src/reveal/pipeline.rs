//! Scroll-linked section reveals.
//!
//! Each [`RevealSpec`] binds a trigger element's scroll range to one or more
//! property interpolations and an optional pin. The pipeline owns no state
//! machine beyond the smoothed progress used for scrubbing.

use crate::{
    animation::{
        ease::Ease,
        tween::{ClipPolygon, Corners, PropValue, Props, Tween, check_interpolable, lerp_props},
    },
    effect::Effect,
    foundation::{
        core::{ElementRef, Rect, is_degenerate},
        error::{ChoreoError, ChoreoResult, Skip},
    },
    reveal::trigger::{Edge, TriggerPosition},
};

/// How displayed progress follows scroll progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "ScrubRepr", into = "ScrubRepr")]
pub enum Scrub {
    /// Not scroll-linked: jumps to 0 or 1 on crossing the start line.
    Off,
    /// Follows scroll exactly.
    #[default]
    Instant,
    /// Catches up with scroll over roughly this many seconds.
    Smoothed(f64),
}

#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ScrubRepr {
    Flag(bool),
    Secs(f64),
}

impl From<ScrubRepr> for Scrub {
    fn from(r: ScrubRepr) -> Self {
        match r {
            ScrubRepr::Flag(false) => Self::Off,
            ScrubRepr::Flag(true) => Self::Instant,
            ScrubRepr::Secs(s) if s > 0.0 => Self::Smoothed(s),
            ScrubRepr::Secs(_) => Self::Instant,
        }
    }
}

impl From<Scrub> for ScrubRepr {
    fn from(s: Scrub) -> Self {
        match s {
            Scrub::Off => Self::Flag(false),
            Scrub::Instant => Self::Flag(true),
            Scrub::Smoothed(secs) => Self::Secs(secs),
        }
    }
}

impl Scrub {
    /// Move `displayed` toward `target` after `dt_secs` of wall time.
    pub fn follow(self, displayed: f64, target: f64, dt_secs: f64) -> f64 {
        match self {
            Self::Off | Self::Instant => target,
            Self::Smoothed(secs) if secs.is_nan() || secs <= 0.0 => target,
            Self::Smoothed(secs) => {
                let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
                let alpha = 1.0 - (-dt / secs).exp();
                displayed + (target - displayed) * alpha
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTween {
    pub target: ElementRef,
    pub from: Props,
    pub to: Props,
    #[serde(default)]
    pub ease: Ease,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSpec {
    pub name: String,
    pub trigger: ElementRef,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    #[serde(default)]
    pub scrub: Scrub,
    #[serde(default)]
    pub pin: bool,
    #[serde(default)]
    pub pin_spacing: bool,
    pub tweens: Vec<RevealTween>,
}

impl RevealSpec {
    pub fn validate(&self) -> ChoreoResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChoreoError::validation("reveal name must be non-empty"));
        }
        if self.start.is_relative() {
            return Err(ChoreoError::validation(format!(
                "reveal '{}': start cannot be relative",
                self.name
            )));
        }
        if let Scrub::Smoothed(s) = self.scrub
            && (!s.is_finite() || s <= 0.0)
        {
            return Err(ChoreoError::validation(format!(
                "reveal '{}': scrub smoothing must be finite and > 0",
                self.name
            )));
        }
        if self.tweens.is_empty() {
            return Err(ChoreoError::validation(format!(
                "reveal '{}' has no tweens",
                self.name
            )));
        }
        for tw in &self.tweens {
            check_interpolable(&tw.from, &tw.to).map_err(|e| {
                ChoreoError::validation(format!("reveal '{}' target {}: {e}", self.name, tw.target))
            })?;
        }
        Ok(())
    }

    /// Hero frame: the full-bleed video frame folds into a skewed polygon
    /// with rounded bottom corners as it scrolls out.
    pub fn hero_frame() -> Self {
        let target = ElementRef::new("#video-frame");
        Self {
            name: "hero".to_string(),
            trigger: target.clone(),
            start: TriggerPosition::CENTER_CENTER,
            end: TriggerPosition::Edges {
                trigger: Edge::Bottom,
                viewport: Edge::Center,
            },
            scrub: Scrub::Instant,
            pin: false,
            pin_spacing: false,
            tweens: vec![RevealTween {
                target,
                from: props([
                    ("clipPath", PropValue::Polygon(ClipPolygon::full_rect())),
                    ("borderRadius", PropValue::Corners(Corners::default())),
                ]),
                to: props([
                    (
                        "clipPath",
                        PropValue::Polygon(ClipPolygon::new([
                            (14.0, 0.0),
                            (72.0, 0.0),
                            (90.0, 90.0),
                            (0.0, 100.0),
                        ])),
                    ),
                    (
                        "borderRadius",
                        PropValue::Corners(Corners::new(0.0, 0.0, 40.0, 10.0)),
                    ),
                ]),
                ease: Ease::Linear,
            }],
        }
    }

    /// About section: the masked image grows to fill the viewport while the
    /// section is pinned for 800px of scroll.
    pub fn about_clip() -> Self {
        Self {
            name: "about".to_string(),
            trigger: ElementRef::new("#clip"),
            start: TriggerPosition::CENTER_CENTER,
            end: TriggerPosition::Relative {
                delta_px: 800.0,
                viewport: Edge::Center,
            },
            scrub: Scrub::Smoothed(0.5),
            pin: true,
            pin_spacing: true,
            tweens: vec![RevealTween {
                target: ElementRef::new(".mask-clip-path"),
                from: props([
                    ("width", PropValue::Vw(30.0)),
                    ("height", PropValue::Vh(60.0)),
                    ("borderRadius", PropValue::Px(24.0)),
                ]),
                to: props([
                    ("width", PropValue::Vw(100.0)),
                    ("height", PropValue::Vh(100.0)),
                    ("borderRadius", PropValue::Px(0.0)),
                ]),
                ease: Ease::Linear,
            }],
        }
    }
}

fn props<const N: usize>(entries: [(&str, PropValue); N]) -> Props {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Layout of trigger elements, in document coordinates.
pub trait TriggerLayout {
    fn trigger_bounds(&self, trigger: &ElementRef) -> Option<Rect>;
}

/// One section's output for one scroll sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealFrame {
    pub name: String,
    pub trigger: ElementRef,
    /// Displayed (possibly smoothed) progress in `[0, 1]`.
    pub progress: f64,
    pub pinned: bool,
    pub pin_changed: bool,
    /// Progress or pin state moved since the previous sample.
    pub changed: bool,
    /// Space reserved after the pinned element so later content does not jump.
    pub pin_spacer_px: f64,
    pub props: Vec<(ElementRef, Props)>,
}

impl RevealFrame {
    pub fn effects(&self) -> Vec<Effect> {
        let mut out: Vec<Effect> = self
            .props
            .iter()
            .map(|(target, props)| {
                Effect::Animate(Tween {
                    props: props.clone(),
                    ..Tween::set(target.clone())
                })
            })
            .collect();
        if self.pin_changed {
            out.push(Effect::Class {
                target: self.trigger.clone(),
                class: "pinned".to_string(),
                enabled: self.pinned,
            });
        }
        out
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct SectionState {
    displayed: f64,
    pinned: bool,
}

#[derive(Debug, Default)]
pub struct RevealPipeline {
    specs: Vec<RevealSpec>,
    sections: Vec<SectionState>,
}

impl RevealPipeline {
    pub fn new(specs: Vec<RevealSpec>) -> ChoreoResult<Self> {
        for spec in &specs {
            spec.validate()?;
        }
        let sections = vec![SectionState::default(); specs.len()];
        Ok(Self { specs, sections })
    }

    pub fn specs(&self) -> &[RevealSpec] {
        &self.specs
    }

    /// Evaluate every section for one scroll sample. Sections whose trigger
    /// is not laid out are skipped.
    pub fn update(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
        layout: &dyn TriggerLayout,
        dt_secs: f64,
    ) -> Vec<RevealFrame> {
        let mut frames = Vec::with_capacity(self.specs.len());
        for (spec, section) in self.specs.iter().zip(self.sections.iter_mut()) {
            match eval_section(spec, section, scroll_offset, viewport_height, layout, dt_secs) {
                Ok(frame) => frames.push(frame),
                Err(skip) => tracing::trace!(reveal = %spec.name, ?skip, "reveal skipped"),
            }
        }
        frames
    }
}

fn eval_section(
    spec: &RevealSpec,
    section: &mut SectionState,
    scroll_offset: f64,
    viewport_height: f64,
    layout: &dyn TriggerLayout,
    dt_secs: f64,
) -> Result<RevealFrame, Skip> {
    let bounds = layout
        .trigger_bounds(&spec.trigger)
        .ok_or(Skip::MissingElement)?;
    if is_degenerate(bounds) {
        return Err(Skip::DegenerateGeometry);
    }
    // Validation rejects relative starts, so resolution cannot fail here.
    let start = spec
        .start
        .resolve(bounds, viewport_height, None)
        .map_err(|_| Skip::DegenerateGeometry)?;
    let end = spec
        .end
        .resolve(bounds, viewport_height, Some(start))
        .map_err(|_| Skip::DegenerateGeometry)?;

    let raw = scroll_progress(scroll_offset, start, end);
    let target = match spec.scrub {
        Scrub::Off => {
            if scroll_offset >= start {
                1.0
            } else {
                0.0
            }
        }
        Scrub::Instant | Scrub::Smoothed(_) => raw,
    };
    let prev_displayed = section.displayed;
    section.displayed = spec.scrub.follow(prev_displayed, target, dt_secs).clamp(0.0, 1.0);

    let pinned = spec.pin && scroll_offset >= start && scroll_offset <= end;
    let pin_changed = pinned != section.pinned;
    if pin_changed {
        tracing::debug!(reveal = %spec.name, pinned, "reveal pin changed");
    }
    section.pinned = pinned;

    let pin_spacer_px = if spec.pin && spec.pin_spacing {
        (end - start).max(0.0)
    } else {
        0.0
    };

    let props = spec
        .tweens
        .iter()
        .map(|tw| {
            let t = tw.ease.apply(section.displayed);
            (tw.target.clone(), lerp_props(&tw.from, &tw.to, t))
        })
        .collect();

    Ok(RevealFrame {
        name: spec.name.clone(),
        trigger: spec.trigger.clone(),
        progress: section.displayed,
        pinned,
        pin_changed,
        changed: pin_changed || (section.displayed - prev_displayed).abs() > 1e-9,
        pin_spacer_px,
        props,
    })
}

/// Linear progress of `offset` through `[start, end]`, clamped to `[0, 1]`.
/// An empty or inverted range acts as a step at `start`.
pub fn scroll_progress(offset: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if offset >= start { 1.0 } else { 0.0 };
    }
    ((offset - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/pipeline.rs"]
mod tests;
