use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    foundation::core::{ElementRef, Point},
    foundation::error::{ChoreoError, ChoreoResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// A `clip-path: polygon(...)` whose vertices are percentages of the element box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ClipPolygon(pub Vec<Point>);

impl ClipPolygon {
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self(points.into_iter().map(Point::from).collect())
    }

    /// The unclipped box, `0% 0%, 100% 0%, 100% 100%, 0% 100%`.
    pub fn full_rect() -> Self {
        Self::new([(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
    }

    pub fn to_css(&self) -> String {
        let pts: Vec<String> = self
            .0
            .iter()
            .map(|p| format!("{}% {}%", fmt_num(p.x), fmt_num(p.y)))
            .collect();
        format!("polygon({})", pts.join(", "))
    }

    fn try_lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        if a.0.len() != b.0.len() {
            return None;
        }
        Some(Self(
            a.0.iter()
                .zip(&b.0)
                .map(|(pa, pb)| <Point as Lerp>::lerp(pa, pb, t))
                .collect(),
        ))
    }
}

/// Per-corner border radius in percent, in CSS order (tl, tr, br, bl).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl Corners {
    pub fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn to_css(&self) -> String {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .map(|v| {
            if *v == 0.0 {
                "0".to_string()
            } else {
                format!("{}%", fmt_num(*v))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl Lerp for Corners {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            top_left: <f64 as Lerp>::lerp(&a.top_left, &b.top_left, t),
            top_right: <f64 as Lerp>::lerp(&a.top_right, &b.top_right, t),
            bottom_right: <f64 as Lerp>::lerp(&a.bottom_right, &b.bottom_right, t),
            bottom_left: <f64 as Lerp>::lerp(&a.bottom_left, &b.bottom_left, t),
        }
    }
}

/// Target value of one animated property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropValue {
    Number(f64),
    Px(f64),
    Percent(f64),
    Vw(f64),
    Vh(f64),
    Text(String),
    Polygon(ClipPolygon),
    Corners(Corners),
}

impl PropValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Px(_) => "px",
            Self::Percent(_) => "percent",
            Self::Vw(_) => "vw",
            Self::Vh(_) => "vh",
            Self::Text(_) => "text",
            Self::Polygon(_) => "polygon",
            Self::Corners(_) => "corners",
        }
    }

    /// Numeric payload for scalar kinds.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Px(v) | Self::Percent(v) | Self::Vw(v) | Self::Vh(v) => {
                Some(*v)
            }
            Self::Text(_) | Self::Polygon(_) | Self::Corners(_) => None,
        }
    }

    /// Interpolate between values of the same kind; `None` when kinds differ,
    /// polygons have different vertex counts, or either side is text.
    pub fn try_lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        let f = |x: &f64, y: &f64| <f64 as Lerp>::lerp(x, y, t);
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Some(Self::Number(f(x, y))),
            (Self::Px(x), Self::Px(y)) => Some(Self::Px(f(x, y))),
            (Self::Percent(x), Self::Percent(y)) => Some(Self::Percent(f(x, y))),
            (Self::Vw(x), Self::Vw(y)) => Some(Self::Vw(f(x, y))),
            (Self::Vh(x), Self::Vh(y)) => Some(Self::Vh(f(x, y))),
            (Self::Polygon(x), Self::Polygon(y)) => ClipPolygon::try_lerp(x, y, t).map(Self::Polygon),
            (Self::Corners(x), Self::Corners(y)) => Some(Self::Corners(Corners::lerp(x, y, t))),
            _ => None,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Number(v) => fmt_num(*v),
            Self::Px(v) => format!("{}px", fmt_num(*v)),
            Self::Percent(v) => format!("{}%", fmt_num(*v)),
            Self::Vw(v) => format!("{}vw", fmt_num(*v)),
            Self::Vh(v) => format!("{}vh", fmt_num(*v)),
            Self::Text(s) => s.clone(),
            Self::Polygon(p) => p.to_css(),
            Self::Corners(c) => c.to_css(),
        }
    }
}

fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

/// Property name to target value, ordered for stable output.
pub type Props = BTreeMap<String, PropValue>;

/// Check that every property in `to` has an interpolable counterpart in `from`.
pub fn check_interpolable(from: &Props, to: &Props) -> ChoreoResult<()> {
    if from.len() != to.len() {
        return Err(ChoreoError::validation(
            "from/to property maps must name the same properties",
        ));
    }
    for (name, b) in to {
        let a = from
            .get(name)
            .ok_or_else(|| ChoreoError::validation(format!("property '{name}' has no from value")))?;
        if PropValue::try_lerp(a, b, 0.0).is_none() {
            return Err(ChoreoError::validation(format!(
                "property '{name}' cannot interpolate {} -> {}",
                a.kind(),
                b.kind()
            )));
        }
    }
    Ok(())
}

/// Interpolate two property maps. Properties that cannot interpolate hold the
/// `from` value until `t` reaches 1.
pub fn lerp_props(from: &Props, to: &Props, t: f64) -> Props {
    to.iter()
        .map(|(name, b)| {
            let v = match from.get(name) {
                Some(a) => PropValue::try_lerp(a, b, t)
                    .unwrap_or_else(|| if t >= 1.0 { b.clone() } else { a.clone() }),
                None => b.clone(),
            };
            (name.clone(), v)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    pub duration_secs: f64,
    pub ease: Ease,
}

impl Timing {
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            duration_secs,
            ease,
        }
    }

    /// Eased progress after `elapsed_secs`, in `[0, 1]`.
    pub fn progress(self, elapsed_secs: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        self.ease.apply(elapsed_secs / self.duration_secs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenMode {
    /// Apply immediately.
    Set,
    /// Animate from the current value to `props`.
    To,
    /// Animate from `props` to the current value.
    From,
}

/// One instruction for the animation runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub target: ElementRef,
    pub mode: TweenMode,
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

impl Tween {
    pub fn set(target: impl Into<ElementRef>) -> Self {
        Self {
            target: target.into(),
            mode: TweenMode::Set,
            props: Props::new(),
            timing: None,
        }
    }

    pub fn animate_to(target: impl Into<ElementRef>, timing: Timing) -> Self {
        Self {
            target: target.into(),
            mode: TweenMode::To,
            props: Props::new(),
            timing: Some(timing),
        }
    }

    pub fn animate_from(target: impl Into<ElementRef>, timing: Timing) -> Self {
        Self {
            target: target.into(),
            mode: TweenMode::From,
            props: Props::new(),
            timing: Some(timing),
        }
    }

    pub fn prop(mut self, name: &str, value: PropValue) -> Self {
        self.props.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
