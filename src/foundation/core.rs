pub use kurbo::{Point, Rect, Vec2};

/// Reference to a rendered element, usually a DOM selector such as `#next-video`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ElementRef(pub String);

impl ElementRef {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Layout box as reported by the page, `{left, top, width, height}`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn to_rect(self) -> Rect {
        bounds_ltwh(self.left, self.top, self.width, self.height)
    }
}

/// Build a rect from the `{left, top, width, height}` shape returned by layout queries.
pub fn bounds_ltwh(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, left + width, top + height)
}

/// True when a bounding box cannot be used as a tilt reference.
pub fn is_degenerate(bounds: Rect) -> bool {
    let (w, h) = (bounds.width(), bounds.height());
    !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
