use std::{fmt, str::FromStr};

use crate::foundation::{
    core::Rect,
    error::{ChoreoError, ChoreoResult},
};

/// A reference line inside a box (trigger element or viewport).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Px(f64),
}

impl Edge {
    /// Offset of the line from the top of a box `extent` px tall.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => extent / 2.0,
            Self::Bottom => extent,
            Self::Percent(p) => extent * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = ChoreoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let num = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| ChoreoError::validation(format!("invalid trigger edge '{s}'")))
        };
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    Ok(Self::Percent(num(p)?))
                } else if let Some(px) = s.strip_suffix("px") {
                    Ok(Self::Px(num(px)?))
                } else {
                    Ok(Self::Px(num(s)?))
                }
            }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Scroll position at which a trigger line meets a viewport line, written
/// `"<trigger edge> <viewport edge>"`, or `"+=<px> <viewport edge>"` relative
/// to the section's start.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TriggerPosition {
    Edges { trigger: Edge, viewport: Edge },
    Relative { delta_px: f64, viewport: Edge },
}

impl TriggerPosition {
    pub const CENTER_CENTER: Self = Self::Edges {
        trigger: Edge::Center,
        viewport: Edge::Center,
    };

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative { .. })
    }

    /// Resolve to an absolute scroll offset. `trigger` is in document
    /// coordinates; `start` is the resolved start for relative positions.
    pub fn resolve(&self, trigger: Rect, viewport_height: f64, start: Option<f64>) -> ChoreoResult<f64> {
        match *self {
            Self::Edges {
                trigger: t,
                viewport: v,
            } => Ok(trigger.y0 + t.resolve(trigger.height()) - v.resolve(viewport_height)),
            Self::Relative { delta_px, .. } => start
                .map(|s| s + delta_px)
                .ok_or_else(|| ChoreoError::validation("relative trigger position needs a start")),
        }
    }
}

impl FromStr for TriggerPosition {
    type Err = ChoreoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(first), second, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ChoreoError::validation(format!(
                "trigger position '{s}' must have one or two parts"
            )));
        };
        let viewport = second.map(Edge::from_str).transpose()?.unwrap_or(Edge::Top);

        if let Some(delta) = first.strip_prefix("+=") {
            let delta_px = match Edge::from_str(delta)? {
                Edge::Px(px) => px,
                _ => {
                    return Err(ChoreoError::validation(format!(
                        "relative trigger position '{s}' must be in px"
                    )));
                }
            };
            return Ok(Self::Relative { delta_px, viewport });
        }
        Ok(Self::Edges {
            trigger: Edge::from_str(first)?,
            viewport,
        })
    }
}

impl TryFrom<String> for TriggerPosition {
    type Error = ChoreoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edges { trigger, viewport } => write!(f, "{trigger} {viewport}"),
            Self::Relative { delta_px, viewport } => write!(f, "+={delta_px} {viewport}"),
        }
    }
}

impl From<TriggerPosition> for String {
    fn from(value: TriggerPosition) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/trigger.rs"]
mod tests;
