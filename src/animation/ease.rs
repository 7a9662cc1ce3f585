use std::str::FromStr;

use crate::foundation::error::ChoreoError;

/// Easing curves understood by the rendering runtime.
///
/// The `powerN` aliases follow the naming the animation runtime uses in its
/// tween descriptors (`power1.inOut` is a quadratic in-out).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    #[serde(alias = "none", alias = "linear")]
    Linear,
    #[serde(alias = "power1.in")]
    InQuad,
    #[serde(alias = "power1.out")]
    OutQuad,
    #[serde(alias = "power1.inOut")]
    InOutQuad,
    #[serde(alias = "power2.in")]
    InCubic,
    #[serde(alias = "power2.out")]
    OutCubic,
    #[serde(alias = "power2.inOut")]
    InOutCubic,
}

impl Ease {
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Name used by the runtime's tween descriptors.
    pub fn runtime_name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::InQuad => "power1.in",
            Self::OutQuad => "power1.out",
            Self::InOutQuad => "power1.inOut",
            Self::InCubic => "power2.in",
            Self::OutCubic => "power2.out",
            Self::InOutCubic => "power2.inOut",
        }
    }
}

impl FromStr for Ease {
    type Err = ChoreoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.runtime_name() == s || format!("{e:?}").eq_ignore_ascii_case(s))
            .ok_or_else(|| ChoreoError::validation(format!("unknown ease '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
