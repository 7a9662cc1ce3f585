use crate::{animation::tween::Tween, foundation::core::ElementRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCommand {
    Play,
    Pause,
}

/// A side effect the rendering layer must apply.
///
/// Controllers never touch elements themselves; they return effects in the
/// order they should be applied.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    Animate(Tween),
    Media {
        target: ElementRef,
        command: MediaCommand,
    },
    Class {
        target: ElementRef,
        class: String,
        enabled: bool,
    },
}

impl Effect {
    pub fn target(&self) -> &ElementRef {
        match self {
            Self::Animate(tw) => &tw.target,
            Self::Media { target, .. } | Self::Class { target, .. } => target,
        }
    }

    pub fn as_tween(&self) -> Option<&Tween> {
        match self {
            Self::Animate(tw) => Some(tw),
            Self::Media { .. } | Self::Class { .. } => None,
        }
    }
}
