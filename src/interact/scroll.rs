//! Navigation chrome visibility driven by scroll direction.

use crate::{
    animation::{
        ease::Ease,
        tween::{PropValue, Timing, Tween},
    },
    effect::Effect,
    foundation::{
        core::ElementRef,
        observe::{Observers, Subscription},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollState {
    pub last_offset: f64,
    pub current_offset: f64,
    pub visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            current_offset: 0.0,
            visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    AtTop,
    Down,
    Up,
    Still,
}

pub fn classify(last_offset: f64, current_offset: f64) -> ScrollDirection {
    if current_offset == 0.0 {
        ScrollDirection::AtTop
    } else if current_offset > last_offset {
        ScrollDirection::Down
    } else if current_offset < last_offset {
        ScrollDirection::Up
    } else {
        ScrollDirection::Still
    }
}

/// Published state of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavChrome {
    pub visible: bool,
    /// Detached, pinned styling used anywhere but the top of the page.
    pub floating: bool,
}

impl Default for NavChrome {
    fn default() -> Self {
        Self {
            visible: true,
            floating: false,
        }
    }
}

impl NavChrome {
    fn after(self, direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::AtTop => Self {
                visible: true,
                floating: false,
            },
            ScrollDirection::Down => Self {
                visible: false,
                floating: true,
            },
            ScrollDirection::Up => Self {
                visible: true,
                floating: true,
            },
            ScrollDirection::Still => self,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NavSettings {
    pub target: ElementRef,
    pub floating_class: String,
    /// Vertical offset of the hidden bar, in px.
    pub hidden_y: f64,
    pub timing: Timing,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            target: ElementRef::new("#nav-container"),
            floating_class: "floating-nav".to_string(),
            hidden_y: -100.0,
            timing: Timing::new(0.2, Ease::Linear),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrollVisibilityController {
    settings: NavSettings,
    state: ScrollState,
    chrome: NavChrome,
    observers: Observers<NavChrome>,
}

impl ScrollVisibilityController {
    pub fn new(settings: NavSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn chrome(&self) -> NavChrome {
        self.chrome
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&NavChrome) + 'static) -> Subscription {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: Subscription) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Classify one scroll sample against the previous one and assert the
    /// resulting chrome state.
    pub fn on_scroll(&mut self, offset: f64) -> Vec<Effect> {
        if !offset.is_finite() {
            tracing::trace!(offset, "non-finite scroll sample ignored");
            return Vec::new();
        }
        let current = offset.max(0.0);
        let direction = classify(self.state.last_offset, current);

        let prev = self.chrome;
        let next = prev.after(direction);
        self.state = ScrollState {
            last_offset: current,
            current_offset: current,
            visible: next.visible,
        };

        if next == prev {
            return Vec::new();
        }
        tracing::debug!(?direction, visible = next.visible, floating = next.floating, "nav chrome changed");
        self.chrome = next;

        let mut effects = Vec::with_capacity(2);
        if next.floating != prev.floating {
            effects.push(Effect::Class {
                target: self.settings.target.clone(),
                class: self.settings.floating_class.clone(),
                enabled: next.floating,
            });
        }
        if next.visible != prev.visible {
            effects.push(self.visibility_tween(next.visible));
        }
        self.observers.notify(&next);
        effects
    }

    fn visibility_tween(&self, visible: bool) -> Effect {
        let (y, opacity) = if visible {
            (0.0, 1.0)
        } else {
            (self.settings.hidden_y, 0.0)
        };
        Effect::Animate(
            Tween::animate_to(self.settings.target.clone(), self.settings.timing)
                .prop("y", PropValue::Number(y))
                .prop("opacity", PropValue::Number(opacity)),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/scroll.rs"]
mod tests;
