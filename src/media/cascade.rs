//! Click-to-advance video cascade.
//!
//! The state machine is a pure function ([`CascadeState::step`]) from the
//! current state and one event to the next state plus the effects to apply.
//! [`CascadeController`] owns the state for one page.

use crate::{
    animation::{
        ease::Ease,
        tween::{PropValue, Timing, Tween},
    },
    effect::{Effect, MediaCommand},
    foundation::{
        core::ElementRef,
        error::{ChoreoError, ChoreoResult, Skip},
    },
};

/// One playable media resource, numbered `1..=N`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct MediaSlot(pub u32);

/// Identifies one commit transition so late completion callbacks can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TransitionToken(pub u64);

/// Slot after `current`, wrapping from `slot_count` back to 1.
pub fn next_slot(current: MediaSlot, slot_count: u32) -> MediaSlot {
    MediaSlot(current.0 % slot_count + 1)
}

/// Slot shown by the non-interactive background loop.
///
/// The last slot is never used as the background; slot 1 stands in for it.
/// This asymmetry is deliberate display policy (pending product review).
pub fn background_slot(current: MediaSlot, slot_count: u32) -> MediaSlot {
    if current.0 == slot_count {
        MediaSlot(1)
    } else {
        current
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Transitioning {
        target: MediaSlot,
        token: TransitionToken,
        elapsed_secs: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CascadeEvent {
    MediaReady,
    Commit,
    AnimationComplete { token: TransitionToken },
    Tick { dt_secs: f64 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CascadeSettings {
    pub slot_count: u32,
    /// Source path with an `{index}` placeholder.
    pub source_template: String,
    pub transition: Timing,
    /// Preview surface; also the view that shrinks away on commit.
    pub preview_target: ElementRef,
    /// Element that grows from the preview box to fill the frame.
    pub grow_target: ElementRef,
    /// Side of the grow element's resting box, restored after each transition.
    pub preview_size_px: f64,
    pub background_target: ElementRef,
    pub loader_target: ElementRef,
}

impl Default for CascadeSettings {
    fn default() -> Self {
        Self {
            slot_count: 4,
            source_template: "videos/hero-{index}.mp4".to_string(),
            transition: Timing::new(1.0, Ease::InOutQuad),
            preview_target: ElementRef::new("#current-video"),
            grow_target: ElementRef::new("#next-video"),
            preview_size_px: 256.0,
            background_target: ElementRef::new("#background-video"),
            loader_target: ElementRef::new("#loading-screen"),
        }
    }
}

impl CascadeSettings {
    pub fn validate(&self) -> ChoreoResult<()> {
        if self.slot_count < 2 {
            return Err(ChoreoError::validation("media slot_count must be >= 2"));
        }
        let p = self.preview_size_px;
        if !p.is_finite() || p <= 0.0 {
            return Err(ChoreoError::validation(
                "media preview_size_px must be finite and > 0",
            ));
        }
        if !self.source_template.contains("{index}") {
            return Err(ChoreoError::validation(
                "media source_template must contain '{index}'",
            ));
        }
        let d = self.transition.duration_secs;
        if !d.is_finite() || d <= 0.0 {
            return Err(ChoreoError::validation(
                "media transition duration must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn source(&self, slot: MediaSlot) -> String {
        self.source_template.replace("{index}", &slot.0.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CascadeState {
    pub slot_count: u32,
    pub current: MediaSlot,
    pub has_advanced: bool,
    pub loaded_count: u32,
    pub is_loading: bool,
    pub phase: Phase,
    next_token: u64,
}

/// Result of one state transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CascadeState,
    pub effects: Vec<Effect>,
    pub skipped: Option<Skip>,
}

impl Step {
    fn unchanged(state: CascadeState, skip: Option<Skip>) -> Self {
        Self {
            state,
            effects: Vec::new(),
            skipped: skip,
        }
    }
}

impl CascadeState {
    pub fn new(slot_count: u32) -> ChoreoResult<Self> {
        if slot_count < 2 {
            return Err(ChoreoError::validation("media slot_count must be >= 2"));
        }
        Ok(Self {
            slot_count,
            current: MediaSlot(1),
            has_advanced: false,
            loaded_count: 0,
            is_loading: ready_threshold(slot_count) > 0,
            phase: Phase::Idle,
            next_token: 0,
        })
    }

    pub fn upcoming(&self) -> MediaSlot {
        next_slot(self.current, self.slot_count)
    }

    pub fn background(&self) -> MediaSlot {
        background_slot(self.current, self.slot_count)
    }

    /// Slot loaded into the grow element: the commit target while
    /// transitioning, otherwise the current slot.
    pub fn next_video(&self) -> MediaSlot {
        match self.phase {
            Phase::Transitioning { target, .. } => target,
            Phase::Idle => self.current,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn step(self, event: CascadeEvent, settings: &CascadeSettings) -> Step {
        match event {
            CascadeEvent::MediaReady => self.media_ready(settings),
            CascadeEvent::Commit => self.commit(settings),
            CascadeEvent::AnimationComplete { token } => match self.phase {
                Phase::Transitioning { token: active, .. } if active == token => {
                    self.complete(settings)
                }
                _ => Step::unchanged(self, Some(Skip::StaleCompletion)),
            },
            CascadeEvent::Tick { dt_secs } => self.tick(dt_secs, settings),
        }
    }

    fn media_ready(mut self, settings: &CascadeSettings) -> Step {
        let threshold = ready_threshold(self.slot_count);
        if self.loaded_count >= threshold {
            return Step::unchanged(self, None);
        }
        self.loaded_count += 1;
        let mut effects = Vec::new();
        if self.is_loading && self.loaded_count == threshold {
            self.is_loading = false;
            tracing::debug!(loaded = self.loaded_count, "cascade media ready");
            effects.push(Effect::Class {
                target: settings.loader_target.clone(),
                class: "hidden".to_string(),
                enabled: true,
            });
        }
        Step {
            state: self,
            effects,
            skipped: None,
        }
    }

    fn commit(mut self, settings: &CascadeSettings) -> Step {
        if self.is_transitioning() {
            return Step::unchanged(self, Some(Skip::TransitionInFlight));
        }
        let target = self.upcoming();
        let token = TransitionToken(self.next_token);
        self.next_token += 1;
        self.phase = Phase::Transitioning {
            target,
            token,
            elapsed_secs: 0.0,
        };
        tracing::debug!(from = self.current.0, to = target.0, token = token.0, "cascade commit");

        let grow = &settings.grow_target;
        let effects = vec![
            Effect::Animate(
                Tween::set(grow.clone())
                    .prop("src", PropValue::text(settings.source(target)))
                    .prop("visibility", PropValue::text("visible")),
            ),
            Effect::Animate(
                Tween::animate_to(grow.clone(), settings.transition)
                    .prop("transformOrigin", PropValue::text("center"))
                    .prop("scale", PropValue::Number(1.0))
                    .prop("width", PropValue::Percent(100.0))
                    .prop("height", PropValue::Percent(100.0)),
            ),
            Effect::Media {
                target: grow.clone(),
                command: MediaCommand::Play,
            },
            Effect::Animate(
                Tween::animate_to(settings.preview_target.clone(), settings.transition)
                    .prop("transformOrigin", PropValue::text("center"))
                    .prop("scale", PropValue::Number(0.0)),
            ),
        ];
        Step {
            state: self,
            effects,
            skipped: None,
        }
    }

    fn tick(mut self, dt_secs: f64, settings: &CascadeSettings) -> Step {
        let Phase::Transitioning {
            target,
            token,
            elapsed_secs,
        } = self.phase
        else {
            return Step::unchanged(self, None);
        };
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return Step::unchanged(self, None);
        }
        let elapsed_secs = elapsed_secs + dt_secs;
        if elapsed_secs >= settings.transition.duration_secs {
            return self.complete(settings);
        }
        self.phase = Phase::Transitioning {
            target,
            token,
            elapsed_secs,
        };
        Step::unchanged(self, None)
    }

    fn complete(mut self, settings: &CascadeSettings) -> Step {
        let Phase::Transitioning { target, .. } = self.phase else {
            return Step::unchanged(self, Some(Skip::StaleCompletion));
        };
        self.current = target;
        self.has_advanced = true;
        self.phase = Phase::Idle;
        tracing::debug!(current = self.current.0, "cascade transition complete");

        let effects = vec![
            Effect::Animate(
                Tween::set(settings.preview_target.clone())
                    .prop("src", PropValue::text(settings.source(self.upcoming())))
                    .prop("scale", PropValue::Number(1.0)),
            ),
            Effect::Animate(
                Tween::set(settings.background_target.clone())
                    .prop("src", PropValue::text(settings.source(self.background()))),
            ),
            // Back to the hidden preview box so the next commit grows from it.
            Effect::Animate(
                Tween::set(settings.grow_target.clone())
                    .prop("visibility", PropValue::text("hidden"))
                    .prop("width", PropValue::Px(settings.preview_size_px))
                    .prop("height", PropValue::Px(settings.preview_size_px)),
            ),
        ];
        Step {
            state: self,
            effects,
            skipped: None,
        }
    }
}

/// Sources that must report ready before the loader hides: N-1.
fn ready_threshold(slot_count: u32) -> u32 {
    slot_count.saturating_sub(1)
}

#[derive(Debug)]
pub struct CascadeController {
    settings: CascadeSettings,
    state: CascadeState,
}

impl CascadeController {
    pub fn new(settings: CascadeSettings) -> ChoreoResult<Self> {
        settings.validate()?;
        let state = CascadeState::new(settings.slot_count)?;
        Ok(Self { settings, state })
    }

    pub fn settings(&self) -> &CascadeSettings {
        &self.settings
    }

    pub fn state(&self) -> CascadeState {
        self.state
    }

    pub fn current_slot(&self) -> MediaSlot {
        self.state.current
    }

    pub fn upcoming_slot(&self) -> MediaSlot {
        self.state.upcoming()
    }

    pub fn next_video_slot(&self) -> MediaSlot {
        self.state.next_video()
    }

    pub fn background_slot(&self) -> MediaSlot {
        self.state.background()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Token of the running transition, if any.
    pub fn active_token(&self) -> Option<TransitionToken> {
        match self.state.phase {
            Phase::Transitioning { token, .. } => Some(token),
            Phase::Idle => None,
        }
    }

    /// Initial sources for the preview, grow and background elements.
    pub fn mount(&self) -> Vec<Effect> {
        let s = &self.settings;
        [
            (&s.preview_target, self.upcoming_slot()),
            (&s.grow_target, self.next_video_slot()),
            (&s.background_target, self.background_slot()),
        ]
        .into_iter()
        .map(|(target, slot)| {
            Effect::Animate(
                Tween::set(target.clone()).prop("src", PropValue::text(s.source(slot))),
            )
        })
        .collect()
    }

    pub fn dispatch(&mut self, event: CascadeEvent) -> Vec<Effect> {
        let step = self.state.step(event, &self.settings);
        if let Some(skip) = step.skipped {
            tracing::trace!(?event, ?skip, "cascade event skipped");
        }
        self.state = step.state;
        step.effects
    }

    pub fn on_media_ready(&mut self) -> Vec<Effect> {
        self.dispatch(CascadeEvent::MediaReady)
    }

    pub fn on_commit(&mut self) -> Vec<Effect> {
        self.dispatch(CascadeEvent::Commit)
    }

    pub fn on_animation_complete(&mut self, token: TransitionToken) -> Vec<Effect> {
        self.dispatch(CascadeEvent::AnimationComplete { token })
    }

    pub fn tick(&mut self, dt_secs: f64) -> Vec<Effect> {
        self.dispatch(CascadeEvent::Tick { dt_secs })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/cascade.rs"]
mod tests;
