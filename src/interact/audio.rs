use crate::{
    effect::{Effect, MediaCommand},
    foundation::core::ElementRef,
};

/// Number of bars in the audio indicator.
pub const INDICATOR_BARS: u32 = 4;

/// Animation delay of indicator bar `bar` (1-based), in seconds.
pub fn bar_delay_secs(bar: u32) -> f64 {
    f64::from(bar) * 0.1
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AudioState {
    pub playing: bool,
    pub indicator_active: bool,
}

/// Ambient audio toggle in the navigation bar. Playback and the indicator
/// always flip together.
#[derive(Debug)]
pub struct AudioIndicator {
    audio: ElementRef,
    indicator: ElementRef,
    state: AudioState,
}

impl AudioIndicator {
    pub fn new(audio: impl Into<ElementRef>, indicator: impl Into<ElementRef>) -> Self {
        Self {
            audio: audio.into(),
            indicator: indicator.into(),
            state: AudioState::default(),
        }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn toggle(&mut self) -> Vec<Effect> {
        self.state = AudioState {
            playing: !self.state.playing,
            indicator_active: !self.state.indicator_active,
        };
        tracing::debug!(playing = self.state.playing, "audio toggled");

        let command = if self.state.playing {
            MediaCommand::Play
        } else {
            MediaCommand::Pause
        };
        vec![
            Effect::Media {
                target: self.audio.clone(),
                command,
            },
            Effect::Class {
                target: self.indicator.clone(),
                class: "active".to_string(),
                enabled: self.state.indicator_active,
            },
        ]
    }
}

impl Default for AudioIndicator {
    fn default() -> Self {
        Self::new("#ambient-audio", ".indicator-line")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/audio.rs"]
mod tests;
