//! Static, load-time page configuration.

use std::collections::BTreeSet;

use crate::{
    foundation::{
        core::ElementRef,
        error::{ChoreoError, ChoreoResult},
    },
    interact::{scroll::NavSettings, tilt::TiltSettings},
    media::cascade::CascadeSettings,
    reveal::pipeline::RevealSpec,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub audio_target: ElementRef,
    pub indicator_target: ElementRef,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            audio_target: ElementRef::new("#ambient-audio"),
            indicator_target: ElementRef::new(".indicator-line"),
        }
    }
}

/// One pointer-tilt surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceConfig {
    pub target: ElementRef,
    #[serde(default)]
    pub tilt: TiltSettings,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub media: CascadeSettings,
    pub nav: NavSettings,
    pub audio: AudioSettings,
    pub surfaces: Vec<SurfaceConfig>,
    pub reveals: Vec<RevealSpec>,
    /// Viewport height assumed until the first viewport event.
    pub viewport_height: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut surfaces: Vec<SurfaceConfig> = (1..=6)
            .map(|i| SurfaceConfig {
                target: ElementRef::new(format!("#feature-{i}")),
                tilt: TiltSettings::card(),
            })
            .collect();
        surfaces.push(SurfaceConfig {
            target: ElementRef::new("#story-img"),
            tilt: TiltSettings::story(),
        });

        Self {
            media: CascadeSettings::default(),
            nav: NavSettings::default(),
            audio: AudioSettings::default(),
            surfaces,
            reveals: vec![RevealSpec::hero_frame(), RevealSpec::about_clip()],
            viewport_height: 800.0,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config. Missing sections take their defaults.
    pub fn from_json_str(s: &str) -> ChoreoResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        self.media.validate()?;

        let nav_secs = self.nav.timing.duration_secs;
        if !nav_secs.is_finite() || nav_secs <= 0.0 {
            return Err(ChoreoError::validation("nav duration must be finite and > 0"));
        }
        if !self.nav.hidden_y.is_finite() {
            return Err(ChoreoError::validation("nav hidden_y must be finite"));
        }

        let mut targets = BTreeSet::new();
        for s in &self.surfaces {
            validate_tilt(&s.target, &s.tilt)?;
            if !targets.insert(&s.target) {
                return Err(ChoreoError::config(format!(
                    "tilt surface '{}' is declared twice",
                    s.target
                )));
            }
        }
        for media_el in [&self.media.preview_target, &self.media.grow_target] {
            if targets.contains(media_el) {
                return Err(ChoreoError::config(format!(
                    "'{media_el}' is both a tilt surface and a cascade element"
                )));
            }
        }

        let mut names = BTreeSet::new();
        for r in &self.reveals {
            r.validate()?;
            if !names.insert(r.name.as_str()) {
                return Err(ChoreoError::config(format!(
                    "reveal '{}' is declared twice",
                    r.name
                )));
            }
        }

        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(ChoreoError::validation("viewport_height must be finite and > 0"));
        }
        Ok(())
    }
}

fn validate_tilt(target: &ElementRef, t: &TiltSettings) -> ChoreoResult<()> {
    let bad = |what: &str| ChoreoError::validation(format!("surface '{target}': {what}"));
    if !t.max_degrees.is_finite() {
        return Err(bad("max_degrees must be finite"));
    }
    if !t.active_scale.is_finite() || t.active_scale <= 0.0 {
        return Err(bad("active_scale must be finite and > 0"));
    }
    if !t.perspective_px.is_finite() || t.perspective_px <= 0.0 {
        return Err(bad("perspective_px must be finite and > 0"));
    }
    if let Some(timing) = t.timing
        && (!timing.duration_secs.is_finite() || timing.duration_secs < 0.0)
    {
        return Err(bad("timing duration must be finite and >= 0"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
