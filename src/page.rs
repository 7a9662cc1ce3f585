//! Page-level event dispatch.

use std::collections::BTreeMap;

use crate::{
    config::SiteConfig,
    effect::Effect,
    foundation::{
        core::{ElementBox, ElementRef, Point, Rect, Vec2},
        error::ChoreoResult,
        observe::Subscription,
    },
    interact::{
        audio::AudioIndicator,
        scroll::{NavChrome, ScrollVisibilityController},
        tilt::TiltController,
    },
    media::cascade::{CascadeController, TransitionToken},
    reveal::pipeline::{RevealPipeline, TriggerLayout},
};

/// Raw input delivered to the page, in arrival order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll {
        offset: f64,
    },
    Viewport {
        height: f64,
    },
    /// Pointer position in viewport (client) coordinates.
    PointerMove {
        surface: ElementRef,
        x: f64,
        y: f64,
    },
    PointerLeave {
        surface: ElementRef,
    },
    /// Element laid out (or removed, when `bounds` is null). Document coordinates.
    Layout {
        element: ElementRef,
        bounds: Option<ElementBox>,
    },
    MediaReady,
    PreviewClick,
    AnimationComplete {
        token: TransitionToken,
    },
    AudioToggle,
    Tick {
        dt_secs: f64,
    },
}

#[derive(Debug, Default)]
struct LayoutTable(BTreeMap<ElementRef, Rect>);

impl LayoutTable {
    fn get(&self, element: &ElementRef) -> Option<Rect> {
        self.0.get(element).copied()
    }
}

impl TriggerLayout for LayoutTable {
    fn trigger_bounds(&self, trigger: &ElementRef) -> Option<Rect> {
        self.get(trigger)
    }
}

/// Owns every controller for one page session.
#[derive(Debug)]
pub struct Page {
    nav: ScrollVisibilityController,
    audio: AudioIndicator,
    cascade: CascadeController,
    surfaces: BTreeMap<ElementRef, TiltController>,
    reveals: RevealPipeline,
    layout: LayoutTable,
    viewport_height: f64,
    scroll_offset: f64,
}

impl Page {
    pub fn new(config: SiteConfig) -> ChoreoResult<Self> {
        config.validate()?;
        let SiteConfig {
            media,
            nav,
            audio,
            surfaces,
            reveals,
            viewport_height,
        } = config;

        let surfaces = surfaces
            .into_iter()
            .map(|s| (s.target.clone(), TiltController::new(s.target, s.tilt)))
            .collect();

        Ok(Self {
            nav: ScrollVisibilityController::new(nav),
            audio: AudioIndicator::new(audio.audio_target, audio.indicator_target),
            cascade: CascadeController::new(media)?,
            surfaces,
            reveals: RevealPipeline::new(reveals)?,
            layout: LayoutTable::default(),
            viewport_height,
            scroll_offset: 0.0,
        })
    }

    /// Effects to apply once when the page first renders.
    pub fn mount(&self) -> Vec<Effect> {
        self.cascade.mount()
    }

    pub fn nav(&self) -> &ScrollVisibilityController {
        &self.nav
    }

    pub fn cascade(&self) -> &CascadeController {
        &self.cascade
    }

    pub fn audio(&self) -> &AudioIndicator {
        &self.audio
    }

    pub fn surface(&self, target: &ElementRef) -> Option<&TiltController> {
        self.surfaces.get(target)
    }

    pub fn subscribe_nav(&mut self, callback: impl FnMut(&NavChrome) + 'static) -> Subscription {
        self.nav.subscribe(callback)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::Scroll { offset } => {
                let mut effects = self.nav.on_scroll(offset);
                if offset.is_finite() {
                    self.scroll_offset = offset.max(0.0);
                    effects.extend(self.update_reveals(0.0));
                }
                effects
            }
            PageEvent::Viewport { height } => {
                if !height.is_finite() || height <= 0.0 {
                    tracing::trace!(height, "invalid viewport height ignored");
                    return Vec::new();
                }
                self.viewport_height = height;
                self.update_reveals(0.0)
            }
            PageEvent::PointerMove { surface, x, y } => {
                let Some(ctl) = self.surfaces.get_mut(&surface) else {
                    tracing::trace!(%surface, "pointer move on unknown surface");
                    return Vec::new();
                };
                // Bounds stay in document space so cached rects survive
                // scrolling; lift the client point into the same space.
                let pointer = Point::new(x, y) + Vec2::new(0.0, self.scroll_offset);
                let layout = &self.layout;
                let source = || layout.get(&surface);
                ctl.on_pointer_move(pointer, &source)
            }
            PageEvent::PointerLeave { surface } => self
                .surfaces
                .get_mut(&surface)
                .map(TiltController::on_pointer_leave)
                .unwrap_or_default(),
            PageEvent::Layout { element, bounds } => {
                match bounds {
                    Some(b) => self.layout.0.insert(element.clone(), b.to_rect()),
                    None => self.layout.0.remove(&element),
                };
                if let Some(ctl) = self.surfaces.get_mut(&element) {
                    ctl.invalidate_bounds();
                }
                self.update_reveals(0.0)
            }
            PageEvent::MediaReady => self.cascade.on_media_ready(),
            PageEvent::PreviewClick => self.cascade.on_commit(),
            PageEvent::AnimationComplete { token } => self.cascade.on_animation_complete(token),
            PageEvent::AudioToggle => self.audio.toggle(),
            PageEvent::Tick { dt_secs } => {
                let mut effects = self.cascade.tick(dt_secs);
                effects.extend(self.update_reveals(dt_secs));
                effects
            }
        }
    }

    fn update_reveals(&mut self, dt_secs: f64) -> Vec<Effect> {
        self.reveals
            .update(self.scroll_offset, self.viewport_height, &self.layout, dt_secs)
            .iter()
            .filter(|f| f.changed)
            .flat_map(|f| f.effects())
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
