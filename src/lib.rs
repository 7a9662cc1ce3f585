//! Choreo is the interactive choreography layer of a media-heavy landing page.
//!
//! It turns discrete, high-frequency input (scroll samples, pointer moves,
//! media-ready callbacks, clicks, frame ticks) into a stream of [`Effect`]s
//! for an external animation runtime to apply. Nothing here touches the DOM.
//!
//! # Components
//!
//! - **Geometry**: pure pointer-to-tilt functions ([`tilt_from_pointer`],
//!   [`tilt_from_center_offset`]).
//! - **Tilt**: one [`TiltController`] per interactive surface.
//! - **Scroll visibility**: the shared [`ScrollVisibilityController`] that
//!   hides the navigation bar on scroll-down and brings it back on scroll-up.
//! - **Media cascade**: the click-to-advance video state machine
//!   ([`CascadeState::step`], [`CascadeController`]).
//! - **Reveals**: scroll-linked property interpolation and pinning
//!   ([`RevealPipeline`]).
//!
//! [`Page`] wires them together behind a single [`PageEvent`] entry point.
//!
//! All handlers are synchronous and infallible; events that cannot have a
//! visible effect are dropped and logged with `tracing`. Only loading and
//! validating [`SiteConfig`] returns errors.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod effect;
mod foundation;
mod geometry;
mod interact;
mod media;
mod page;
mod reveal;

pub use animation::ease::Ease;
pub use animation::tween::{
    ClipPolygon, Corners, Lerp, PropValue, Props, Timing, Tween, TweenMode, check_interpolable,
    lerp_props,
};
pub use config::{AudioSettings, SiteConfig, SurfaceConfig};
pub use effect::{Effect, MediaCommand};
pub use foundation::core::{ElementBox, ElementRef, Point, Rect, Vec2, bounds_ltwh, is_degenerate};
pub use foundation::error::{ChoreoError, ChoreoResult, Skip};
pub use foundation::observe::{Observers, Subscription};
pub use geometry::tilt::{
    ACTIVE_SCALE, DEFAULT_MAX_DEGREES, TiltTransform, tilt_from_center_offset, tilt_from_pointer,
};
pub use interact::audio::{AudioIndicator, AudioState, INDICATOR_BARS, bar_delay_secs};
pub use interact::scroll::{
    NavChrome, NavSettings, ScrollDirection, ScrollState, ScrollVisibilityController, classify,
};
pub use interact::tilt::{BoundsPolicy, BoundsSource, TiltController, TiltMode, TiltSettings};
pub use media::cascade::{
    CascadeController, CascadeEvent, CascadeSettings, CascadeState, MediaSlot, Phase, Step,
    TransitionToken, background_slot, next_slot,
};
pub use page::{Page, PageEvent};
pub use reveal::pipeline::{
    RevealFrame, RevealPipeline, RevealSpec, RevealTween, Scrub, TriggerLayout, scroll_progress,
};
pub use reveal::trigger::{Edge, TriggerPosition};
