use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::effect::MediaCommand;

fn page() -> Page {
    Page::new(SiteConfig::default()).unwrap()
}

fn layout(element: &str, left: f64, top: f64, width: f64, height: f64) -> PageEvent {
    PageEvent::Layout {
        element: ElementRef::new(element),
        bounds: Some(ElementBox {
            left,
            top,
            width,
            height,
        }),
    }
}

#[test]
fn pointer_on_unknown_or_unmounted_surface_is_silent() {
    let mut p = page();
    assert!(p
        .dispatch(PageEvent::PointerMove {
            surface: ElementRef::new("#nope"),
            x: 1.0,
            y: 1.0
        })
        .is_empty());
    assert!(p
        .dispatch(PageEvent::PointerMove {
            surface: ElementRef::new("#feature-1"),
            x: 1.0,
            y: 1.0
        })
        .is_empty());
    assert!(p
        .dispatch(PageEvent::PointerLeave {
            surface: ElementRef::new("#nope")
        })
        .is_empty());
}

#[test]
fn hover_after_scrolling_uses_client_coordinates() {
    let mut p = page();
    let card = ElementRef::new("#feature-1");
    p.dispatch(layout("#feature-1", 0.0, 1000.0, 100.0, 100.0));
    p.dispatch(PageEvent::Scroll { offset: 1000.0 });
    p.dispatch(PageEvent::PointerMove {
        surface: card.clone(),
        x: 50.0,
        y: 50.0,
    });
    let t = p.surface(&card).unwrap().transform();
    assert_eq!((t.rotate_x, t.rotate_y), (0.0, 0.0));

    // Cached bounds stay valid across further scrolling.
    p.dispatch(PageEvent::Scroll { offset: 950.0 });
    p.dispatch(PageEvent::PointerMove {
        surface: card.clone(),
        x: 50.0,
        y: 150.0,
    });
    let t = p.surface(&card).unwrap().transform();
    assert_eq!((t.rotate_x, t.rotate_y), (5.0, 0.0));
}

#[test]
fn layout_change_invalidates_cached_bounds() {
    let mut p = page();
    let card = ElementRef::new("#feature-1");
    p.dispatch(layout("#feature-1", 0.0, 0.0, 100.0, 100.0));
    p.dispatch(PageEvent::PointerMove {
        surface: card.clone(),
        x: 50.0,
        y: 50.0,
    });
    assert_eq!(p.surface(&card).unwrap().transform().rotate_x, 0.0);

    p.dispatch(layout("#feature-1", 0.0, 50.0, 100.0, 100.0));
    p.dispatch(PageEvent::PointerMove {
        surface: card.clone(),
        x: 50.0,
        y: 50.0,
    });
    assert_eq!(p.surface(&card).unwrap().transform().rotate_x, -5.0);

    p.dispatch(PageEvent::Layout {
        element: card.clone(),
        bounds: None,
    });
    assert!(p
        .dispatch(PageEvent::PointerMove {
            surface: card.clone(),
            x: 50.0,
            y: 50.0
        })
        .is_empty());
    p.dispatch(PageEvent::PointerLeave { surface: card.clone() });
    assert!(p.surface(&card).unwrap().transform().is_identity());
}

#[test]
fn scroll_drives_nav_and_reveals() {
    let mut p = page();
    p.dispatch(layout("#video-frame", 0.0, 0.0, 1280.0, 800.0));
    let fx = p.dispatch(PageEvent::Scroll { offset: 200.0 });
    assert!(!p.nav().chrome().visible);
    assert!(fx.iter().any(|e| e.target().as_str() == "#video-frame"));
    assert!(fx.iter().any(|e| e.target().as_str() == "#nav-container"));
}

#[test]
fn cascade_flow_through_page_events() {
    let mut p = page();
    for _ in 0..3 {
        p.dispatch(PageEvent::MediaReady);
    }
    assert!(!p.cascade().is_loading());

    let fx = p.dispatch(PageEvent::PreviewClick);
    assert!(fx.iter().any(|e| matches!(
        e,
        Effect::Media {
            command: MediaCommand::Play,
            ..
        }
    )));
    assert!(p.dispatch(PageEvent::PreviewClick).is_empty());

    p.dispatch(PageEvent::Tick { dt_secs: 0.6 });
    assert_eq!(p.cascade().current_slot().0, 1);
    p.dispatch(PageEvent::Tick { dt_secs: 0.6 });
    assert_eq!(p.cascade().current_slot().0, 2);
}

#[test]
fn nav_subscribers_are_notified_via_page() {
    let seen = Rc::new(RefCell::new(0));
    let mut p = page();
    {
        let seen = Rc::clone(&seen);
        p.subscribe_nav(move |_| *seen.borrow_mut() += 1);
    }
    p.dispatch(PageEvent::Scroll { offset: 10.0 });
    p.dispatch(PageEvent::Scroll { offset: 0.0 });
    assert_eq!(*seen.borrow(), 2);
}

#[test]
fn audio_toggle_is_routed() {
    let mut p = page();
    p.dispatch(PageEvent::AudioToggle);
    assert!(p.audio().state().playing);
}

#[test]
fn events_deserialize_from_tagged_json() {
    let ev: PageEvent = serde_json::from_str(
        r##"{"type": "layout", "element": "#clip", "bounds": {"left": 0, "top": 10, "width": 5, "height": 5}}"##,
    )
    .unwrap();
    assert!(matches!(ev, PageEvent::Layout { bounds: Some(_), .. }));
    let ev: PageEvent = serde_json::from_str(r#"{"type": "preview_click"}"#).unwrap();
    assert_eq!(ev, PageEvent::PreviewClick);
}

#[test]
fn invalid_viewport_is_ignored() {
    let mut p = page();
    assert!(p.dispatch(PageEvent::Viewport { height: 0.0 }).is_empty());
}
