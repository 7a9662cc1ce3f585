use super::*;
use crate::foundation::core::bounds_ltwh;

#[test]
fn parses_common_positions() {
    assert_eq!(
        "center center".parse::<TriggerPosition>().unwrap(),
        TriggerPosition::CENTER_CENTER
    );
    assert_eq!(
        "bottom 80%".parse::<TriggerPosition>().unwrap(),
        TriggerPosition::Edges {
            trigger: Edge::Bottom,
            viewport: Edge::Percent(80.0)
        }
    );
    assert_eq!(
        "+=800 center".parse::<TriggerPosition>().unwrap(),
        TriggerPosition::Relative {
            delta_px: 800.0,
            viewport: Edge::Center
        }
    );
    assert_eq!(
        "top".parse::<TriggerPosition>().unwrap(),
        TriggerPosition::Edges {
            trigger: Edge::Top,
            viewport: Edge::Top
        }
    );
}

#[test]
fn rejects_malformed_positions() {
    for bad in ["", "middle center", "top center bottom", "+=50% center", "12qq top"] {
        assert!(bad.parse::<TriggerPosition>().is_err(), "{bad}");
    }
}

#[test]
fn resolves_against_trigger_and_viewport() {
    let trigger = bounds_ltwh(0.0, 1000.0, 1280.0, 800.0);
    let start = TriggerPosition::CENTER_CENTER
        .resolve(trigger, 800.0, None)
        .unwrap();
    // trigger center 1400 meets viewport center 400
    assert_eq!(start, 1000.0);

    let end = "bottom center"
        .parse::<TriggerPosition>()
        .unwrap()
        .resolve(trigger, 800.0, Some(start))
        .unwrap();
    assert_eq!(end, 1400.0);

    let rel = "+=800 center".parse::<TriggerPosition>().unwrap();
    assert_eq!(rel.resolve(trigger, 800.0, Some(start)).unwrap(), 1800.0);
    assert!(rel.resolve(trigger, 800.0, None).is_err());
}

#[test]
fn serde_uses_the_string_form() {
    let p: TriggerPosition = serde_json::from_str("\"+=800 center\"").unwrap();
    assert_eq!(serde_json::to_string(&p).unwrap(), "\"+=800 center\"");
    assert!(serde_json::from_str::<TriggerPosition>("\"nowhere\"").is_err());
}
