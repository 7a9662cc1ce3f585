use super::*;

#[test]
fn scalar_props_interpolate_within_unit() {
    let v = PropValue::try_lerp(&PropValue::Vw(40.0), &PropValue::Vw(100.0), 0.5).unwrap();
    assert_eq!(v, PropValue::Vw(70.0));
    assert!(PropValue::try_lerp(&PropValue::Vw(40.0), &PropValue::Vh(100.0), 0.5).is_none());
}

#[test]
fn polygon_interpolates_vertexwise() {
    let a = ClipPolygon::full_rect();
    let b = ClipPolygon::new([(14.0, 0.0), (72.0, 0.0), (90.0, 90.0), (0.0, 100.0)]);
    let PropValue::Polygon(mid) =
        PropValue::try_lerp(&PropValue::Polygon(a), &PropValue::Polygon(b), 0.5).unwrap()
    else {
        panic!("expected polygon");
    };
    assert_eq!(mid.0[0], Point::new(7.0, 0.0));
    assert_eq!(mid.0[2], Point::new(95.0, 95.0));
}

#[test]
fn css_rendering_matches_runtime_syntax() {
    let p = ClipPolygon::new([(14.0, 0.0), (72.0, 0.0), (90.0, 90.0), (0.0, 100.0)]);
    assert_eq!(p.to_css(), "polygon(14% 0%, 72% 0%, 90% 90%, 0% 100%)");
    assert_eq!(Corners::new(0.0, 0.0, 40.0, 10.0).to_css(), "0 0 40% 10%");
    assert_eq!(PropValue::Px(-100.0).to_css(), "-100px");
}

#[test]
fn mismatched_maps_are_rejected() {
    let mut from = Props::new();
    from.insert("width".into(), PropValue::Vw(40.0));
    let mut to = Props::new();
    to.insert("width".into(), PropValue::Vh(100.0));
    assert!(check_interpolable(&from, &to).is_err());

    to.insert("width".into(), PropValue::Vw(100.0));
    assert!(check_interpolable(&from, &to).is_ok());
    to.insert("height".into(), PropValue::Vh(100.0));
    assert!(check_interpolable(&from, &to).is_err());
}

#[test]
fn text_props_switch_at_the_end() {
    let mut from = Props::new();
    from.insert("visibility".into(), PropValue::text("hidden"));
    let mut to = Props::new();
    to.insert("visibility".into(), PropValue::text("visible"));
    assert_eq!(lerp_props(&from, &to, 0.9)["visibility"], PropValue::text("hidden"));
    assert_eq!(lerp_props(&from, &to, 1.0)["visibility"], PropValue::text("visible"));
}

#[test]
fn timing_progress_is_clamped_and_eased() {
    let t = Timing::new(2.0, Ease::Linear);
    assert_eq!(t.progress(1.0), 0.5);
    assert_eq!(t.progress(5.0), 1.0);
    assert_eq!(Timing::new(0.0, Ease::Linear).progress(0.0), 1.0);
}

#[test]
fn tween_builder_collects_props() {
    let tw = Tween::animate_to("#nav", Timing::new(0.2, Ease::Linear))
        .prop("opacity", PropValue::Number(0.0))
        .prop("y", PropValue::Number(-100.0));
    assert_eq!(tw.mode, TweenMode::To);
    assert_eq!(tw.get("y"), Some(&PropValue::Number(-100.0)));
    assert_eq!(tw.target.as_str(), "#nav");
}
