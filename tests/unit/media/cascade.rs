use super::*;
use crate::animation::tween::TweenMode;

fn controller() -> CascadeController {
    CascadeController::new(CascadeSettings::default()).unwrap()
}

fn commit_and_finish(c: &mut CascadeController) {
    c.on_commit();
    let token = c.active_token().unwrap();
    c.on_animation_complete(token);
}

#[test]
fn five_commits_wrap_at_n() {
    let mut c = controller();
    let mut seen = Vec::new();
    for _ in 0..5 {
        commit_and_finish(&mut c);
        seen.push(c.current_slot().0);
    }
    assert_eq!(seen, vec![2, 3, 4, 1, 2]);
    assert!(c.state().has_advanced);
}

#[test]
fn background_rule_swaps_last_slot_for_first() {
    assert_eq!(background_slot(MediaSlot(4), 4), MediaSlot(1));
    assert_eq!(background_slot(MediaSlot(2), 4), MediaSlot(2));
    assert_eq!(background_slot(MediaSlot(1), 4), MediaSlot(1));
}

#[test]
fn double_commit_advances_once() {
    let mut c = controller();
    let first = c.on_commit();
    assert_eq!(first.len(), 4);
    let second = c.on_commit();
    assert!(second.is_empty());

    let token = c.active_token().unwrap();
    c.on_animation_complete(token);
    assert_eq!(c.current_slot(), MediaSlot(2));
}

#[test]
fn index_only_moves_on_completion() {
    let mut c = controller();
    c.on_commit();
    assert_eq!(c.current_slot(), MediaSlot(1));
    assert_eq!(c.next_video_slot(), MediaSlot(2));
    assert!(!c.state().has_advanced);
}

#[test]
fn stale_completion_is_ignored() {
    let mut c = controller();
    c.on_commit();
    let old = c.active_token().unwrap();
    c.on_animation_complete(old);

    c.on_commit();
    assert!(c.on_animation_complete(old).is_empty());
    assert_eq!(c.current_slot(), MediaSlot(2));
    assert!(c.state().is_transitioning());

    let step = c
        .state()
        .step(CascadeEvent::AnimationComplete { token: old }, c.settings());
    assert_eq!(step.skipped, Some(Skip::StaleCompletion));
}

#[test]
fn loading_clears_exactly_at_n_minus_one() {
    let mut c = controller();
    assert!(c.is_loading());
    c.on_media_ready();
    c.on_media_ready();
    assert!(c.is_loading());
    let fx = c.on_media_ready();
    assert!(!c.is_loading());
    assert_eq!(c.state().loaded_count, 3);
    assert!(matches!(&fx[0], Effect::Class { class, enabled: true, .. } if class == "hidden"));

    assert!(c.on_media_ready().is_empty());
    assert_eq!(c.state().loaded_count, 3);
    assert!(!c.is_loading());
}

#[test]
fn fewer_than_two_slots_is_rejected() {
    for n in [0, 1] {
        assert!(CascadeState::new(n).is_err());
        assert!(CascadeController::new(CascadeSettings {
            slot_count: n,
            ..CascadeSettings::default()
        })
        .is_err());
    }
    let mut c = CascadeController::new(CascadeSettings {
        slot_count: 2,
        ..CascadeSettings::default()
    })
    .unwrap();
    assert!(c.is_loading());
    c.on_media_ready();
    assert!(!c.is_loading());
    commit_and_finish(&mut c);
    commit_and_finish(&mut c);
    assert_eq!(c.current_slot(), MediaSlot(1));
}

#[test]
fn ticks_complete_the_transition_regardless_of_frame_rate() {
    for dt in [1.0 / 30.0, 1.0 / 144.0, 0.25] {
        let mut c = controller();
        c.on_commit();
        let mut elapsed = 0.0;
        while c.state().is_transitioning() {
            c.tick(dt);
            elapsed += dt;
            assert!(elapsed < 2.0);
        }
        assert!(elapsed >= 1.0 - 1e-9);
        assert!(elapsed < 1.0 + dt + 1e-9);
        assert_eq!(c.current_slot(), MediaSlot(2));
    }
}

#[test]
fn bad_ticks_do_not_advance_time() {
    let mut c = controller();
    c.on_commit();
    c.tick(f64::NAN);
    c.tick(-3.0);
    c.tick(f64::INFINITY);
    assert!(c.state().is_transitioning());
}

#[test]
fn commit_effects_play_once_and_share_duration() {
    let mut c = controller();
    let fx = c.on_commit();

    let plays = fx
        .iter()
        .filter(|e| {
            matches!(
                e,
                Effect::Media {
                    command: MediaCommand::Play,
                    ..
                }
            )
        })
        .count();
    assert_eq!(plays, 1);

    let durations: Vec<f64> = fx
        .iter()
        .filter_map(Effect::as_tween)
        .filter_map(|t| t.timing)
        .map(|t| t.duration_secs)
        .collect();
    assert_eq!(durations, vec![1.0, 1.0]);

    let set = fx[0].as_tween().unwrap();
    assert_eq!(set.get("src"), Some(&PropValue::text("videos/hero-2.mp4")));
    let shrink = fx[3].as_tween().unwrap();
    assert_eq!(shrink.target.as_str(), "#current-video");
    assert_eq!(shrink.get("scale"), Some(&PropValue::Number(0.0)));
}

#[test]
fn completion_swaps_sources() {
    let mut c = controller();
    for _ in 0..2 {
        commit_and_finish(&mut c);
    }
    c.on_commit();
    let token = c.active_token().unwrap();
    let fx = c.on_animation_complete(token);
    assert_eq!(c.current_slot(), MediaSlot(4));
    assert_eq!(
        fx[0].as_tween().unwrap().get("src"),
        Some(&PropValue::text("videos/hero-1.mp4"))
    );
    assert_eq!(
        fx[1].as_tween().unwrap().get("src"),
        Some(&PropValue::text("videos/hero-1.mp4"))
    );
}

#[test]
fn every_commit_grows_next_video_from_the_preview_box() {
    let mut c = controller();
    for round in 0..3 {
        let fx = c.on_commit();
        let grow = fx[1].as_tween().unwrap();
        assert_eq!(grow.target.as_str(), "#next-video");
        assert_eq!(grow.mode, TweenMode::To);
        assert_eq!(grow.get("width"), Some(&PropValue::Percent(100.0)));

        let token = c.active_token().unwrap();
        let done = c.on_animation_complete(token);
        let reset = done
            .iter()
            .filter_map(Effect::as_tween)
            .find(|t| t.target.as_str() == "#next-video")
            .unwrap_or_else(|| panic!("no grow reset after round {round}"));
        assert_eq!(reset.mode, TweenMode::Set);
        assert_eq!(reset.get("visibility"), Some(&PropValue::text("hidden")));
        assert_eq!(reset.get("width"), Some(&PropValue::Px(256.0)));
        assert_eq!(reset.get("height"), Some(&PropValue::Px(256.0)));
    }
}

#[test]
fn tick_completion_also_resets_the_grow_element() {
    let mut c = controller();
    c.on_commit();
    let fx = c.tick(2.0);
    let last = fx.last().and_then(Effect::as_tween).unwrap();
    assert_eq!(last.target.as_str(), "#next-video");
    assert_eq!(last.get("visibility"), Some(&PropValue::text("hidden")));
}

#[test]
fn mount_assigns_initial_sources() {
    let c = controller();
    let srcs: Vec<String> = c
        .mount()
        .iter()
        .filter_map(Effect::as_tween)
        .filter_map(|t| t.get("src"))
        .map(PropValue::to_css)
        .collect();
    assert_eq!(
        srcs,
        vec![
            "videos/hero-2.mp4",
            "videos/hero-1.mp4",
            "videos/hero-1.mp4"
        ]
    );
}

#[test]
fn settings_validation() {
    assert!(CascadeController::new(CascadeSettings {
        slot_count: 0,
        ..CascadeSettings::default()
    })
    .is_err());
    assert!(CascadeSettings {
        source_template: "videos/hero.mp4".into(),
        ..CascadeSettings::default()
    }
    .validate()
    .is_err());
    assert!(CascadeSettings {
        transition: Timing::new(0.0, Ease::Linear),
        ..CascadeSettings::default()
    }
    .validate()
    .is_err());
}
