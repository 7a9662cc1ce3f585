use super::*;

#[test]
fn toggle_flips_playback_and_indicator_together() {
    let mut a = AudioIndicator::default();
    let fx = a.toggle();
    assert_eq!(
        a.state(),
        AudioState {
            playing: true,
            indicator_active: true
        }
    );
    assert!(matches!(
        fx[0],
        Effect::Media {
            command: MediaCommand::Play,
            ..
        }
    ));

    let fx = a.toggle();
    assert_eq!(a.state(), AudioState::default());
    assert!(matches!(
        fx[0],
        Effect::Media {
            command: MediaCommand::Pause,
            ..
        }
    ));
    assert!(matches!(fx[1], Effect::Class { enabled: false, .. }));
}

#[test]
fn bars_are_staggered_by_a_tenth() {
    let delays: Vec<f64> = (1..=INDICATOR_BARS).map(bar_delay_secs).collect();
    assert_eq!(delays.len(), 4);
    assert!((delays[3] - 0.4).abs() < 1e-12);
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
}
