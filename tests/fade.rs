use tile_mouse::pointer::{FadePolicy, FadeState};

fn policy(delay: u32, duration: u32) -> FadePolicy {
    FadePolicy {
        enabled: true,
        delay_frames: delay,
        duration_frames: duration,
    }
}

#[test]
fn opaque_until_the_delay_elapses() {
    let policy = policy(600, 60);
    let mut fade = FadeState::default();

    for _ in 0..600 {
        assert_eq!(fade.advance(&policy, false), 255);
    }
    assert!(fade.advance(&policy, false) < 255);
}

#[test]
fn midpoint_of_the_ramp_is_half_opacity() {
    let policy = policy(600, 60);
    let mut fade = FadeState::default();

    let mut opacity = 255;
    for _ in 0..630 {
        opacity = fade.advance(&policy, false);
    }
    assert_eq!(opacity, 127);
}

#[test]
fn ramp_is_strictly_decreasing_then_exactly_zero() {
    let policy = policy(600, 60);
    let mut fade = FadeState::default();

    for _ in 0..600 {
        fade.advance(&policy, false);
    }

    let mut previous = 255;
    for _ in 0..59 {
        let opacity = fade.advance(&policy, false);
        assert!(opacity < previous);
        previous = opacity;
    }
    assert_eq!(fade.advance(&policy, false), 0);
    assert_eq!(fade.advance(&policy, false), 0);
}

#[test]
fn idle_counter_clamps_at_delay_plus_duration() {
    let policy = policy(3, 4);
    let mut fade = FadeState::default();

    for _ in 0..100 {
        fade.advance(&policy, false);
    }
    assert_eq!(fade.idle_frames(), 7);
    assert_eq!(fade.advance(&policy, false), 0);
}

#[test]
fn movement_resets_the_timer() {
    let policy = policy(3, 4);
    let mut fade = FadeState::default();

    for _ in 0..10 {
        fade.advance(&policy, false);
    }
    assert_eq!(fade.advance(&policy, true), 255);
    assert_eq!(fade.idle_frames(), 0);
    assert_eq!(fade.advance(&policy, false), 255);
}

#[test]
fn disabled_policy_never_fades() {
    let policy = FadePolicy {
        enabled: false,
        delay_frames: 1,
        duration_frames: 1,
    };
    let mut fade = FadeState::default();

    for _ in 0..50 {
        assert_eq!(fade.advance(&policy, false), 255);
    }
    // The timer does not run at all while fading is off.
    assert_eq!(fade.idle_frames(), 0);
}
