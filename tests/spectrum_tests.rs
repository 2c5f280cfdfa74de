// Host-side tests for the spectrum visualizer layout and channel selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spectrum {
        include!("../src/core/spectrum.rs");
    }
}

use app::color::*;
use app::constants::*;
use app::spectrum::*;

#[test]
fn bar_count_is_fixed_for_any_input_length() {
    let layout = BarLayout::new(320.0, 100.0);
    for len in [0usize, 1, 5, 31, 32, 33, 64, 100, 1024, 2000] {
        let samples: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
        let bars = layout.active_bars(&samples);
        assert_eq!(bars.len(), BAR_COUNT);
        for i in 0..BAR_COUNT {
            // must not panic for any length
            let _ = sample_for_bar(&samples, i);
        }
        assert!(bars.iter().all(|b| b.height >= BAR_MIN_HEIGHT));
    }
}

#[test]
fn long_arrays_use_integer_stride() {
    let samples: Vec<u8> = (0..1024).map(|i| (i / 4) as u8).collect();
    for i in 0..BAR_COUNT {
        assert_eq!(sample_for_bar(&samples, i), samples[i * 32]);
    }
    // 100 / 32 = stride 3
    let odd: Vec<u8> = (0..100).map(|i| i as u8).collect();
    assert_eq!(sample_for_bar(&odd, 31), 93);
}

#[test]
fn short_arrays_are_stretched() {
    let samples = [10u8, 20, 30, 40];
    assert_eq!(sample_for_bar(&samples, 0), 10);
    assert_eq!(sample_for_bar(&samples, 7), 10);
    assert_eq!(sample_for_bar(&samples, 8), 20);
    assert_eq!(sample_for_bar(&samples, 31), 40);
    assert_eq!(sample_for_bar(&[], 5), 0);
}

#[test]
fn agent_output_takes_priority_over_user_input() {
    let out = [0u8, 3, 0];
    let inp = [9u8, 9, 9];
    match select(Some(&out[..]), Some(&inp[..])) {
        Selection::Active { channel, samples } => {
            assert_eq!(channel, Channel::Agent);
            assert_eq!(samples, &out);
        }
        Selection::Idle => panic!("expected agent bars"),
    }
}

#[test]
fn silent_output_falls_back_to_input_then_idle() {
    let silent = [0u8; 16];
    let inp = [0u8, 0, 1];
    assert_eq!(
        select(Some(&silent[..]), Some(&inp[..])),
        Selection::Active {
            channel: Channel::User,
            samples: &inp
        }
    );
    assert_eq!(
        select(None, Some(&inp[..])),
        Selection::Active {
            channel: Channel::User,
            samples: &inp
        }
    );
    assert_eq!(select(Some(&silent[..]), Some(&silent[..])), Selection::Idle);
    assert_eq!(select(None, None), Selection::Idle);
    assert_eq!(select(Some(&[][..]), None), Selection::Idle);
}

#[test]
fn colors_follow_the_speaker() {
    let loud = [200u8];
    assert_eq!(select(Some(&loud[..]), None).color(), GREEN);
    assert_eq!(select(None, Some(&loud[..])).color(), CYAN);
    assert_eq!(Selection::Idle.color(), CYAN);
}

#[test]
fn bar_geometry_spans_the_width() {
    let layout = BarLayout::new(320.0, 100.0);
    assert!((layout.bar_width() - 8.0).abs() < 1e-6);
    let bars = layout.resting_bars();
    assert!((bars[1].x - 10.0).abs() < 1e-6);
    let last = bars[BAR_COUNT - 1];
    assert!(last.x + last.width <= 320.0 + 1e-3);
}

#[test]
fn active_bar_heights_scale_and_center() {
    let layout = BarLayout::new(320.0, 100.0);
    let mut samples = [0u8; 32];
    samples[0] = 255;
    samples[1] = 51;
    let bars = layout.active_bars(&samples);

    assert!((bars[0].height - 85.0).abs() < 1e-4);
    assert!((bars[0].y - 7.5).abs() < 1e-4);
    assert!((bars[0].alpha - 1.0).abs() < 1e-6);

    assert!((bars[1].height - 17.0).abs() < 1e-4);
    assert!((bars[1].alpha - (0.3 + 0.2 * 0.7)).abs() < 1e-6);

    // silence still shows a visible sliver
    assert_eq!(bars[2].height, BAR_MIN_HEIGHT);
    assert!((bars[2].y - 49.0).abs() < 1e-6);
    assert!((bars[2].alpha - BAR_ALPHA_BASE).abs() < 1e-6);
}

#[test]
fn idle_ripple_stays_low_and_moves() {
    let layout = BarLayout::new(320.0, 200.0);
    let a = layout.idle_bars(0.0);
    let b = layout.idle_bars(1.0);
    let max_h = (IDLE_LEVEL_BASE + IDLE_LEVEL_SWING) * 200.0 + 1e-4;
    for bar in a.iter().chain(b.iter()) {
        assert!(bar.height >= BAR_MIN_HEIGHT && bar.height <= max_h);
        assert_eq!(bar.alpha, IDLE_ALPHA);
    }
    assert!(a.iter().zip(b.iter()).any(|(x, y)| x.height != y.height));
    // neighbouring bars are phase shifted
    assert_ne!(a[0].height, a[5].height);
}

#[test]
fn resting_strip_is_flat() {
    let bars = BarLayout::new(256.0, 40.0).resting_bars();
    assert!(bars
        .iter()
        .all(|b| b.height == BAR_MIN_HEIGHT && b.alpha == RESTING_ALPHA && b.y == 19.0));
}

#[test]
fn scanlines_every_four_units() {
    let ys: Vec<f32> = BarLayout::new(100.0, 10.0).scanlines().collect();
    assert_eq!(ys, vec![0.0, 4.0, 8.0]);
    assert_eq!(BarLayout::new(100.0, 0.0).scanlines().count(), 0);
    assert_eq!(BarLayout::new(100.0, 64.0).scanlines().count(), 16);
}

#[test]
fn degenerate_layout_is_clamped() {
    let layout = BarLayout::new(f32::NAN, -5.0);
    assert_eq!(layout.width, 0.0);
    assert_eq!(layout.height, 0.0);
    assert_eq!(layout.bar_width(), 0.0);
    assert!(layout.active_bars(&[255]).iter().all(|b| b.height.is_finite()));
}

#[test]
fn rgba_strings_are_css_ready() {
    assert_eq!(CYAN.rgba(0.5), "rgba(0, 212, 255, 0.500)");
    assert_eq!(GREEN.rgba(2.0), "rgba(0, 255, 136, 1.000)");
    assert_eq!(BACKGROUND.rgba(f32::NAN), "rgba(10, 14, 26, 0.000)");
}
