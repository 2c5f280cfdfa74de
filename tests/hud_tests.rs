// Host-side tests for the page chrome: timecode and ASCII viewer readout.

#![allow(dead_code)]
mod app {
    pub mod portrait {
        include!("../src/core/portrait.rs");
    }
    pub mod timecode {
        include!("../src/core/timecode.rs");
    }
}

use app::portrait::*;
use app::timecode::format_elapsed;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn timecode_formats_hours_minutes_seconds() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(999), "00:00:00");
    assert_eq!(format_elapsed(61_000), "00:01:01");
    assert_eq!(format_elapsed(3_723_000), "01:02:03");
    assert_eq!(format_elapsed(86_399_999), "23:59:59");
}

#[test]
fn timecode_hours_do_not_wrap() {
    assert_eq!(format_elapsed(100 * 3_600_000), "100:00:00");
}

#[test]
fn coords_are_floored() {
    assert_eq!(coords_label(12.9, 0.2), "X:12 Y:0");
    assert_eq!(COORDS_RESET, coords_label(0.0, 0.0));
}

#[test]
fn readout_only_inside_viewport() {
    assert_eq!(readout(10.5, 20.7, 300.0, 200.0).as_deref(), Some("X:10 Y:20"));
    assert_eq!(readout(300.0, 200.0, 300.0, 200.0).as_deref(), Some("X:300 Y:200"));
    assert_eq!(readout(-0.5, 10.0, 300.0, 200.0), None);
    assert_eq!(readout(10.0, 201.0, 300.0, 200.0), None);
}

#[test]
fn glitch_is_rare_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    let rolls = 10_000;
    let mut hits = 0;
    for _ in 0..rolls {
        if let Some(g) = roll_glitch(&mut rng) {
            hits += 1;
            assert!(GLITCH_COLORS.contains(&g.color));
            assert!(g.dx.abs() <= GLITCH_MAX_SHIFT_PX);
            assert!(g.dy.abs() <= GLITCH_MAX_SHIFT_PX);
        }
    }
    // ~10% of rolls
    assert!((700..1300).contains(&hits), "hits {hits}");
}

#[test]
fn glitch_transform_is_css_translate() {
    let g = Glitch {
        color: GLITCH_COLORS[0],
        dx: 1.5,
        dy: -0.25,
    };
    assert_eq!(g.transform(), "translate(1.50px, -0.25px)");
}
