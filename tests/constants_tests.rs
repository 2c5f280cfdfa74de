// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(GRID_CELL_SIZE > 0.0);
    assert!(PARTICLE_SIZE_MIN > 0.0 && PARTICLE_SIZE_SPAN > 0.0);

    // Fractions per tick
    assert!(CURSOR_SMOOTHING > 0.0 && CURSOR_SMOOTHING <= 1.0);
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(SPRING_K > 0.0 && SPRING_K < 1.0);

    assert!(STATIC_PROBABILITY >= 0.0 && STATIC_PROBABILITY <= 1.0);
    assert!(STATIC_MAX_BOOST > 0.0 && STATIC_MAX_BOOST <= 255.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_never_goes_transparent_or_negative() {
    assert!(PULSE_ALPHA_BASE - PULSE_ALPHA_SPAN > 0.0);
    assert!(PULSE_ALPHA_BASE + PULSE_ALPHA_SPAN <= 1.0);
    assert!(PARTICLE_SIZE_MIN - PULSE_RADIUS_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn links_reach_grid_neighbours_but_not_beyond() {
    // axis and diagonal neighbours on a resting grid
    assert!(LINK_RADIUS > GRID_CELL_SIZE * std::f32::consts::SQRT_2);
    // two cells away stays unlinked
    assert!(LINK_RADIUS < GRID_CELL_SIZE * 2.0);
    assert!(LINK_ALPHA_MAX > 0.0 && LINK_ALPHA_MAX <= 1.0);
    assert!(REPEL_RADIUS > LINK_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bar_constants_fit_the_canvas() {
    assert!(BAR_COUNT > 0);
    assert!(BAR_HEIGHT_FRACTION > 0.0 && BAR_HEIGHT_FRACTION <= 1.0);
    assert!(BAR_ALPHA_BASE + BAR_ALPHA_SPAN <= 1.0 + f32::EPSILON);
    // idle ripple stays quieter than any real signal could drive it
    assert!(IDLE_LEVEL_BASE > IDLE_LEVEL_SWING);
    assert!(IDLE_LEVEL_BASE + IDLE_LEVEL_SWING < BAR_HEIGHT_FRACTION);
    assert!(SCANLINE_THICKNESS < SCANLINE_PERIOD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glitch_restores_before_next_roll() {
    assert!(GLITCH_HOLD_MS > 0);
    assert!(GLITCH_HOLD_MS < GLITCH_INTERVAL_MS);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        BG_CANVAS_ID,
        TIMECODE_ID,
        VOICE_WIDGET_ID,
        VOICE_TOGGLE_ID,
        VOICE_PANEL_ID,
        VOICE_PANEL_CLOSE_ID,
        VOICE_STATUS_TEXT_ID,
        VOICE_MODE_ID,
        VOICE_CANVAS_ID,
        VOICE_TRANSCRIPT_ID,
        VOICE_MUTE_ID,
        VOICE_CALL_ID,
        VOICE_CALL_ICON_ID,
        VOICE_END_ID,
        ASCII_PORTRAIT_ID,
        ASCII_COORDS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
