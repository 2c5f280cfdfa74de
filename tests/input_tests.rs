// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use cursor::CursorState;
use glam::Vec2;
use input::*;

#[test]
fn relative_to_subtracts_rect_origin() {
    assert_eq!(relative_to(120.0, 80.0, 20.0, 30.0), (100.0, 50.0));
    assert_eq!(relative_to(5.0, 5.0, 10.0, 10.0), (-5.0, -5.0));
}

#[test]
fn client_to_canvas_scales_to_backing_pixels() {
    // 400x300 CSS box backing an 800x600 canvas
    let (x, y) = client_to_canvas(210.0, 160.0, 10.0, 10.0, 400.0, 300.0, 800, 600);
    assert!((x - 400.0).abs() < 1e-4);
    assert!((y - 300.0).abs() < 1e-4);
}

#[test]
fn client_to_canvas_is_identity_for_full_window_canvas() {
    let (x, y) = client_to_canvas(640.0, 360.0, 0.0, 0.0, 1280.0, 720.0, 1280, 720);
    assert_eq!((x, y), (640.0, 360.0));
}

#[test]
fn client_to_canvas_falls_back_on_zero_rect() {
    let (x, y) = client_to_canvas(50.0, 70.0, 10.0, 20.0, 0.0, 0.0, 800, 600);
    assert_eq!((x, y), (40.0, 50.0));
}

#[test]
fn cursor_smoothing_closes_a_fraction_of_the_gap() {
    let mut c = CursorState::default();
    c.set_target(100.0, -50.0);
    let p = c.smooth(0.1);
    assert!((p.x - 10.0).abs() < 1e-5);
    assert!((p.y + 5.0).abs() < 1e-5);
    assert_eq!(c.target, Vec2::new(100.0, -50.0));
}

#[test]
fn cursor_ignores_non_finite_targets() {
    let mut c = CursorState::new(Vec2::new(3.0, 4.0));
    c.set_target(f32::NAN, 1.0);
    c.set_target(1.0, f32::INFINITY);
    assert_eq!(c.target, Vec2::new(3.0, 4.0));
    assert_eq!(c.smooth(0.5), Vec2::new(3.0, 4.0));
}

#[test]
fn cursor_smoothing_factor_is_clamped() {
    let mut c = CursorState::default();
    c.set_target(10.0, 10.0);
    assert_eq!(c.smooth(5.0), Vec2::new(10.0, 10.0));

    let mut still = CursorState::default();
    still.set_target(10.0, 10.0);
    assert_eq!(still.smooth(-1.0), Vec2::ZERO);
}
