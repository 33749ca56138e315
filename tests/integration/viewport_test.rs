//! Integration tests for the image viewport.

mod helpers;

use std::sync::Arc;

use proptest::prelude::*;

use cloudbox_view::viewport::{MAX_ZOOM, MIN_ZOOM, Point, ViewportState, ViewportTransform};

#[derive(Debug, Clone)]
enum Event {
    Wheel(bool),
    ZoomIn,
    ZoomOut,
    Rotate,
    Reset,
    Click,
    Down(f64, f64),
    Move(f64, f64),
    Up,
    Leave,
}

fn event() -> impl Strategy<Value = Event> {
    let coord = -2000.0..2000.0f64;
    prop_oneof![
        any::<bool>().prop_map(Event::Wheel),
        Just(Event::ZoomIn),
        Just(Event::ZoomOut),
        Just(Event::Rotate),
        Just(Event::Reset),
        Just(Event::Click),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Event::Down(x, y)),
        (coord.clone(), coord).prop_map(|(x, y)| Event::Move(x, y)),
        Just(Event::Up),
        Just(Event::Leave),
    ]
}

fn dispatch(transform: &mut ViewportTransform, event: &Event) {
    match *event {
        Event::Wheel(true) => {
            transform.on_wheel(-120.0, Some(Point::new(13.0, -7.0)));
        }
        Event::Wheel(false) => {
            transform.on_wheel(120.0, None);
        }
        Event::ZoomIn => {
            transform.zoom_in();
        }
        Event::ZoomOut => {
            transform.zoom_out();
        }
        Event::Rotate => {
            transform.rotate();
        }
        Event::Reset => transform.reset(),
        Event::Click => transform.on_click(),
        Event::Down(x, y) => transform.on_pointer_down(Some(Point::new(x, y))),
        Event::Move(x, y) => transform.on_pointer_move(Some(Point::new(x, y))),
        Event::Up => transform.on_pointer_up(),
        Event::Leave => transform.on_pointer_leave(),
    }
}

#[test]
fn test_wheel_zoom_scenario() {
    let mut transform = ViewportTransform::new();
    assert_eq!(*transform.state(), ViewportState::IDENTITY);

    transform.on_wheel(-1.0, Some(Point::new(40.0, 0.0)));
    assert_eq!(transform.zoom_percent(), 125);
    assert!((transform.pan().x - (-10.0)).abs() < 1e-9);
    assert_eq!(transform.pan().y, 0.0);
}

#[test]
fn test_full_drag_gesture() {
    let capture = Arc::new(helpers::RecordingCapture::default());
    let mut transform = ViewportTransform::with_capture(capture.clone());

    transform.on_pointer_down(Some(Point::new(0.0, 0.0)));
    assert!(!transform.state().is_dragging);
    assert_eq!(capture.acquired(), 0);

    transform.on_click();
    transform.on_pointer_down(Some(Point::new(100.0, 100.0)));
    assert!(transform.state().is_dragging);
    assert_eq!(capture.acquired(), 1);

    // Moves outside the image still pan.
    transform.on_pointer_move(Some(Point::new(-400.0, 900.0)));
    transform.on_pointer_move(Some(Point::new(130.0, 90.0)));
    assert_eq!(transform.pan(), Point::new(30.0, -10.0));

    transform.on_pointer_up();
    assert_eq!(capture.released(), 1);
    assert!(!transform.state().is_dragging);
    assert!(transform.state().drag_mode_enabled);

    // The click that ends the press/release pair does not leave drag mode.
    transform.on_click();
    assert!(transform.state().drag_mode_enabled);

    transform.reset();
    assert!(!transform.state().drag_mode_enabled);
    assert!(capture.balanced());
}

#[test]
fn test_rotation_cycle() {
    let mut transform = ViewportTransform::new();
    let seen: Vec<u16> = (0..5)
        .map(|_| {
            transform.rotate();
            transform.rotation_degrees()
        })
        .collect();
    assert_eq!(seen, vec![90, 180, 270, 0, 90]);
}

#[test]
fn test_zoom_limits() {
    let mut transform = ViewportTransform::new();
    for _ in 0..40 {
        transform.zoom_in();
    }
    assert_eq!(transform.zoom_percent(), MAX_ZOOM);
    for _ in 0..40 {
        transform.on_wheel(3.0, Some(Point::new(1.0, 1.0)));
    }
    assert_eq!(transform.zoom_percent(), MIN_ZOOM);
}

proptest! {
    #[test]
    fn prop_state_stays_in_bounds(events in prop::collection::vec(event(), 0..200)) {
        let mut transform = ViewportTransform::new();
        for event in &events {
            dispatch(&mut transform, event);
            let state = transform.state();
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&state.zoom_percent));
            prop_assert!([0, 90, 180, 270].contains(&state.rotation_degrees));
            prop_assert_eq!(state.is_dragging, transform.is_capturing());
            prop_assert!(!state.is_dragging || state.drag_mode_enabled);
        }
    }

    #[test]
    fn prop_capture_always_released(events in prop::collection::vec(event(), 0..100)) {
        let capture = Arc::new(helpers::RecordingCapture::default());
        {
            let mut transform = ViewportTransform::with_capture(capture.clone());
            for event in &events {
                dispatch(&mut transform, event);
            }
        }
        prop_assert!(capture.balanced());
        prop_assert_eq!(capture.acquired(), capture.released());
    }

    #[test]
    fn prop_wheel_keeps_cursor_anchored(
        cursor_x in -800.0..800.0f64,
        cursor_y in -800.0..800.0f64,
        pan_x in -300.0..300.0f64,
        pan_y in -300.0..300.0f64,
        turns in 0u8..4,
        notches in prop::collection::vec(any::<bool>(), 1..60),
    ) {
        let mut transform = ViewportTransform::new();
        transform.on_click();
        transform.on_pointer_down(Some(Point::ORIGIN));
        transform.on_pointer_move(Some(Point::new(pan_x, pan_y)));
        transform.on_pointer_up();
        for _ in 0..turns {
            transform.rotate();
        }

        let cursor = Point::new(cursor_x, cursor_y);
        let anchored = transform.image_point_at(cursor);
        for zoom_in in notches {
            let delta = if zoom_in { -1.0 } else { 1.0 };
            transform.on_wheel_at(delta, cursor);
            let drawn = transform.screen_point_of(anchored);
            prop_assert!((drawn.x - cursor.x).abs() < 1e-6);
            prop_assert!((drawn.y - cursor.y).abs() < 1e-6);
        }
    }
}
