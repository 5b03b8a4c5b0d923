// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom and pan across several gesture sessions.
//!
//! Simulates a drag, a pinch, and a combined pinch-and-drag, printing the transform after
//! each release.
//!
//! Run:
//! - `cargo run -p branchwork_demos --example zoom_pan_session`

use branchwork_gesture::{GestureEvent, HandlerState, ZoomPan};
use branchwork_layout::CANVAS_SIZE;
use kurbo::{Point, Vec2};

fn report(label: &str, view: &ZoomPan) {
    println!(
        "== {label} ==\n  scale {:.3}  offset ({:.1}, {:.1})  origin -> {:?}",
        view.scale(),
        view.offset().x,
        view.offset().y,
        view.to_viewport(Point::ZERO)
    );
}

fn main() {
    let mut view = ZoomPan::new(CANVAS_SIZE);

    // A drag streamed at display rate; only the release commits.
    for step in 1..=10 {
        view.on_pan(GestureEvent::Update(Vec2::new(step as f64 * 4.0, step as f64 * -2.0)));
    }
    view.on_pan(GestureEvent::End(Vec2::new(40.0, -20.0)));
    report("after drag", &view);
    assert_eq!(view.offset(), Vec2::new(40.0, -20.0));

    // A pinch reported as platform state transitions.
    view.pinch_state_changed(HandlerState::Began, HandlerState::Active, 1.0);
    view.on_pinch(GestureEvent::Update(1.2));
    view.on_pinch(GestureEvent::Update(1.5));
    view.pinch_state_changed(HandlerState::Active, HandlerState::End, 1.5);
    report("after pinch", &view);
    assert_eq!(view.scale(), 1.5);

    // Pinch and drag together; releasing the pinch leaves the drag live.
    view.on_pinch(GestureEvent::Update(2.0));
    view.on_pan(GestureEvent::Update(Vec2::new(-10.0, 10.0)));
    println!("  active: {:?}", view.active());
    view.on_pinch(GestureEvent::End(2.0));
    report("pinch released, drag live", &view);
    assert_eq!(view.offset(), Vec2::new(30.0, -10.0));
    view.on_pan(GestureEvent::End(Vec2::new(-10.0, 10.0)));
    report("all released", &view);
    assert_eq!(view.scale(), 3.0);
    assert!(view.active().is_empty());
}
