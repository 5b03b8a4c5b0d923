// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram on a zoomable canvas.
//!
//! Taps arrive in viewport coordinates. They are mapped back through the canvas transform,
//! hit-tested against the layout, and turned into edits. The layout never sees the
//! transform; the transform never sees the layout.
//!
//! Run:
//! - `cargo run -p branchwork_demos --example flow_canvas`

use branchwork_gesture::{GestureEvent, ZoomPan};
use branchwork_layout::{Action, CANVAS_SIZE, Diagram, DisplayList, Primitive};
use kurbo::{Point, Vec2};

/// Tap handler: taps on a box branch from it, long presses delete its subtree.
fn tap(diagram: &mut Diagram, view: &ZoomPan, at: Point, long_press: bool) -> bool {
    let Some(content) = view.to_content(at) else {
        return false;
    };
    let Some(id) = diagram.layout().node_at(content) else {
        println!("  tap at {at:?} hit nothing");
        return false;
    };
    let action = if long_press {
        Action::DeleteSubtree(id)
    } else {
        Action::AddChild(id)
    };
    println!("  tap at {at:?} -> {action:?}");
    diagram.apply(action)
}

fn main() {
    let mut diagram = Diagram::new();
    let mut view = ZoomPan::new(CANVAS_SIZE);

    // Zoom out and shift the canvas.
    view.on_pinch(GestureEvent::Update(0.5));
    view.on_pinch(GestureEvent::End(0.5));
    view.on_pan(GestureEvent::Update(Vec2::new(-100.0, 50.0)));
    view.on_pan(GestureEvent::End(Vec2::new(-100.0, 50.0)));

    // Tap the middle of the root box, wherever it ended up on screen. The root moves as
    // it gains children, so look it up again before every tap.
    let root = diagram.root().unwrap();
    for _ in 0..2 {
        let root_center = diagram.layout().bounds(root).unwrap().center();
        let on_screen = view.to_viewport(root_center);
        assert!(tap(&mut diagram, &view, on_screen, false));
    }
    assert_eq!(diagram.len(), 3);

    // Missing everything changes nothing.
    assert!(!tap(&mut diagram, &view, Point::new(-5000.0, -5000.0), false));

    let mut list = DisplayList::default();
    diagram.paint(&mut list);
    println!("== display list ==");
    for item in &list.items {
        match item {
            Primitive::Connector { id, line } => {
                let (a, b) = (view.to_viewport(line.p0), view.to_viewport(line.p1));
                println!("  line {id}: {a:?} -> {b:?}");
            }
            Primitive::Node {
                id,
                bounds,
                affordance,
            } => {
                let r = view.transform().transform_rect_bbox(*bounds);
                println!("  box  {id}: {r:?} [{affordance:?}]");
            }
        }
    }

    // Long press on the root prunes back to a single box.
    let on_screen = view.to_viewport(diagram.layout().bounds(root).unwrap().center());
    assert!(tap(&mut diagram, &view, on_screen, true));
    assert_eq!(diagram.len(), 1);
}
