// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow basics.
//!
//! Grow a small diagram, print its layout, then prune a branch.
//!
//! Run:
//! - `cargo run -p branchwork_demos --example flow_basics`

use branchwork_layout::{Diagram, Layout};

fn print_layout(title: &str, layout: &Layout) {
    println!("== {title} ==");
    for p in layout.nodes() {
        println!("  {:<8} at ({:>5}, {:>5})", p.id().to_string(), p.x(), p.y());
    }
    for c in layout.connectors() {
        println!(
            "  {:<16} ({}, {}) -> ({}, {})",
            c.id.to_string(),
            c.x1(),
            c.y1(),
            c.x2(),
            c.y2()
        );
    }
}

fn main() {
    let mut diagram = Diagram::new();
    let root = diagram.root().unwrap();

    // root ─┬─ a ─┬─ a1
    //       │     └─ a2
    //       └─ b
    let a = diagram.add_child(root).unwrap();
    let a1 = diagram.add_child(a).unwrap();
    let _a2 = diagram.add_child(a).unwrap();
    let b = diagram.add_child(root).unwrap();

    print_layout("initial", diagram.layout());
    let layout = diagram.layout();
    assert_eq!(layout.nodes().len(), 5);
    assert_eq!(layout.connectors().len(), 4);
    // a sits between its two leaves, the root between a and b.
    let y = |id| layout.get(id).unwrap().y();
    assert_eq!(y(a), 190.0);
    assert_eq!(y(root), (y(a) + y(b)) / 2.0);

    let removed = diagram.delete_subtree(a);
    print_layout("after deleting node-2", diagram.layout());
    assert_eq!(removed, 3);
    assert!(diagram.layout().get(a1).is_none());

    // Fresh ids keep counting up after a delete.
    let c = diagram.add_child(root).unwrap();
    println!("new child: {c}");
    assert_eq!(c.to_string(), "node-6");
}
