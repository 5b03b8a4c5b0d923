// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branchwork Layout: a parent-linked node set and its dendrogram-style tree layout.
//!
//! Branchwork Layout is the model half of a diagramming surface where users grow a tree by
//! branching from existing nodes and prune it by deleting subtrees.
//!
//! - Owns the node set of an editing session ([`Diagram`]); nodes only know their parent.
//! - Recomputes box positions and connector segments from scratch whenever the set changes
//!   ([`layout()`]), memoized per revision.
//! - Hands the result to a host drawing surface through the [`Surface`] trait.
//!
//! ## Layout rules
//!
//! - Depth decides x: each level of the tree is one column to the right of its parent.
//! - Leaves are stacked top to bottom in depth-first order, one slot each.
//! - Every internal node is vertically centered on its direct children.
//!
//! The result is deterministic for a given node set and insertion order. The engine never
//! fails: a set without a root lays out as empty, nodes cut off from the root are left out,
//! and corrupted parent links cannot make the walk loop.
//!
//! ## Not a gesture handler
//!
//! Positions are in content space. Zooming and panning the canvas happen downstream of this
//! crate and never feed back into the layout.
//!
//! ## API overview
//!
//! - [`Diagram`]: editing session; [`Diagram::add_child`], [`Diagram::delete_subtree`],
//!   [`Diagram::apply`] and the memoized [`Diagram::layout`].
//! - [`Node`] / [`NodeId`]: the node set itself.
//! - [`LayoutConfig`]: box size, spacing, and anchor.
//! - [`Layout`]: [`PositionedNode`]s and [`Connector`]s plus lookups and hit testing.
//! - [`Surface`] / [`DisplayList`]: render seam and a recording implementation;
//!   [`Diagram::paint`] draws the current layout.
//!
//! ## Example
//!
//! ```
//! use branchwork_layout::{Diagram, NodeId};
//! use kurbo::Point;
//!
//! let mut diagram = Diagram::new();
//! let root = diagram.root().unwrap();
//! let a = diagram.add_child(root).unwrap();
//! let _b = diagram.add_child(a).unwrap();
//! let c = diagram.add_child(root).unwrap();
//!
//! let layout = diagram.layout();
//! // Two leaves stacked, the root centered between its children.
//! assert_eq!(layout.connectors().len(), 3);
//! let root_y = layout.get(root).unwrap().y();
//! let mean = (layout.get(a).unwrap().y() + layout.get(c).unwrap().y()) / 2.0;
//! assert_eq!(root_y, mean);
//!
//! // Deleting the root prunes everything below it but keeps the root.
//! diagram.delete_subtree(root);
//! assert_eq!(diagram.nodes().len(), 1);
//! assert_eq!(diagram.layout().node_at(Point::new(130.0, 130.0)), Some(NodeId::new(1)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod diagram;
pub mod layout;
pub mod paint;
pub mod types;

pub use diagram::{Action, Diagram};
pub use layout::{
    Connector, ConnectorId, Layout, PositionedNode, connectors_for, layout, position_nodes,
};
pub use paint::{Affordance, DisplayList, Primitive, Surface};
pub use types::{CANVAS_SIZE, LayoutConfig, Node, NodeId};
