// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the node set: identifiers, nodes, and layout configuration.

use core::fmt;

use kurbo::{Point, Size};

/// Identifier for a node in a diagram.
///
/// A small, copyable handle around a serial number. It displays as `node-<serial>`.
///
/// ## Semantics
///
/// - A [`Diagram`](crate::Diagram) hands out serials from a monotonically increasing counter.
/// - Removing a node never frees its serial; a later [`add_child`](crate::Diagram::add_child)
///   always produces a `NodeId` that has not been seen before in the same session.
/// - The ordering of `NodeId`s is the ordering of their serials, which is creation order
///   for ids allocated by a diagram.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Create an identifier from a raw serial.
    ///
    /// Useful for building node sets by hand (tests, imports). Uniqueness is the caller's
    /// responsibility in that case.
    pub const fn new(serial: u32) -> Self {
        Self(serial)
    }

    /// The raw serial of this identifier.
    pub const fn serial(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A diagram element: an identifier plus an optional back-reference to its parent.
///
/// Nodes only store their parent. Children are reconstructed on every layout pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Node {
    /// Identity of the node. Immutable once created.
    pub id: NodeId,
    /// Parent of the node, or `None` for the root.
    pub parent: Option<NodeId>,
}

impl Node {
    /// A parentless node.
    pub const fn root(id: NodeId) -> Self {
        Self { id, parent: None }
    }

    /// A node attached under `parent`.
    pub const fn child(id: NodeId, parent: NodeId) -> Self {
        Self {
            id,
            parent: Some(parent),
        }
    }

    /// True if this node has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Logical size of the drawing surface the diagram is rendered onto.
///
/// The presentation layer hands this to the gesture controller as the content size, so
/// zooming pivots around the middle of the canvas.
pub const CANVAS_SIZE: Size = Size::new(2000.0, 2000.0);

/// Geometry parameters for [`layout`](crate::layout()).
///
/// The [`Default`] values match the stock diagram: 120×60 boxes, 160 units between
/// columns, 80 units between stacked leaves, first box anchored at (120, 120).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Size of every node box.
    pub node_size: Size,
    /// Horizontal gap between a parent's column and its children's column.
    pub h_spacing: f64,
    /// Vertical gap between two consecutive leaf slots.
    pub v_spacing: f64,
    /// Top-left anchor of the root column and of the first leaf slot.
    pub start: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: Size::new(120.0, 60.0),
            h_spacing: 160.0,
            v_spacing: 80.0,
            start: Point::new(120.0, 120.0),
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between two adjacent depth columns.
    pub fn column_step(&self) -> f64 {
        self.node_size.width + self.h_spacing
    }

    /// Vertical distance between two adjacent leaf slots.
    pub fn row_step(&self) -> f64 {
        self.node_size.height + self.v_spacing
    }

    /// X coordinate of every node at `depth`.
    pub fn column_x(&self, depth: usize) -> f64 {
        self.start.x + depth as f64 * self.column_step()
    }

    /// Y coordinate of the leaf occupying `slot`.
    pub fn slot_y(&self, slot: usize) -> f64 {
        self.start.y + slot as f64 * self.row_step()
    }
}
