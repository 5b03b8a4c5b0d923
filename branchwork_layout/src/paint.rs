// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render seam: hand positioned boxes and connectors to a host drawing surface.
//!
//! The host decides how a box or a line looks. [`Layout::paint`] only tells it where they go,
//! in what order, and which add-child control each box carries.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use kurbo::{Line, Rect};

use crate::diagram::Diagram;
use crate::layout::{ConnectorId, Layout};
use crate::types::NodeId;

/// Which add-child control a node box shows.
///
/// Both controls append a child; they differ only in presentation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Affordance {
    /// The node is a leaf: offer to extend the chain.
    Extend,
    /// The node already has children: offer another branch.
    Branch,
}

/// A host drawing surface.
pub trait Surface {
    /// Draw the box of node `id` at `bounds`.
    fn fill_node(&mut self, id: NodeId, bounds: Rect, affordance: Affordance);

    /// Draw the straight segment `line` for connector `id`.
    fn stroke_connector(&mut self, id: ConnectorId, line: Line);
}

/// One recorded drawing command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A node box.
    Node {
        /// Node drawn.
        id: NodeId,
        /// Box in content space.
        bounds: Rect,
        /// Add-child control shown on the box.
        affordance: Affordance,
    },
    /// A connector segment.
    Connector {
        /// Connector drawn.
        id: ConnectorId,
        /// Segment in content space.
        line: Line,
    },
}

/// A [`Surface`] that records commands in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Commands in the order they were issued.
    pub items: Vec<Primitive>,
}

impl Surface for DisplayList {
    fn fill_node(&mut self, id: NodeId, bounds: Rect, affordance: Affordance) {
        self.items.push(Primitive::Node {
            id,
            bounds,
            affordance,
        });
    }

    fn stroke_connector(&mut self, id: ConnectorId, line: Line) {
        self.items.push(Primitive::Connector { id, line });
    }
}

impl Layout {
    /// Issue drawing commands: every connector first, then every node box in layout order.
    ///
    /// A node shows [`Affordance::Branch`] when it has a positioned child. Use
    /// [`Diagram::paint`] to decide from the whole node set instead.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let parents: BTreeSet<NodeId> = self.connectors().iter().map(|c| c.id.parent).collect();
        self.paint_with(surface, |id| parents.contains(&id));
    }

    /// Like [`paint`](Self::paint), with `has_children` choosing each box's affordance.
    pub fn paint_with<S, F>(&self, surface: &mut S, has_children: F)
    where
        S: Surface + ?Sized,
        F: Fn(NodeId) -> bool,
    {
        for c in self.connectors() {
            surface.stroke_connector(c.id, c.line);
        }
        for p in self.nodes() {
            let affordance = if has_children(p.id()) {
                Affordance::Branch
            } else {
                Affordance::Extend
            };
            surface.fill_node(p.id(), p.bounds(self.config()), affordance);
        }
    }
}

impl Diagram {
    /// Paint the current layout. Affordances follow [`Diagram::has_children`], so a node
    /// whose only children are unreachable still offers a branch.
    pub fn paint<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let parents: BTreeSet<NodeId> = self.nodes().iter().filter_map(|n| n.parent).collect();
        self.layout().paint_with(surface, |id| parents.contains(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;
    use crate::{LayoutConfig, layout};

    fn affordance_of(list: &DisplayList, want: u32) -> Option<Affordance> {
        list.items.iter().find_map(|p| match *p {
            Primitive::Node { id, affordance, .. } if id.serial() == want => Some(affordance),
            _ => None,
        })
    }

    #[test]
    fn connectors_are_painted_below_nodes() {
        let mut d = Diagram::new();
        let a = d.add_child(NodeId::new(1)).unwrap();
        d.add_child(a);
        let mut list = DisplayList::default();
        d.layout().paint(&mut list);

        assert_eq!(list.items.len(), 5);
        let first_node = list
            .items
            .iter()
            .position(|p| matches!(p, Primitive::Node { .. }))
            .unwrap();
        assert_eq!(first_node, 2, "both connectors precede the boxes");
    }

    #[test]
    fn leaves_extend_and_parents_branch() {
        let nodes = [
            Node::root(NodeId::new(1)),
            Node::child(NodeId::new(2), NodeId::new(1)),
        ];
        let cfg = LayoutConfig::default();
        let mut list = DisplayList::default();
        layout(&nodes, &cfg).paint(&mut list);

        assert_eq!(affordance_of(&list, 1), Some(Affordance::Branch));
        assert_eq!(affordance_of(&list, 2), Some(Affordance::Extend));
    }

    #[test]
    fn diagram_affordance_counts_unpositioned_children() {
        // 2 also lists itself as a parent; that entry is never laid out.
        let nodes = alloc::vec![
            Node::root(NodeId::new(1)),
            Node::child(NodeId::new(2), NodeId::new(1)),
            Node::child(NodeId::new(2), NodeId::new(2)),
        ];
        let mut d = Diagram::from_nodes(nodes, LayoutConfig::default());
        assert!(d.has_children(NodeId::new(2)));

        let mut from_layout = DisplayList::default();
        d.layout().paint(&mut from_layout);
        assert_eq!(affordance_of(&from_layout, 2), Some(Affordance::Extend));

        let mut from_diagram = DisplayList::default();
        d.paint(&mut from_diagram);
        assert_eq!(affordance_of(&from_diagram, 2), Some(Affordance::Branch));
        assert_eq!(affordance_of(&from_diagram, 1), Some(Affordance::Branch));
        assert_eq!(from_diagram.items.len(), from_layout.items.len());
    }

    #[test]
    fn painted_boxes_match_layout_bounds() {
        let mut d = Diagram::new();
        d.add_child(NodeId::new(1));
        let l = d.layout();
        let mut list = DisplayList::default();
        l.paint(&mut list);
        for item in &list.items {
            if let Primitive::Node { id, bounds, .. } = *item {
                assert_eq!(Some(bounds), l.bounds(id));
            }
        }
    }
}
