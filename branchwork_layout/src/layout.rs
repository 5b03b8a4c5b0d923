// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree layout: positions for every reachable node and parent→child connectors.
//!
//! ## Algorithm
//!
//! 1. Build a child index (`parent → ordered child ids`) in one pass over the node set.
//! 2. Walk depth-first from the root (the first node without a parent).
//!    - A node's x depends only on its depth.
//!    - A leaf takes the next free vertical slot; slots are handed out in the order leaves
//!      are first reached.
//!    - An internal node sits at the mean y of its direct children.
//! 3. Emit one connector per positioned node whose parent is positioned too.
//!
//! Nodes are emitted in post-order: every child precedes its parent.
//!
//! ## Degenerate input
//!
//! The walk never fails. Without a root the result is empty. Nodes that cannot be reached
//! from the root are left out. A node reached twice (duplicate ids or cyclic links) is not
//! descended into again; its parent averages in the position it already has, or the start
//! anchor if it has none yet.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Line, Point, Rect};

use crate::types::{LayoutConfig, Node, NodeId};

/// A node together with the top-left anchor of its box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionedNode {
    /// The positioned node.
    pub node: Node,
    /// View-space coordinates of the box's top-left corner.
    pub origin: Point,
}

impl PositionedNode {
    /// Identifier of the positioned node.
    pub fn id(&self) -> NodeId {
        self.node.id
    }

    /// Horizontal anchor.
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Vertical anchor.
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Box of this node for the given configuration.
    pub fn bounds(&self, config: &LayoutConfig) -> Rect {
        Rect::from_origin_size(self.origin, config.node_size)
    }
}

/// Identity of a connector: the pair of nodes it links.
///
/// Displays as `<parent>-<child>`, e.g. `node-1-node-2`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ConnectorId {
    /// Parent end.
    pub parent: NodeId,
    /// Child end.
    pub child: NodeId,
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.parent, self.child)
    }
}

/// A straight segment from a parent's box center to a child's box center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connector {
    /// Which nodes this connector links.
    pub id: ConnectorId,
    /// Segment geometry; `p0` is the parent end, `p1` the child end.
    pub line: Line,
}

impl Connector {
    /// Parent-end x.
    pub fn x1(&self) -> f64 {
        self.line.p0.x
    }

    /// Parent-end y.
    pub fn y1(&self) -> f64 {
        self.line.p0.y
    }

    /// Child-end x.
    pub fn x2(&self) -> f64 {
        self.line.p1.x
    }

    /// Child-end y.
    pub fn y2(&self) -> f64 {
        self.line.p1.y
    }
}

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    config: LayoutConfig,
    nodes: Vec<PositionedNode>,
    connectors: Vec<Connector>,
}

impl Layout {
    /// A layout with nothing in it.
    pub fn empty(config: LayoutConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            connectors: Vec::new(),
        }
    }

    /// Configuration the layout was computed with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positioned nodes in post-order.
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    /// Connectors, one per positioned node with a positioned parent.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// True if no node was positioned.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the positioned entry for `id`.
    pub fn get(&self, id: NodeId) -> Option<&PositionedNode> {
        self.nodes.iter().find(|p| p.node.id == id)
    }

    /// Box of `id`, if it was positioned.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(|p| p.bounds(&self.config))
    }

    /// Union of every node box, or `None` for an empty layout.
    pub fn content_bounds(&self) -> Option<Rect> {
        let mut it = self.nodes.iter().map(|p| p.bounds(&self.config));
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// The node whose box contains `pt`.
    ///
    /// `pt` is in content space; map viewport points through the inverse canvas transform
    /// first. When boxes overlap, the one drawn last wins.
    pub fn node_at(&self, pt: Point) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|p| p.bounds(&self.config).contains(pt))
            .map(PositionedNode::id)
    }
}

/// Lay out `nodes` and derive their connectors.
///
/// Deterministic for a given node set and insertion order. See the [module docs](self) for
/// the algorithm.
pub fn layout(nodes: &[Node], config: &LayoutConfig) -> Layout {
    let positioned = position_nodes(nodes, config);
    let connectors = connectors_for(&positioned, config);
    tracing::trace!(
        nodes = positioned.len(),
        connectors = connectors.len(),
        "layout pass"
    );
    Layout {
        config: *config,
        nodes: positioned,
        connectors,
    }
}

/// Compute positions for every node reachable from the root, in post-order.
pub fn position_nodes(nodes: &[Node], config: &LayoutConfig) -> Vec<PositionedNode> {
    let Some(root) = nodes.iter().find(|n| n.is_root()) else {
        return Vec::new();
    };
    let index = ChildIndex::build(nodes);
    let mut walk = Walk::new(config, nodes, &index);
    walk.run(*root);

    let dropped = walk.unreached();
    if dropped > 0 {
        tracing::debug!(dropped, "nodes unreachable from the root were left out");
    }
    walk.out
}

/// Connectors between the box centers of each positioned node and its positioned parent.
///
/// A node whose parent is missing from `positioned` gets no connector.
pub fn connectors_for(positioned: &[PositionedNode], config: &LayoutConfig) -> Vec<Connector> {
    let lookup: BTreeMap<NodeId, &PositionedNode> =
        positioned.iter().map(|p| (p.node.id, p)).collect();
    positioned
        .iter()
        .filter_map(|child| {
            let parent = lookup.get(&child.node.parent?)?;
            Some(Connector {
                id: ConnectorId {
                    parent: parent.node.id,
                    child: child.node.id,
                },
                line: Line::new(
                    parent.bounds(config).center(),
                    child.bounds(config).center(),
                ),
            })
        })
        .collect()
}

/// Adjacency rebuilt for every pass: ordered children per parent, and the first node
/// carrying each id.
#[derive(Debug, Default)]
struct ChildIndex {
    children: BTreeMap<NodeId, Vec<NodeId>>,
    first: BTreeMap<NodeId, usize>,
}

impl ChildIndex {
    fn build(nodes: &[Node]) -> Self {
        let mut index = Self::default();
        for (i, node) in nodes.iter().enumerate() {
            index.first.entry(node.id).or_insert(i);
            if let Some(parent) = node.parent {
                index.children.entry(parent).or_default().push(node.id);
            }
        }
        index
    }

    fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

struct Walk<'a> {
    config: &'a LayoutConfig,
    nodes: &'a [Node],
    index: &'a ChildIndex,
    visited: BTreeSet<NodeId>,
    next_slot: usize,
    out: Vec<PositionedNode>,
}

/// A node whose children are still being walked.
struct Frame<'a> {
    node: Node,
    depth: usize,
    children: &'a [NodeId],
    cursor: usize,
    sum: f64,
    count: usize,
}

enum Step<'a> {
    Descend(Frame<'a>),
    /// Already visited; contributes this y without being emitted again.
    Revisit(f64),
}

impl<'a> Walk<'a> {
    fn new(config: &'a LayoutConfig, nodes: &'a [Node], index: &'a ChildIndex) -> Self {
        Self {
            config,
            nodes,
            index,
            visited: BTreeSet::new(),
            next_slot: 0,
            out: Vec::with_capacity(nodes.len()),
        }
    }

    /// Depth-first walk from `root` with an explicit stack, so tree depth is bounded by
    /// memory rather than by the call stack.
    fn run(&mut self, root: Node) {
        let mut stack = Vec::new();
        match self.enter(root, 0) {
            Step::Descend(frame) => stack.push(frame),
            Step::Revisit(_) => return,
        }

        while let Some(top) = stack.last_mut() {
            if let Some(child) = self.next_child(top) {
                let depth = top.depth + 1;
                match self.enter(child, depth) {
                    Step::Descend(frame) => stack.push(frame),
                    Step::Revisit(y) => {
                        top.sum += y;
                        top.count += 1;
                    }
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let y = self.finish(&done);
            if let Some(parent) = stack.last_mut() {
                parent.sum += y;
                parent.count += 1;
            }
        }
    }

    fn enter(&mut self, node: Node, depth: usize) -> Step<'a> {
        if !self.visited.insert(node.id) {
            // Cycle guard
            let y = self
                .out
                .iter()
                .find(|p| p.node.id == node.id)
                .map_or(self.config.start.y, |p| p.origin.y);
            tracing::debug!(node = %node.id, "node reached twice; not descending again");
            return Step::Revisit(y);
        }
        let index = self.index;
        Step::Descend(Frame {
            node,
            depth,
            children: index.children_of(node.id),
            cursor: 0,
            sum: 0.0,
            count: 0,
        })
    }

    /// Advance `frame` to its next child, skipping entries that resolve to the node itself.
    fn next_child(&self, frame: &mut Frame<'a>) -> Option<Node> {
        while let Some(id) = frame.children.get(frame.cursor) {
            frame.cursor += 1;
            let Some(&i) = self.index.first.get(id) else {
                continue;
            };
            let child = self.nodes[i];
            if child.id != frame.node.id {
                return Some(child);
            }
        }
        None
    }

    /// Emit the position of a node whose children are all placed; returns its y.
    fn finish(&mut self, frame: &Frame<'a>) -> f64 {
        let y = if frame.count == 0 {
            let y = self.config.slot_y(self.next_slot);
            self.next_slot += 1;
            y
        } else {
            frame.sum / frame.count as f64
        };
        self.out.push(PositionedNode {
            node: frame.node,
            origin: Point::new(self.config.column_x(frame.depth), y),
        });
        y
    }

    /// Distinct ids in the node set that the walk never reached.
    fn unreached(&self) -> usize {
        self.index
            .first
            .keys()
            .filter(|id| !self.visited.contains(id))
            .count()
    }
}
