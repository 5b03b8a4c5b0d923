// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing session: owns the node set and memoizes its layout.

use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::layout::{Layout, layout};
use crate::types::{LayoutConfig, Node, NodeId};

/// An edit requested by the presentation layer, bound to a specific node.
///
/// Interaction callbacks (the add and delete controls drawn next to each box) produce these;
/// [`Diagram::apply`] executes them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    /// Append a new child under the node.
    AddChild(NodeId),
    /// Remove the node and everything below it.
    DeleteSubtree(NodeId),
}

/// The node set of one editing session.
///
/// A fresh diagram holds a single root, `node-1`. Edits go through [`add_child`](Self::add_child)
/// and [`delete_subtree`](Self::delete_subtree), neither of which can introduce a second
/// parentless node or remove the root.
///
/// Every edit that changes the set bumps [`revision`](Self::revision). [`layout`](Self::layout)
/// recomputes wholesale when the revision moved since the last call and returns the cached
/// result otherwise.
#[derive(Clone, Debug)]
pub struct Diagram {
    nodes: Vec<Node>,
    /// `None` once every serial has been handed out.
    next_serial: Option<u32>,
    revision: u64,
    config: LayoutConfig,
    cached: Option<(u64, Layout)>,
    #[cfg(test)]
    layout_passes: u32,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    /// Create a diagram holding only a root node, laid out with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a diagram holding only a root node.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            nodes: alloc::vec![Node::root(NodeId::new(1))],
            next_serial: Some(2),
            revision: 0,
            config,
            cached: None,
            #[cfg(test)]
            layout_passes: 0,
        }
    }

    /// Adopt an existing node set as is.
    ///
    /// The set may be malformed (no root, dangling or cyclic parents); layout degrades
    /// gracefully. New ids continue after the largest serial present.
    pub fn from_nodes(nodes: Vec<Node>, config: LayoutConfig) -> Self {
        let next_serial = nodes
            .iter()
            .map(|n| n.id.serial())
            .max()
            .map_or(Some(1), |s| s.checked_add(1));
        Self {
            nodes,
            next_serial,
            revision: 0,
            config,
            cached: None,
            #[cfg(test)]
            layout_passes: 0,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes in the set.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the set has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root, i.e. the first node without a parent.
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.is_root()).map(|n| n.id)
    }

    /// True if a node with `id` is in the set.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// True if any node names `id` as its parent.
    ///
    /// Leaves offer an "extend" control and internal nodes a "branch" control; both add a child.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.parent == Some(id))
    }

    /// Counter bumped by every edit that changed the node set or the configuration.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the layout configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if self.config != config {
            self.config = config;
            self.touch();
        }
    }

    /// Append a new node under `parent` and return its id.
    ///
    /// The new id has never been handed out before in this session. Returns `None`, leaving
    /// the set untouched, once the serials are exhausted. `parent` is not validated: a child
    /// of a node that is not in the set is kept but never laid out.
    pub fn add_child(&mut self, parent: NodeId) -> Option<NodeId> {
        let Some(serial) = self.next_serial else {
            tracing::debug!(%parent, "no node ids left; child not added");
            return None;
        };
        if !self.contains(parent) {
            tracing::debug!(%parent, "adding a child under a node that is not in the diagram");
        }
        let id = NodeId::new(serial);
        self.next_serial = serial.checked_add(1);
        self.nodes.push(Node::child(id, parent));
        self.touch();
        Some(id)
    }

    /// Remove `id` and all of its descendants, returning how many nodes were removed.
    ///
    /// Deleting the root removes its descendants only; the root stays. Deleting an id that is
    /// not in the set does nothing.
    pub fn delete_subtree(&mut self, id: NodeId) -> usize {
        let Some(target) = self.nodes.iter().find(|n| n.id == id).copied() else {
            return 0;
        };
        let mut doomed: BTreeSet<NodeId> = self.subtree(id).into_iter().collect();
        if target.is_root() {
            doomed.remove(&id);
        }
        if doomed.is_empty() {
            return 0;
        }

        let before = self.nodes.len();
        self.nodes.retain(|n| !doomed.contains(&n.id));
        let removed = before - self.nodes.len();
        tracing::debug!(node = %id, removed, "deleted subtree");
        self.touch();
        removed
    }

    /// Ids of `id` and its transitive descendants, breadth-first.
    ///
    /// Empty if `id` is not in the set. Each id appears once even if parent links are cyclic.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut children: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        for n in &self.nodes {
            if let Some(p) = n.parent {
                children.entry(p).or_default().push(n.id);
            }
        }

        let mut seen = BTreeSet::from([id]);
        let mut out = alloc::vec![id];
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for &c in children.get(&current).into_iter().flatten() {
                if seen.insert(c) {
                    out.push(c);
                    queue.push_back(c);
                }
            }
        }
        out
    }

    /// Execute an interaction callback. Returns true if the node set changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddChild(parent) => self.add_child(parent).is_some(),
            Action::DeleteSubtree(id) => self.delete_subtree(id) > 0,
        }
    }

    /// Current layout, recomputed only if the diagram changed since the last call.
    pub fn layout(&mut self) -> &Layout {
        let revision = self.revision;
        if !self.is_layout_current() {
            self.cached = None;
            #[cfg(test)]
            {
                self.layout_passes += 1;
            }
        }
        let (nodes, config) = (&self.nodes, &self.config);
        let (_, cached) = self
            .cached
            .get_or_insert_with(|| (revision, layout(nodes, config)));
        cached
    }

    /// True if [`layout`](Self::layout) would return the cached result without recomputing.
    pub fn is_layout_current(&self) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|(computed_at, _)| *computed_at == self.revision)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
