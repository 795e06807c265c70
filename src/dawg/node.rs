use std::fmt;

use smallvec::SmallVec;

use super::char_trait::DawgChar;

/// Handle of a node inside one word graph.
///
/// Handles are handed out by a monotonically increasing counter while the graph
/// is built and are never reused. After [`Builder::finish`](super::Builder::finish)
/// the handles are renumbered densely, with the root always at `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every graph.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the handle as a plain index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outgoing edges of a node, sorted by label. Most nodes have one or two.
pub(crate) type EdgeVec<C> = SmallVec<[(C, NodeId); 2]>;

/// One state of the automaton.
#[derive(Clone, Debug)]
pub(crate) struct Node<C: DawgChar> {
    id: NodeId,
    edges: EdgeVec<C>,
    is_final: bool,
}

impl<C: DawgChar> Node<C> {
    pub(crate) fn new(id: NodeId) -> Self {
        Node {
            id,
            edges: SmallVec::new(),
            is_final: false,
        }
    }

    pub(crate) fn from_parts(id: NodeId, edges: EdgeVec<C>, is_final: bool) -> Self {
        debug_assert!(edges.iter().map(|&(label, _)| label).is_sorted());
        Node {
            id,
            edges,
            is_final,
        }
    }

    #[inline]
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub(crate) fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn set_final(&mut self) {
        self.is_final = true;
    }

    #[inline]
    pub(crate) fn edges(&self) -> &[(C, NodeId)] {
        &self.edges
    }

    /// Returns the child reached through `label`, if any.
    #[inline]
    pub(crate) fn get(&self, label: C) -> Option<NodeId> {
        // Small nodes dominate; a linear scan beats binary search there.
        if self.edges.len() <= 4 {
            return self
                .edges
                .iter()
                .find_map(|&(l, child)| (l == label).then_some(child));
        }
        self.edges
            .binary_search_by_key(&label, |&(l, _)| l)
            .ok()
            .map(|i| self.edges[i].1)
    }

    /// Adds an edge, keeping the edge list sorted by label.
    pub(crate) fn add_edge(&mut self, label: C, child: NodeId) {
        let pos = self.edges.partition_point(|&(l, _)| l < label);
        debug_assert!(
            self.edges.get(pos).is_none_or(|&(l, _)| l != label),
            "add_edge: label already exists"
        );
        self.edges.insert(pos, (label, child));
    }

    /// Points the edge labeled `label` at `child` instead.
    ///
    /// Panics if there is no such edge.
    pub(crate) fn redirect(&mut self, label: C, child: NodeId) {
        let pos = self
            .edges
            .binary_search_by_key(&label, |&(l, _)| l)
            .unwrap_or_else(|_| panic!("redirect: no edge labeled {label:?}"));
        self.edges[pos].1 = child;
    }

    /// Drops every outgoing edge. Used on nodes superseded by a canonical
    /// equivalent, whose former children may now be shared.
    pub(crate) fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Structural key used to test equivalence during minimization.
    ///
    /// Children are compared by handle only, which is sound because the graph
    /// is minimized bottom-up: every child is already canonical when its
    /// parent's signature is taken.
    pub(crate) fn signature(&self) -> Signature<C> {
        let mut edges: SmallVec<[(C, NodeId); 4]> = self.edges.iter().copied().collect();
        edges.sort_unstable_by_key(|&(label, _)| label);
        Signature {
            is_final: self.is_final,
            edges,
        }
    }
}

/// Equivalence key of a node: its final flag plus its sorted `(label, child)`
/// pairs.
///
/// Two nodes with equal signatures accept the same set of suffixes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature<C: DawgChar> {
    is_final: bool,
    edges: SmallVec<[(C, NodeId); 4]>,
}

impl<C: DawgChar> Signature<C> {
    /// Whether the node this signature was taken from is final.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// The sorted `(label, child)` pairs.
    pub fn edges(&self) -> &[(C, NodeId)] {
        &self.edges
    }
}
