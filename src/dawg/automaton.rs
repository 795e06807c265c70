use std::fmt;
use std::ptr;

use super::builder::{build_dawg, IntoWord, Result};
use super::char_trait::DawgChar;
use super::node::{Node, NodeId, Signature};

/// Counters collected while a word graph was built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Words passed to [`Builder::insert`](super::Builder::insert), duplicates included.
    pub words_inserted: usize,
    /// Nodes created during construction, including those merged away.
    pub nodes_allocated: usize,
    /// Nodes reachable from the root after minimization.
    pub nodes_reachable: usize,
    /// Size of the canonical-state register at seal time.
    pub registered: usize,
}

/// A sealed, minimal word graph.
///
/// Produced by [`Builder::finish`](super::Builder::finish) or [`build_dawg`].
/// The graph is immutable plain data, so it is `Send + Sync` and can be
/// queried from many threads at once.
///
/// ```
/// use wordgraph::dawg::Dawg;
///
/// let dawg = Dawg::from_sorted(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
/// assert!(dawg.accepts("CAKE"));
/// assert!(!dawg.accepts("AKE"));
/// assert_eq!(dawg.len(), 5);
/// ```
#[derive(Clone)]
pub struct Dawg<C: DawgChar = char> {
    nodes: Vec<Node<C>>,
    len: usize,
    stats: BuildStats,
}

impl<C: DawgChar> Dawg<C> {
    pub(crate) fn from_parts(nodes: Vec<Node<C>>, len: usize, stats: BuildStats) -> Self {
        debug_assert!(!nodes.is_empty(), "a word graph always has a root");
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.id().index() == i));
        Dawg { nodes, len, stats }
    }

    /// Builds a word graph from words in sorted order. Same as [`build_dawg`].
    pub fn from_sorted<W: IntoWord<C>>(words: impl IntoIterator<Item = W>) -> Result<Self, C> {
        build_dawg(words)
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeRef<'_, C> {
        NodeRef {
            dawg: self,
            id: NodeId::ROOT,
        }
    }

    /// Returns the node with the given handle, if it exists in this graph.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, C>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { dawg: self, id })
    }

    /// Returns true if `word` was inserted into this graph.
    pub fn accepts(&self, word: impl IntoWord<C>) -> bool {
        self.root().has_suffix(word.collect_word())
    }

    /// Returns true if some word in the graph starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.walk(prefix.collect_word()).is_some()
    }

    /// Follows `labels` from the root, returning the node reached.
    pub fn walk(&self, labels: impl IntoIterator<Item = C>) -> Option<NodeRef<'_, C>> {
        labels
            .into_iter()
            .try_fold(self.root(), |node, label| node.get(label))
    }

    /// Iterates over all accepted words in lexicographic order.
    pub fn words(&self) -> Words<'_, C> {
        Words {
            dawg: self,
            stack: vec![(NodeId::ROOT, 0)],
            prefix: Vec::new(),
            root_pending: true,
        }
    }

    /// Number of distinct words accepted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the graph accepts no word at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the graph, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of transitions in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges().len()).sum()
    }

    /// Counters collected during construction.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    #[inline]
    fn raw(&self, id: NodeId) -> &Node<C> {
        &self.nodes[id.index()]
    }
}

impl Dawg<char> {
    /// Iterates over all accepted words as `String`s, in lexicographic order.
    pub fn strings(&self) -> impl Iterator<Item = String> + '_ {
        self.words().map(|word| word.into_iter().collect())
    }
}

impl<C: DawgChar> fmt::Debug for Dawg<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dawg")
            .field("words", &self.len)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}

/// A borrowed view of one node of a [`Dawg`].
///
/// This is the surface automaton-walking algorithms (for example
/// Levenshtein automata) build on.
#[derive(Clone, Copy)]
pub struct NodeRef<'a, C: DawgChar> {
    dawg: &'a Dawg<C>,
    id: NodeId,
}

impl<'a, C: DawgChar> NodeRef<'a, C> {
    /// The node's handle, stable for the lifetime of the graph.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True if some word ends at this node.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.dawg.raw(self.id).is_final()
    }

    /// Returns the node `label`'s edge leads to, or `None` if there is no such edge.
    #[inline]
    pub fn get(&self, label: C) -> Option<NodeRef<'a, C>> {
        let dawg = self.dawg;
        dawg.raw(self.id)
            .get(label)
            .map(|id| NodeRef { dawg, id })
    }

    /// Returns true if following `suffix` from this node ends on a final node.
    #[inline]
    pub fn has_suffix(&self, suffix: impl IntoIterator<Item = C>) -> bool {
        suffix
            .into_iter()
            .try_fold(*self, |node, label| node.get(label))
            .is_some_and(|node| node.is_final())
    }

    /// Iterates over outgoing edges in label order.
    pub fn edges(&self) -> Edges<'a, C> {
        Edges {
            dawg: self.dawg,
            inner: self.dawg.raw(self.id).edges().iter(),
        }
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.dawg.raw(self.id).edges().len()
    }

    /// The node's equivalence key.
    pub fn signature(&self) -> Signature<C> {
        self.dawg.raw(self.id).signature()
    }
}

impl<C: DawgChar> PartialEq for NodeRef<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.dawg, other.dawg) && self.id == other.id
    }
}

impl<C: DawgChar> Eq for NodeRef<'_, C> {}

impl<C: DawgChar> fmt::Debug for NodeRef<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.dawg.raw(self.id);
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("is_final", &node.is_final())
            .field("edges", &node.edges())
            .finish()
    }
}

/// Iterator over the outgoing edges of a node, created by [`NodeRef::edges`].
#[derive(Clone)]
pub struct Edges<'a, C: DawgChar> {
    dawg: &'a Dawg<C>,
    inner: std::slice::Iter<'a, (C, NodeId)>,
}

impl<'a, C: DawgChar> Iterator for Edges<'a, C> {
    type Item = (C, NodeRef<'a, C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let dawg = self.dawg;
        self.inner
            .next()
            .map(|&(label, id)| (label, NodeRef { dawg, id }))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: DawgChar> ExactSizeIterator for Edges<'_, C> {}

/// Depth-first iterator over the accepted words, created by [`Dawg::words`].
pub struct Words<'a, C: DawgChar> {
    dawg: &'a Dawg<C>,
    // (node, index of the next edge to follow)
    stack: Vec<(NodeId, usize)>,
    prefix: Vec<C>,
    root_pending: bool,
}

impl<C: DawgChar> Iterator for Words<'_, C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        if std::mem::take(&mut self.root_pending) && self.dawg.raw(NodeId::ROOT).is_final() {
            return Some(Vec::new());
        }
        loop {
            let (id, next_edge) = *self.stack.last()?;
            match self.dawg.raw(id).edges().get(next_edge) {
                Some(&(label, child)) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.1 += 1;
                    }
                    self.stack.push((child, 0));
                    self.prefix.push(label);
                    if self.dawg.raw(child).is_final() {
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}
