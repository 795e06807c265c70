//! Arena holding every node created while a word graph is built.
//!
//! Nodes are addressed by [`NodeId`] handles. The arena's length doubles as the
//! id counter, so handles are never reused. Nodes superseded during
//! minimization are abandoned in place and released together with the arena.

use super::char_trait::DawgChar;
use super::node::{EdgeVec, Node, NodeId};

pub(crate) struct NodeArena<C: DawgChar> {
    nodes: Vec<Node<C>>,
}

impl<C: DawgChar> NodeArena<C> {
    /// Creates an arena with room for `capacity` nodes, holding only the root.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = NodeArena {
            nodes: Vec::with_capacity(capacity.max(1)),
        };
        let root = arena.alloc();
        debug_assert_eq!(root, NodeId::ROOT);
        arena
    }

    /// Allocates a fresh, non-final node without edges and returns its handle.
    pub fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id));
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<C> {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<C> {
        &mut self.nodes[id.0]
    }

    /// Number of nodes ever allocated, abandoned ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Consumes the arena and returns only the nodes reachable from the root,
    /// renumbered densely in depth-first preorder (root stays at `0`).
    pub fn into_reachable(self) -> Vec<Node<C>> {
        const UNSEEN: usize = usize::MAX;

        let mut remap = vec![UNSEEN; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            if remap[id.0] != UNSEEN {
                continue;
            }
            remap[id.0] = order.len();
            order.push(id);
            // Reversed so that children are numbered in label order.
            stack.extend(
                self.nodes[id.0]
                    .edges()
                    .iter()
                    .rev()
                    .map(|&(_, child)| child)
                    .filter(|child| remap[child.0] == UNSEEN),
            );
        }

        order
            .into_iter()
            .enumerate()
            .map(|(new_id, old_id)| {
                let old = &self.nodes[old_id.0];
                let edges: EdgeVec<C> = old
                    .edges()
                    .iter()
                    .map(|&(label, child)| (label, NodeId(remap[child.0])))
                    .collect();
                Node::from_parts(NodeId(new_id), edges, old.is_final())
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_with_root() {
        let arena = NodeArena::<char>::with_capacity(1);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.node(NodeId::ROOT).id(), NodeId::ROOT);
    }

    #[test]
    fn ids_are_sequential() {
        let mut arena = NodeArena::<char>::with_capacity(8);
        let ids: Vec<_> = (0..5).map(|_| arena.alloc()).collect();
        assert_eq!(ids, (1..6).map(NodeId).collect::<Vec<_>>());
        assert_eq!(arena.len(), 6);
    }

    #[test]
    fn unreachable_nodes_are_dropped() {
        let mut arena = NodeArena::with_capacity(4);
        let a = arena.alloc();
        let orphan = arena.alloc();
        let b = arena.alloc();
        arena.node_mut(NodeId::ROOT).add_edge('x', a);
        arena.node_mut(a).add_edge('y', b);
        arena.node_mut(orphan).add_edge('z', b);
        arena.node_mut(b).set_final();

        let nodes = arena.into_reachable();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].edges(), &[('x', NodeId(1))]);
        assert_eq!(nodes[1].edges(), &[('y', NodeId(2))]);
        assert!(nodes[2].is_final());
        assert!(nodes.iter().enumerate().all(|(i, n)| n.id() == NodeId(i)));
    }

    #[test]
    fn shared_nodes_are_kept_once() {
        let mut arena = NodeArena::with_capacity(4);
        let a = arena.alloc();
        let b = arena.alloc();
        let leaf = arena.alloc();
        arena.node_mut(NodeId::ROOT).add_edge('a', a);
        arena.node_mut(NodeId::ROOT).add_edge('b', b);
        arena.node_mut(a).add_edge('z', leaf);
        arena.node_mut(b).add_edge('z', leaf);

        let nodes = arena.into_reachable();
        assert_eq!(nodes.len(), 4);
        let a = nodes[0].get('a').unwrap();
        let b = nodes[0].get('b').unwrap();
        assert_ne!(a, b);
        assert!(nodes[a.index()].get('z').is_some());
        assert_eq!(nodes[a.index()].get('z'), nodes[b.index()].get('z'));
    }
}
