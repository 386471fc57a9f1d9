use std::collections::HashMap;

use log::trace;

use crate::types::node::{Node, NodeId, ROOT};
use crate::types::symbol::Symbol;

/// Maps `(parent, first symbol of the child's label)` to the child
pub type EdgeTable<T> = HashMap<(NodeId, T), NodeId>;

/// Maps a branch to the branch whose label is one leading symbol shorter
pub type SuffixLinks = HashMap<NodeId, NodeId>;

/// Everything the tree is made of. The active point and the
/// per-step counters live on `SuffixTree`, this is only the
/// structure they read and mutate.
#[derive(Debug)]
pub(crate) struct Storage<T> {
    pub symbols: Vec<T>,
    pub nodes: Vec<Node>,
    pub edges: EdgeTable<T>,
    pub links: SuffixLinks,
}

impl<T: Symbol> Storage<T> {
    pub fn new() -> Self {
        Storage {
            symbols: Vec::new(),
            nodes: vec![Node::root()],
            edges: HashMap::new(),
            links: HashMap::new(),
        }
    }

    // Index of the newest symbol in the buffer
    pub fn position(&self) -> usize {
        self.symbols.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id].is_leaf()
    }

    pub fn length_of(&self, id: NodeId) -> usize {
        self.nodes[id].length(self.symbols.len())
    }

    pub fn label(&self, id: NodeId) -> &[T] {
        let node = &self.nodes[id];
        &self.symbols[node.start..node.end(self.symbols.len())]
    }

    pub fn edge(&self, parent: NodeId, symbol: T) -> Option<NodeId> {
        self.edges.get(&(parent, symbol)).copied()
    }

    pub fn link(&self, id: NodeId) -> Option<NodeId> {
        self.links.get(&id).copied()
    }

    /// Hangs a new leaf below `parent`, starting at the newest symbol.
    pub fn insert_leaf(&mut self, parent: NodeId, symbol: T) -> NodeId {
        let leaf = self.push(Node::leaf(self.position()));
        let previous = self.edges.insert((parent, symbol), leaf);
        assert!(
            previous.is_none(),
            "node {} already has an edge for the inserted leaf",
            parent
        );
        leaf
    }

    /// Splits the edge into `child` after `at` symbols. The new branch takes
    /// over the child's key below `parent` and the child is re-keyed below the
    /// branch with its start moved past the split, so the child keeps its id.
    pub fn split(&mut self, parent: NodeId, child: NodeId, at: usize) -> NodeId {
        assert!(
            at > 0 && at < self.length_of(child),
            "cannot split node {} at {}",
            child,
            at
        );

        let start = self.nodes[child].start;
        let key = (parent, self.symbols[start]);
        let branch = self.push(Node::branch(start, start + at));

        self.edges.insert(key, branch);
        self.nodes[child].start = start + at;
        self.edges.insert((branch, self.symbols[start + at]), child);

        trace!(
            "Split node {} at {}, new branch {} below {}",
            child,
            at,
            branch,
            parent
        );
        branch
    }

    pub fn add_link(&mut self, from: NodeId, to: NodeId) {
        assert!(
            from != ROOT && !self.is_leaf(from) && !self.is_leaf(to),
            "suffix links only connect branches, got {} -> {}",
            from,
            to
        );
        let previous = self.links.insert(from, to);
        assert!(previous.is_none(), "node {} was linked twice", from);
        trace!("Suffix link {} -> {}", from, to);
    }

    /// The children of `parent` in ascending symbol order. This scans the
    /// whole edge table, so it is meant for inspection only.
    pub fn children(&self, parent: NodeId) -> Vec<(T, NodeId)> {
        let mut children = self
            .edges
            .iter()
            .filter(|((p, _), _)| *p == parent)
            .map(|((_, symbol), child)| (*symbol, *child))
            .collect::<Vec<_>>();
        children.sort();
        children
    }

    /// Every parent with its children in ascending symbol order, built in one
    /// pass over the edge table.
    pub fn adjacency(&self) -> HashMap<NodeId, Vec<(T, NodeId)>> {
        let mut adjacency: HashMap<NodeId, Vec<(T, NodeId)>> = HashMap::new();
        for (&(parent, symbol), &child) in &self.edges {
            adjacency.entry(parent).or_default().push((symbol, child));
        }
        for children in adjacency.values_mut() {
            children.sort();
        }
        adjacency
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_with(symbols: &[u8]) -> Storage<u8> {
        let mut storage = Storage::new();
        storage.symbols.extend_from_slice(symbols);
        storage
    }

    #[test]
    fn leaf_starts_at_newest_symbol() {
        let mut storage = storage_with(b"ab");
        let leaf = storage.insert_leaf(ROOT, b'b');

        assert_eq!(1, storage.node(leaf).start);
        assert!(storage.is_leaf(leaf));
        assert_eq!(Some(leaf), storage.edge(ROOT, b'b'));
        assert_eq!(b"b", storage.label(leaf));
    }

    #[test]
    fn split_keeps_child_identity() {
        let mut storage = storage_with(b"abc");
        storage.nodes.push(Node::leaf(0));
        let child = 1;
        storage.edges.insert((ROOT, b'a'), child);

        let branch = storage.split(ROOT, child, 2);

        assert_eq!(Some(branch), storage.edge(ROOT, b'a'));
        assert_eq!(Some(child), storage.edge(branch, b'c'));
        assert_eq!(b"ab", storage.label(branch));
        assert_eq!(b"c", storage.label(child));
        assert!(storage.is_leaf(child));
    }

    #[test]
    #[should_panic(expected = "cannot split")]
    fn split_at_edge_end_panics() {
        let mut storage = storage_with(b"ab");
        storage.nodes.push(Node::branch(0, 2));
        storage.edges.insert((ROOT, b'a'), 1);
        storage.split(ROOT, 1, 2);
    }

    #[test]
    #[should_panic(expected = "linked twice")]
    fn double_link_panics() {
        let mut storage = storage_with(b"abab");
        storage.nodes.push(Node::branch(0, 1));
        storage.nodes.push(Node::branch(1, 2));
        storage.add_link(1, 2);
        storage.add_link(1, 2);
    }

    #[test]
    fn children_are_sorted() {
        let mut storage = storage_with(b"cab");
        storage.nodes.push(Node::leaf(0));
        storage.nodes.push(Node::leaf(1));
        storage.nodes.push(Node::leaf(2));
        storage.edges.insert((ROOT, b'c'), 1);
        storage.edges.insert((ROOT, b'a'), 2);
        storage.edges.insert((ROOT, b'b'), 3);

        let expected = vec![(b'a', 2), (b'b', 3), (b'c', 1)];
        assert_eq!(expected, storage.children(ROOT));
        assert_eq!(Some(&expected), storage.adjacency().get(&ROOT));
    }
}
