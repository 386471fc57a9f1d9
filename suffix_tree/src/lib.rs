// Online suffix tree built with Ukkonen's algorithm.
//
// The tree is built one symbol at a time and can keep growing after it has
// been queried. Labels are never copied, every node only stores the range of
// the symbol buffer its incoming edge covers. No terminator is appended, so
// the tree answers substring questions and not suffix questions.
use log::debug;
use rayon::prelude::*;
use std::fmt;
use std::iter::FromIterator;

mod active_point;
mod render;
mod storage;
mod types {
    pub mod node;
    pub mod symbol;
}

use active_point::ActivePoint;
use storage::Storage;

pub use types::node::{End, NodeId, ROOT};
pub use types::symbol::{Readable, Symbol};

/// A suffix tree over an arbitrary ordered alphabet.
///
/// # Examples
///
/// ```
/// use suffix_tree::SuffixTree;
///
/// let mut tree = SuffixTree::build("ban".bytes());
/// tree.grow("ana".bytes());
///
/// assert!(tree.contains(b"nan"));
/// assert!(!tree.contains(b"xyz"));
/// ```
pub struct SuffixTree<T = u8> {
    storage: Storage<T>,
    active: ActivePoint,
    // Suffixes of the content that are not yet explicit in the tree
    remainder: usize,
    // Branch created in the current step that still waits for its suffix link
    pending_link: Option<NodeId>,
}

impl<T: Symbol> SuffixTree<T> {
    pub fn new() -> Self {
        SuffixTree {
            storage: Storage::new(),
            active: ActivePoint::new(),
            remainder: 0,
            pending_link: None,
        }
    }

    /// Creates a tree containing `sequence`.
    /// Shorthand for `new` followed by `grow`.
    pub fn build<I: IntoIterator<Item = T>>(sequence: I) -> Self {
        let mut tree = SuffixTree::new();
        tree.grow(sequence);
        tree
    }

    /// Extends the tree with every symbol of `sequence`, in order.
    ///
    /// The active point is put back on the root afterwards so the tree can be
    /// inspected between calls. The next call walks it back down first, which
    /// makes growing in several calls the same as growing once with the
    /// concatenation.
    pub fn grow<I: IntoIterator<Item = T>>(&mut self, sequence: I) {
        let before = self.len();

        if self.remainder > 0 {
            self.active.restore(&self.storage, self.remainder);
        }

        for symbol in sequence {
            self.extend_one(symbol);
        }

        self.active.reset();

        debug!(
            "Grew tree by {} symbols to {}, {} nodes, {} suffixes pending",
            self.len() - before,
            self.len(),
            self.node_count(),
            self.remainder
        );
    }

    // A single step of Ukkonen's algorithm
    fn extend_one(&mut self, symbol: T) {
        self.storage.symbols.push(symbol);
        self.pending_link = None;
        self.remainder += 1;

        while self.remainder > 0 {
            let parent = self.active.parent();
            let at_node = self.active.edge().is_none();

            if self.active.attempt_extend(&self.storage, symbol) {
                // The rest of the pending suffixes are already in the tree
                // implicitly and are carried over to the next symbol
                if at_node {
                    self.link_pending(parent);
                }
                break;
            }

            match self.active.edge() {
                Some(edge) => {
                    let branch = self.storage.split(parent, edge, self.active.length());
                    self.storage.insert_leaf(branch, symbol);
                    self.link_pending(branch);
                    self.pending_link = Some(branch);
                }
                None => {
                    self.storage.insert_leaf(parent, symbol);
                    self.link_pending(parent);
                }
            }

            self.remainder -= 1;

            if self.remainder > 0 {
                self.active.relocate(&self.storage, self.remainder);
            }
        }
    }

    fn link_pending(&mut self, target: NodeId) {
        if let Some(source) = self.pending_link.take() {
            self.storage.add_link(source, target);
        }
    }

    /// Checks if `query` occurs anywhere in the content of the tree.
    /// Runs in O(m) time, where m is the length of the query.
    pub fn contains(&self, query: &[T]) -> bool {
        self.matched_prefix(query) == query.len()
    }

    /// Length of the longest prefix of `query` that occurs in the content.
    pub fn longest_prefix(&self, query: &[T]) -> usize {
        self.matched_prefix(query)
    }

    /// Answers many `contains` queries at once, spread over the rayon pool.
    pub fn contains_all<Q>(&self, queries: &[Q]) -> Vec<bool>
    where
        Q: AsRef<[T]> + Sync,
        T: Send + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.contains(query.as_ref()))
            .collect()
    }

    // Walks down from the root as far as the query matches
    fn matched_prefix(&self, query: &[T]) -> usize {
        let mut node = ROOT;
        let mut matched = 0;

        while matched < query.len() {
            // Locking on an edge already matches its first symbol
            node = match self.storage.edge(node, query[matched]) {
                Some(child) => child,
                None => return matched,
            };
            matched += 1;

            for symbol in &self.storage.label(node)[1..] {
                if matched == query.len() || *symbol != query[matched] {
                    return matched;
                }
                matched += 1;
            }
        }

        matched
    }

    // --- Inspection ---

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of symbols indexed so far
    pub fn len(&self) -> usize {
        self.storage.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[T] {
        &self.storage.symbols
    }

    pub fn node_count(&self) -> usize {
        self.storage.nodes.len()
    }

    /// The label of the edge going into `node`. Leaf labels run to the end
    /// of the content.
    pub fn label(&self, node: NodeId) -> &[T] {
        self.storage.label(node)
    }

    /// The children of `node` keyed by the first symbol of their label, in
    /// ascending symbol order. Scans every edge, so use it for inspection only.
    pub fn children(&self, node: NodeId) -> Vec<(T, NodeId)> {
        self.storage.children(node)
    }

    pub fn is_root(&self, node: NodeId) -> bool {
        node == ROOT
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.storage.is_leaf(node)
    }

    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.storage.link(node)
    }

    pub fn active_parent(&self) -> NodeId {
        self.active.parent()
    }

    /// The locked edge of the active point and how far along it the point is
    pub fn active_edge(&self) -> Option<(NodeId, usize)> {
        self.active.edge().map(|edge| (edge, self.active.length()))
    }

    /// Suffixes of the content that are only implicitly in the tree
    pub fn remainder(&self) -> usize {
        self.remainder
    }
}

impl<T: Symbol> Default for SuffixTree<T> {
    fn default() -> Self {
        SuffixTree::new()
    }
}

impl<T: Symbol> Extend<T> for SuffixTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.grow(iter);
    }
}

impl<T: Symbol> FromIterator<T> for SuffixTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SuffixTree::build(iter)
    }
}

impl From<&str> for SuffixTree<u8> {
    fn from(s: &str) -> Self {
        SuffixTree::build(s.bytes())
    }
}

impl From<&str> for SuffixTree<char> {
    fn from(s: &str) -> Self {
        SuffixTree::build(s.chars())
    }
}

impl<T: Symbol + Readable> fmt::Debug for SuffixTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n-----------------------------------------")?;
        writeln!(f, "SUFFIX TREE")?;
        write!(f, "{}", self.render())?;
        writeln!(f, "-----------------------------------------")
    }
}
