use crate::storage::Storage;
use crate::types::node::{NodeId, ROOT};
use crate::types::symbol::Symbol;

/// The cursor of the construction: the longest suffix that is still
/// only implicitly in the tree ends `length` symbols down `edge`,
/// below `parent`. Without a locked edge the point is `parent` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    parent: NodeId,
    edge: Option<NodeId>,
    length: usize,
}

impl ActivePoint {
    pub fn new() -> Self {
        ActivePoint {
            parent: ROOT,
            edge: None,
            length: 0,
        }
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn edge(&self) -> Option<NodeId> {
        self.edge
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn reset(&mut self) {
        self.parent = ROOT;
        self.unlock();
    }

    /// Tries to match `symbol` right after the point. On a match the point
    /// moves one symbol further, walking down onto the child once a branch
    /// edge is used up. A miss leaves the point untouched and means the
    /// suffix has to be inserted.
    pub fn attempt_extend<T: Symbol>(&mut self, storage: &Storage<T>, symbol: T) -> bool {
        let edge = match self.edge {
            Some(edge) => {
                if storage.symbols[storage.node(edge).start + self.length] != symbol {
                    return false;
                }
                edge
            }
            None => match storage.edge(self.parent, symbol) {
                // The key of an edge is its first symbol, so locking on it is the match
                Some(edge) => {
                    self.edge = Some(edge);
                    edge
                }
                None => return false,
            },
        };

        self.length += 1;

        if !storage.is_leaf(edge) && self.length == storage.length_of(edge) {
            self.set_parent(storage, edge);
            self.unlock();
        }

        true
    }

    /// Moves the point to the next shorter pending suffix after an insertion.
    /// The suffix link of the parent is used when there is one, otherwise the
    /// pending part (`remainder - 1` symbols before the newest one) is walked
    /// again from the root.
    pub fn relocate<T: Symbol>(&mut self, storage: &Storage<T>, remainder: usize) {
        match storage.link(self.parent) {
            Some(target) => self.set_parent(storage, target),
            None => {
                self.parent = ROOT;
                self.length = remainder - 1;
            }
        }

        self.descend(storage, storage.position());
    }

    /// Puts a reset point back on the longest pending suffix, which is the
    /// last `pending` symbols of the buffer.
    pub fn restore<T: Symbol>(&mut self, storage: &Storage<T>, pending: usize) {
        self.reset();
        self.length = pending;
        self.descend(storage, storage.symbols.len());
    }

    // Skip/count walk from the parent over the `length` symbols ending right
    // before `end`. Only edge lengths are compared, never the symbols on them.
    fn descend<T: Symbol>(&mut self, storage: &Storage<T>, end: usize) {
        self.edge = None;

        while self.length > 0 {
            let symbol = storage.symbols[end - self.length];
            let edge = storage
                .edge(self.parent, symbol)
                .expect("pending suffix is missing from the tree");
            let edge_length = storage.length_of(edge);

            if edge_length > self.length {
                self.edge = Some(edge);
                return;
            }

            self.length -= edge_length;
            self.set_parent(storage, edge);
        }
    }

    fn set_parent<T: Symbol>(&mut self, storage: &Storage<T>, node: NodeId) {
        assert!(
            !storage.is_leaf(node),
            "leaf node {} cannot be the active parent",
            node
        );
        self.parent = node;
    }

    fn unlock(&mut self) {
        self.edge = None;
        self.length = 0;
    }
}
