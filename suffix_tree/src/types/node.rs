pub type NodeId = usize;

// The root is always the first node in the arena
pub const ROOT: NodeId = 0;

/// Where the label of a node ends in the symbol buffer.
/// An `Open` end follows the length of the buffer, which
/// is what makes every leaf grow by itself when a symbol
/// is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
  Closed(usize),
  Open,
}

/// A vertex of the tree. The node carries the label of the
/// edge going into it as the range `start..end` of the buffer,
/// so there is no separate edge type.
#[derive(Debug, Clone)]
pub struct Node {
  pub start: usize,
  pub end: End,
}

impl Node {
  pub fn root() -> Node {
    Node {
      start: 0,
      end: End::Closed(0),
    }
  }

  pub fn leaf(start: usize) -> Node {
    Node {
      start,
      end: End::Open,
    }
  }

  pub fn branch(start: usize, end: usize) -> Node {
    Node {
      start,
      end: End::Closed(end),
    }
  }

  pub fn is_leaf(&self) -> bool {
    self.end == End::Open
  }

  // Resolves the end against the current buffer length
  pub fn end(&self, buffer_len: usize) -> usize {
    match self.end {
      End::Closed(end) => end,
      End::Open => buffer_len,
    }
  }

  pub fn length(&self, buffer_len: usize) -> usize {
    self.end(buffer_len) - self.start
  }
}
