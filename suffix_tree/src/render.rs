use std::iter;

use crate::types::node::{NodeId, ROOT};
use crate::types::symbol::{Readable, Symbol};
use crate::SuffixTree;

// Marks on a rendered line
static ACTIVE_PARENT: &str = ">";
static ACTIVE_SPLIT: &str = " | ";
static OPEN_END: &str = "...";
static LINK: &str = " -> ";

impl<T: Symbol + Readable> SuffixTree<T> {
    /// Renders the tree one node per line, children in ascending symbol
    /// order. Meant for debugging, the format may change at any time.
    ///
    /// A line reads `depth:label`, indented by depth. The active parent is
    /// marked with `>`, the active point inside its edge with ` | `, open
    /// leaves end in `...` and a suffix link shows as ` -> ` followed by the
    /// first symbol of the linked node.
    pub fn render(&self) -> String {
        let mut out = format!("Content length: {}\n\n", self.len());
        let adjacency = self.storage.adjacency();

        // Explicit stack, a tree over one repeated symbol is as deep as it is long
        let mut stack: Vec<(usize, NodeId)> = vec![(0, ROOT)];
        while let Some((depth, node)) = stack.pop() {
            self.render_line(&mut out, depth, node);

            if let Some(children) = adjacency.get(&node) {
                for (_, child) in children.iter().rev() {
                    stack.push((depth + 1, *child));
                }
            }
        }

        out
    }

    fn render_line(&self, out: &mut String, depth: usize, node: NodeId) {
        let marker = if node == self.active.parent() {
            ACTIVE_PARENT
        } else {
            ""
        };

        let mut label = self
            .label(node)
            .iter()
            .map(|symbol| symbol.as_readable())
            .collect::<Vec<_>>();
        if self.active.edge() == Some(node) {
            label.insert(self.active.length(), String::from(ACTIVE_SPLIT));
        }

        let indent: String = iter::repeat(' ').take(depth + 1 - marker.len()).collect();
        out.push_str(&indent);
        out.push_str(marker);
        out.push_str(&format!("{}:{}", depth, label.concat()));

        if self.is_leaf(node) {
            out.push_str(OPEN_END);
        }

        if let Some(target) = self.suffix_link(node) {
            out.push_str(LINK);
            match self.label(target).first() {
                Some(symbol) => out.push_str(&symbol.as_readable()),
                None => out.push_str("root"),
            }
        }

        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::SuffixTree;
    use std::iter;

    #[test]
    fn banana() {
        let tree = SuffixTree::<u8>::from("banana");
        let rendered = tree.render();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!("Content length: 6", lines[0]);
        assert_eq!("", lines[1]);
        // The active point sits on the root after growing
        assert_eq!(">0:", lines[2]);
        // Without a terminator "a", "na" and "ana" stay implicit
        assert_eq!("  1:anana...", lines[3]);
        assert_eq!("  1:banana...", lines[4]);
        assert_eq!("  1:nana...", lines[5]);
        assert_eq!(6, lines.len());
    }

    #[test]
    fn branches_and_links() {
        let tree = SuffixTree::<u8>::from("abcabx");
        let rendered = tree.render();

        assert!(rendered.contains(" 1:ab -> b\n"));
        assert!(rendered.contains(" 1:b -> root\n"));
        assert!(rendered.contains("  2:x...\n"));
        assert!(rendered.contains(" 1:x...\n"));
    }

    #[test]
    fn escapes_unprintable_bytes() {
        let tree = SuffixTree::build(vec![b'a', b'\n']);
        assert!(tree.render().contains("1:\\x0a..."));
    }

    #[test]
    fn deep_tree_renders() {
        // Every "a" run becomes its own branch, one below the other
        let content = iter::repeat(b'a').take(2_000).chain(iter::once(b'b'));
        let tree = SuffixTree::build(content);
        let rendered = tree.render();

        assert!(rendered.starts_with("Content length: 2001"));
        assert!(rendered.contains(" 1999:a -> a\n"));
        assert!(rendered.contains(" 1:a -> root\n"));
    }

    #[test]
    fn debug_wraps_render() {
        let tree = SuffixTree::<u8>::from("ab");
        let debug = format!("{:?}", tree);
        assert!(debug.contains("SUFFIX TREE"));
        assert!(debug.contains("Content length: 2"));
    }
}
