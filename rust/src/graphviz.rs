//! Graphviz export for RedBlackTree.
//!
//! Renders the tree as a DOT digraph: red nodes red, black nodes black with
//! white text, and an invisible placeholder under every absent child so the
//! left/right layout stays readable.

use crate::types::RedBlackTree;
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

/// Key rendered inside a quoted DOT label.
struct Label<'a, K>(&'a K);

impl<K: Display> Display for Label<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(Escaped(f), "{}", self.0)
    }
}

/// Forwards text with `"` and `\` backslash-escaped.
struct Escaped<'a, 'b>(&'a mut fmt::Formatter<'b>);

impl fmt::Write for Escaped<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut start = 0;
        for (at, ch) in s.char_indices() {
            if ch == '"' || ch == '\\' {
                self.0.write_str(&s[start..at])?;
                self.0.write_char('\\')?;
                start = at;
            }
        }
        self.0.write_str(&s[start..])
    }
}

/// Escaped label text for `key`, or an error if its `Display` impl fails.
fn render_label<K: Display>(key: &K) -> io::Result<String> {
    let mut label = String::new();
    write!(label, "{}", Label(key))
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "key formatting failed"))?;
    Ok(label)
}

impl<K: Display> RedBlackTree<K> {
    /// Write the tree as a DOT digraph to `out`.
    ///
    /// Fails if `out` fails or if a key's `Display` impl returns an error.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph RBTree {{")?;
        writeln!(out, "node [style=filled];")?;

        for id in self.node_ids() {
            let node = self.node_ref(id);
            let style = if node.is_red() {
                "color=red"
            } else {
                "color=black,fontcolor=white"
            };
            let label = render_label(&node.key)?;
            writeln!(out, "\"n{}\" [{},label=\"{}\"]", id, style, label)?;

            for (child, side) in [(node.left, 'L'), (node.right, 'R')] {
                match self.node(child) {
                    Some(_) => writeln!(out, "\"n{}\" -> \"n{}\"", id, child)?,
                    None => {
                        writeln!(out, "{}{} [label=\"\",color=white]", side, id)?;
                        writeln!(out, "\"n{}\" -> {}{}", id, side, id)?;
                    }
                }
            }
        }

        writeln!(out, "}}")
    }

    /// Render the tree as a DOT string.
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [2, 1].into_iter().collect();
    /// let dot = tree.to_dot().unwrap();
    /// assert!(dot.starts_with("digraph RBTree {"));
    /// assert!(dot.contains("label=\"1\""));
    /// ```
    pub fn to_dot(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_dot(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
