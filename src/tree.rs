//! Encoding tree nodes.
//!
//! A node is either a leaf holding one symbol or an internal node owning
//! exactly two children. The root-to-leaf path of every leaf is that symbol's
//! code: the `zero` branch contributes a `0` bit, the `one` branch a `1` bit.
//!
//! ```text
//!        *
//!      /   \
//!     T     *
//!          / \
//!         *   E
//!        / \
//!       R   S
//! ```

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingTreeNode {
    Leaf {
        symbol: char,
    },
    Internal {
        zero: Box<EncodingTreeNode>,
        one: Box<EncodingTreeNode>,
    },
}

impl EncodingTreeNode {
    pub fn leaf(symbol: char) -> Self {
        EncodingTreeNode::Leaf { symbol }
    }

    /// Takes ownership of both children.
    pub fn internal(zero: EncodingTreeNode, one: EncodingTreeNode) -> Self {
        EncodingTreeNode::Internal {
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, EncodingTreeNode::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            EncodingTreeNode::Leaf { symbol } => Some(*symbol),
            EncodingTreeNode::Internal { .. } => None,
        }
    }

    /// `(zero, one)` for internal nodes.
    pub fn children(&self) -> Option<(&EncodingTreeNode, &EncodingTreeNode)> {
        match self {
            EncodingTreeNode::Leaf { .. } => None,
            EncodingTreeNode::Internal { zero, one } => Some((zero.as_ref(), one.as_ref())),
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        match self {
            EncodingTreeNode::Leaf { .. } => 0,
            EncodingTreeNode::Internal { zero, one } => 1 + zero.height().max(one.height()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            EncodingTreeNode::Leaf { .. } => 1,
            EncodingTreeNode::Internal { zero, one } => zero.leaf_count() + one.leaf_count(),
        }
    }

    /// Leaf symbols in pre-order, zero branch first.
    pub fn symbols(&self) -> Vec<char> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut Vec<char>) {
        match self {
            EncodingTreeNode::Leaf { symbol } => out.push(*symbol),
            EncodingTreeNode::Internal { zero, one } => {
                zero.collect_symbols(out);
                one.collect_symbols(out);
            }
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            EncodingTreeNode::Leaf { symbol } => writeln!(f, "{}{}-> Leaf: {:?}", indent, label, symbol),
            EncodingTreeNode::Internal { zero, one } => {
                writeln!(f, "{}{}-> Internal", indent, label)?;
                zero.fmt_node(f, depth + 1, "0")?;
                one.fmt_node(f, depth + 1, "1")
            }
        }
    }
}

impl fmt::Display for EncodingTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, 0, "root")
    }
}

/// Structural equality where either side may be absent.
///
/// Two absent trees compare equal; an absent tree never equals a present one.
pub fn are_equal(a: Option<&EncodingTreeNode>, b: Option<&EncodingTreeNode>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
pub(crate) fn example_tree() -> EncodingTreeNode {
    use EncodingTreeNode as N;
    N::internal(
        N::leaf('T'),
        N::internal(N::internal(N::leaf('R'), N::leaf('S')), N::leaf('E')),
    )
}
