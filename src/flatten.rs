//! Tree flattening
//!
//! A tree is stored as two parallel pre-order sequences: a shape bit per node
//! (`1` internal, `0` leaf) and the leaf symbols in visit order. The zero
//! branch is always visited before the one branch.

use crate::bits::Bit;
use crate::config::MAX_TREE_DEPTH;
use crate::error::{HuffmanError, Result};
use crate::tree::EncodingTreeNode;

/// Appends the pre-order flattening of `tree` to `shape` and `leaves`.
///
/// Callers pass empty sequences; whatever they already hold is kept in front
/// of the new output.
pub fn flatten_tree(tree: &EncodingTreeNode, shape: &mut Vec<Bit>, leaves: &mut Vec<char>) {
    match tree {
        EncodingTreeNode::Leaf { symbol } => {
            shape.push(Bit::Zero);
            leaves.push(*symbol);
        }
        EncodingTreeNode::Internal { zero, one } => {
            shape.push(Bit::One);
            flatten_tree(zero, shape, leaves);
            flatten_tree(one, shape, leaves);
        }
    }
}

/// Flattens into freshly allocated sequences.
pub fn flatten(tree: &EncodingTreeNode) -> (Vec<Bit>, Vec<char>) {
    let leaf_count = tree.leaf_count();
    let mut shape = Vec::with_capacity(2 * leaf_count - 1);
    let mut leaves = Vec::with_capacity(leaf_count);
    flatten_tree(tree, &mut shape, &mut leaves);
    (shape, leaves)
}

/// Rebuilds a tree by consuming `shape` and `leaves` from the front.
///
/// Only the items belonging to the tree are consumed, so callers can check
/// for leftovers afterwards. Running out of either sequence, or a tree deeper
/// than [`MAX_TREE_DEPTH`], is reported as [`HuffmanError::MalformedStream`].
pub fn unflatten_tree<S, L>(shape: &mut S, leaves: &mut L) -> Result<EncodingTreeNode>
where
    S: Iterator<Item = Bit>,
    L: Iterator<Item = char>,
{
    unflatten_tree_bounded(shape, leaves, MAX_TREE_DEPTH)
}

pub fn unflatten_tree_bounded<S, L>(shape: &mut S, leaves: &mut L, max_depth: usize) -> Result<EncodingTreeNode>
where
    S: Iterator<Item = Bit>,
    L: Iterator<Item = char>,
{
    unflatten_node(shape, leaves, 0, max_depth)
}

fn unflatten_node<S, L>(shape: &mut S, leaves: &mut L, depth: usize, max_depth: usize) -> Result<EncodingTreeNode>
where
    S: Iterator<Item = Bit>,
    L: Iterator<Item = char>,
{
    let bit = shape
        .next()
        .ok_or_else(|| HuffmanError::MalformedStream("tree shape ended before the tree was complete".to_string()))?;
    match bit {
        Bit::One => {
            if depth >= max_depth {
                return Err(HuffmanError::MalformedStream(format!(
                    "tree is deeper than the limit of {}",
                    max_depth
                )));
            }
            let zero = unflatten_node(shape, leaves, depth + 1, max_depth)?;
            let one = unflatten_node(shape, leaves, depth + 1, max_depth)?;
            Ok(EncodingTreeNode::internal(zero, one))
        }
        Bit::Zero => {
            let symbol = leaves
                .next()
                .ok_or_else(|| HuffmanError::MalformedStream("ran out of leaf symbols".to_string()))?;
            Ok(EncodingTreeNode::leaf(symbol))
        }
    }
}
