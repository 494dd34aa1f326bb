use crate::bits::Bit;
use crate::error::{HuffmanError, Result};

/// A compressed message: the flattened encoding tree plus the message bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedData {
	/// Pre-order tree topology, `1` for internal nodes and `0` for leaves.
	pub tree_shape: Vec<Bit>,
	/// Leaf symbols in the same pre-order.
	pub tree_leaves: Vec<char>,
	pub message_bits: Vec<Bit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
	pub original_size: u64,
	pub message_bits: u64,
	pub tree_bits: u64,
	pub ratio: f64,
}

impl EncodedData {
	pub fn new(tree_shape: Vec<Bit>, tree_leaves: Vec<char>, message_bits: Vec<Bit>) -> Self {
		Self { tree_shape, tree_leaves, message_bits }
	}

	/// Checks that the shape describes exactly one tree with an internal root
	/// and that there is one leaf symbol per leaf.
	pub fn validate(&self) -> Result<()> {
		match self.tree_shape.first() {
			None => return Err(HuffmanError::MalformedStream("empty tree shape".to_string())),
			Some(Bit::Zero) => return Err(HuffmanError::InvalidTree("tree is a single leaf".to_string())),
			Some(Bit::One) => {}
		}

		let mut open = 1usize;
		for (i, bit) in self.tree_shape.iter().enumerate() {
			if open == 0 {
				return Err(HuffmanError::MalformedStream(format!(
					"{} trailing shape bits after the tree",
					self.tree_shape.len() - i
				)));
			}
			open -= 1;
			if *bit == Bit::One { open += 2; }
		}
		if open != 0 {
			return Err(HuffmanError::MalformedStream(format!("tree shape is missing {} nodes", open)));
		}

		let leaf_count = self.tree_shape.iter().filter(|b| **b == Bit::Zero).count();
		if leaf_count != self.tree_leaves.len() {
			return Err(HuffmanError::MalformedStream(format!(
				"tree shape has {} leaves but {} leaf symbols were stored",
				leaf_count,
				self.tree_leaves.len()
			)));
		}
		Ok(())
	}

	/// Shape bits plus the UTF-8 size of the leaf symbols, in bits.
	pub fn tree_bits(&self) -> u64 {
		let leaf_bytes: usize = self.tree_leaves.iter().map(|c| c.len_utf8()).sum();
		self.tree_shape.len() as u64 + 8 * leaf_bytes as u64
	}

	pub fn stats(&self, original: &str) -> CompressionStats {
		let original_size = original.len() as u64;
		let message_bits = self.message_bits.len() as u64;
		let tree_bits = self.tree_bits();
		let total = message_bits + tree_bits;
		let ratio = if total > 0 { (8 * original_size) as f64 / total as f64 } else { 0.0 };
		CompressionStats { original_size, message_bits, tree_bits, ratio }
	}
}
