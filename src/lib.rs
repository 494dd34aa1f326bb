//! # Huffman Tree Coding
//!
//! Builds optimal prefix-free Huffman trees from symbol frequencies and uses
//! them to compress text into a bit sequence that travels together with a
//! flattened copy of the tree.
//!
//! ## Features
//!
//! - **Tree Construction**: Greedy minimum-merge over a priority queue with a
//!   documented, configurable tie-break
//! - **Tree Flattening**: Pre-order shape bits plus leaf symbols, enough to
//!   rebuild the exact tree
//! - **Message Coding**: Code-table driven encoding and tree-walking decoding
//! - **Validation**: Structural checks and depth limits for untrusted records
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_tree::{compress, decompress};
//!
//! let data = compress("STREETTEST").unwrap();
//! assert_eq!(data.tree_leaves, vec!['T', 'R', 'S', 'E']);
//! assert_eq!(decompress(&data).unwrap(), "STREETTEST");
//! ```
//!
//! ### Working with Trees Directly
//!
//! ```rust
//! use huffman_tree::{build_huffman_tree, decode_text, encode_text, flatten_tree, unflatten_tree};
//!
//! let tree = build_huffman_tree("HAPPY HIP HOP").unwrap();
//! let bits = encode_text(&tree, "HIPPO").unwrap();
//! assert_eq!(decode_text(&tree, &bits).unwrap(), "HIPPO");
//!
//! let mut shape = Vec::new();
//! let mut leaves = Vec::new();
//! flatten_tree(&tree, &mut shape, &mut leaves);
//! let rebuilt = unflatten_tree(&mut shape.into_iter(), &mut leaves.into_iter()).unwrap();
//! assert_eq!(rebuilt, tree);
//! ```

pub mod analyzer;
pub mod bits;
pub mod builder;
pub mod codec;
pub mod config;
pub mod container;
pub mod error;
pub mod flatten;
pub mod pipeline;
pub mod tree;

// Re-export commonly used types for convenience
pub use bits::Bit;
pub use builder::{build_from_frequencies, build_huffman_tree};
pub use codec::{decode_text, encode_text, make_key, CodeTable, HuffmanCodec};
pub use config::{CodecConfig, TieBreak, MAX_TREE_DEPTH};
pub use container::{CompressionStats, EncodedData};
pub use error::{HuffmanError, Result};
pub use flatten::{flatten_tree, unflatten_tree};
pub use tree::{are_equal, EncodingTreeNode};

/// Compress `text` with the default configuration.
///
/// Fails with [`HuffmanError::InvalidInput`] if the text holds fewer than
/// two distinct symbols.
///
/// # Example
///
/// ```rust
/// use huffman_tree::compress;
///
/// let data = compress("Nana Nana Batman").unwrap();
/// assert!(!data.message_bits.is_empty());
/// assert!(compress("A").is_err());
/// ```
pub fn compress(text: &str) -> Result<EncodedData> {
    pipeline::compress(text, &CodecConfig::default())
}

/// Decompress a record produced by [`compress`].
///
/// The record is trusted: shape and leaf counts are not cross-checked. Use
/// [`validate_data`] or a strict [`CodecConfig`] for records from elsewhere.
pub fn decompress(data: &EncodedData) -> Result<String> {
    pipeline::decompress(data, &CodecConfig::default())
}

/// Check that `data` describes exactly one tree and one leaf per leaf symbol.
///
/// # Example
///
/// ```rust
/// use huffman_tree::{compress, validate_data};
///
/// let mut data = compress("Test data for validation").unwrap();
/// assert!(validate_data(&data).is_ok());
///
/// data.tree_leaves.pop();
/// assert!(validate_data(&data).is_err());
/// ```
pub fn validate_data(data: &EncodedData) -> Result<()> {
    data.validate()
}

/// Estimate the compression ratio for `text` without encoding it.
pub fn estimate_compression_ratio(text: &str) -> Result<f64> {
    pipeline::estimate_compression(text, &CodecConfig::default()).map(|stats| stats.ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress() {
        let original = "Hello, world! This is a test of the Huffman library API.";
        let data = compress(original).unwrap();
        assert_eq!(decompress(&data).unwrap(), original);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(matches!(compress(""), Err(HuffmanError::InvalidInput(_))));
        assert!(matches!(compress("A"), Err(HuffmanError::InvalidInput(_))));
    }

    #[test]
    fn test_estimation() {
        let skewed = format!("{}b", "a".repeat(999));
        let varied: String = (0..1000).map(|i| char::from(b'!' + (i * 17 % 90) as u8)).collect();

        let ratio1 = estimate_compression_ratio(&skewed).unwrap();
        let ratio2 = estimate_compression_ratio(&varied).unwrap();

        // Skewed data should have higher estimated ratio
        assert!(ratio1 > ratio2);
    }
}
