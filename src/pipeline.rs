use crate::analyzer::{count_frequencies, entropy};
use crate::builder::build_from_frequencies;
use crate::codec::{decode_text, encode_text, expected_bits, make_key};
use crate::config::CodecConfig;
use crate::container::{CompressionStats, EncodedData};
use crate::error::Result;
use crate::flatten::{flatten, unflatten_tree_bounded};

/// Build a tree for `text`, flatten it and encode `text` against it.
pub fn compress(text: &str, config: &CodecConfig) -> Result<EncodedData> {
	let frequencies = count_frequencies(text);
	let tree = build_from_frequencies(&frequencies, config.tie_break)?;
	log::trace!("encoding tree:\n{}", tree);

	let (tree_shape, tree_leaves) = flatten(&tree);
	let message_bits = encode_text(&tree, text)?;

	log::debug!(
		"compressed {} symbols into {} message bits ({} shape bits, {} leaves, {:.3} bits/symbol entropy)",
		text.chars().count(),
		message_bits.len(),
		tree_shape.len(),
		tree_leaves.len(),
		entropy(&frequencies)
	);
	Ok(EncodedData { tree_shape, tree_leaves, message_bits })
}

pub fn compress_with_stats(text: &str, config: &CodecConfig) -> Result<(EncodedData, CompressionStats)> {
	let data = compress(text, config)?;
	let stats = data.stats(text);
	Ok((data, stats))
}

/// Rebuild the tree stored in `data` and decode the message bits with it.
pub fn decompress(data: &EncodedData, config: &CodecConfig) -> Result<String> {
	if config.strict {
		data.validate()?;
	}

	let mut shape = data.tree_shape.iter().copied();
	let mut leaves = data.tree_leaves.iter().copied();
	let tree = unflatten_tree_bounded(&mut shape, &mut leaves, config.max_tree_depth)?;
	let text = decode_text(&tree, &data.message_bits)?;
	log::debug!(
		"decompressed {} message bits into {} symbols",
		data.message_bits.len(),
		text.chars().count()
	);
	Ok(text)
}

/// Predict compression of `text` from its symbol counts without encoding it.
pub fn estimate_compression(text: &str, config: &CodecConfig) -> Result<CompressionStats> {
	let frequencies = count_frequencies(text);
	let tree = build_from_frequencies(&frequencies, config.tie_break)?;
	let table = make_key(&tree)?;

	let message_bits = expected_bits(&table, &frequencies)? as u64;
	let leaf_bytes: usize = table.keys().map(|c| c.len_utf8()).sum();
	let tree_bits = (2 * table.len() - 1) as u64 + 8 * leaf_bytes as u64;
	let original_size = text.len() as u64;
	let ratio = (8 * original_size) as f64 / (message_bits + tree_bits) as f64;

	Ok(CompressionStats { original_size, message_bits, tree_bits, ratio })
}
