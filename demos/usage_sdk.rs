use huffman_tree::config::{CodecConfig, TieBreak};
use huffman_tree::pipeline;

fn main() {
	env_logger::init();

	let text = "Nana Nana Nana Nana Nana Nana Nana Nana Batman";
	let cfg = CodecConfig::default().with_tie_break(TieBreak::Lifo);
	let (data, stats) = pipeline::compress_with_stats(text, &cfg).unwrap();
	println!(
		"compressed {} bytes -> {} message bits + {} tree bits ({:.2}x)",
		stats.original_size, stats.message_bits, stats.tree_bits, stats.ratio
	);
	println!("tree shape:  {}", huffman_tree::bits::to_string(&data.tree_shape));
	println!("tree leaves: {:?}", data.tree_leaves);

	let restored = pipeline::decompress(&data, &cfg.with_strict(true)).unwrap();
	println!("restored {:?}", restored);
}
