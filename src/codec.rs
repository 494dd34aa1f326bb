//! Message coding against an encoding tree
//!
//! Encoding goes through a code table derived from the tree (symbol -> path
//! bits). Decoding walks the tree directly, one bit per edge, restarting at
//! the root after every leaf.

use crate::analyzer::FrequencyTable;
use crate::bits::Bit;
use crate::error::{HuffmanError, Result};
use crate::tree::EncodingTreeNode;
use std::collections::BTreeMap;

/// Symbol -> code bits.
pub type CodeTable = BTreeMap<char, Vec<Bit>>;

/// Derives the code of every leaf from its root-to-leaf path.
///
/// A bare leaf has no path and is rejected with [`HuffmanError::InvalidTree`].
pub fn make_key(tree: &EncodingTreeNode) -> Result<CodeTable> {
    if tree.is_leaf() {
        return Err(HuffmanError::InvalidTree("a single leaf has no code".to_string()));
    }
    let mut table = CodeTable::new();
    let mut path = Vec::with_capacity(tree.height());
    collect_codes(tree, &mut path, &mut table);
    Ok(table)
}

fn collect_codes(node: &EncodingTreeNode, path: &mut Vec<Bit>, table: &mut CodeTable) {
    match node {
        EncodingTreeNode::Leaf { symbol } => {
            table.insert(*symbol, path.clone());
        }
        EncodingTreeNode::Internal { zero, one } => {
            path.push(Bit::Zero);
            collect_codes(zero, path, table);
            path.pop();
            path.push(Bit::One);
            collect_codes(one, path, table);
            path.pop();
        }
    }
}

/// Encodes `text` against `tree`.
pub fn encode_text(tree: &EncodingTreeNode, text: &str) -> Result<Vec<Bit>> {
    let table = make_key(tree)?;
    encode_with_table(&table, text)
}

fn encode_with_table(table: &CodeTable, text: &str) -> Result<Vec<Bit>> {
    let mut bits = Vec::new();
    for symbol in text.chars() {
        let code = table.get(&symbol).ok_or(HuffmanError::MissingSymbol(symbol))?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Decodes `bits` against `tree`.
///
/// Fails with [`HuffmanError::MalformedStream`] when the bits stop in the
/// middle of a code.
pub fn decode_text(tree: &EncodingTreeNode, bits: &[Bit]) -> Result<String> {
    if tree.is_leaf() {
        return Err(HuffmanError::InvalidTree("cannot decode against a single leaf".to_string()));
    }

    let mut result = String::new();
    let mut current = tree;
    let mut pending = 0usize;
    for &bit in bits {
        // Cursor is always internal here: it is reset to the root after every leaf.
        let (zero, one) = current
            .children()
            .ok_or_else(|| HuffmanError::InvalidTree("decoding cursor stopped on a leaf".to_string()))?;
        current = match bit {
            Bit::Zero => zero,
            Bit::One => one,
        };
        pending += 1;
        if let EncodingTreeNode::Leaf { symbol } = current {
            result.push(*symbol);
            current = tree;
            pending = 0;
        }
    }

    if pending > 0 {
        return Err(HuffmanError::MalformedStream(format!(
            "message ended {} bits into a code after {} symbols",
            pending,
            result.chars().count()
        )));
    }
    Ok(result)
}

/// Length in bits of a message with the given symbol counts.
pub fn expected_bits(table: &CodeTable, frequencies: &FrequencyTable) -> Result<usize> {
    frequencies
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(symbol, &count)| {
            table
                .get(symbol)
                .map(|code| code.len() * count)
                .ok_or(HuffmanError::MissingSymbol(*symbol))
        })
        .sum()
}

/// A tree together with its derived code table, for coding many messages
/// against the same tree.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: EncodingTreeNode,
    table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(tree: EncodingTreeNode) -> Result<Self> {
        let table = make_key(&tree)?;
        log::trace!("code table holds {} symbols", table.len());
        Ok(Self { tree, table })
    }

    pub fn tree(&self) -> &EncodingTreeNode {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn code(&self, symbol: char) -> Option<&[Bit]> {
        self.table.get(&symbol).map(Vec::as_slice)
    }

    pub fn encode(&self, text: &str) -> Result<Vec<Bit>> {
        encode_with_table(&self.table, text)
    }

    pub fn decode(&self, bits: &[Bit]) -> Result<String> {
        decode_text(&self.tree, bits)
    }

    pub fn into_tree(self) -> EncodingTreeNode {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::count_frequencies;
    use crate::bits::{from_digits, parse};
    use crate::builder::build_huffman_tree;
    use crate::tree::example_tree;

    #[test]
    fn test_make_key_reference_tree() {
        let table = make_key(&example_tree()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table[&'T'], parse("0").unwrap());
        assert_eq!(table[&'R'], parse("100").unwrap());
        assert_eq!(table[&'S'], parse("101").unwrap());
        assert_eq!(table[&'E'], parse("11").unwrap());
    }

    #[test]
    fn test_make_key_rejects_leaf() {
        let result = make_key(&EncodingTreeNode::leaf('a'));
        assert!(matches!(result, Err(HuffmanError::InvalidTree(_))));
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let tree = build_huffman_tree("Nana Nana Nana Nana Nana Nana Nana Nana Batman").unwrap();
        let table = make_key(&tree).unwrap();
        let codes: Vec<&Vec<Bit>> = table.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_encode_reference_tree() {
        let tree = example_tree();
        assert_eq!(encode_text(&tree, "E").unwrap(), from_digits(&[1, 1]).unwrap());
        assert_eq!(encode_text(&tree, "SET").unwrap(), from_digits(&[1, 0, 1, 1, 1, 0]).unwrap());
        assert_eq!(
            encode_text(&tree, "STREETS").unwrap(),
            from_digits(&[1, 0, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1]).unwrap()
        );
        assert!(encode_text(&tree, "").unwrap().is_empty());
    }

    #[test]
    fn test_encode_missing_symbol() {
        let result = encode_text(&example_tree(), "TEXT");
        assert_eq!(result, Err(HuffmanError::MissingSymbol('X')));
    }

    #[test]
    fn test_decode_reference_tree() {
        let tree = example_tree();
        assert_eq!(decode_text(&tree, &from_digits(&[1, 1]).unwrap()).unwrap(), "E");
        assert_eq!(decode_text(&tree, &from_digits(&[1, 0, 1, 1, 1, 0]).unwrap()).unwrap(), "SET");
        let streets = from_digits(&[1, 0, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1]).unwrap();
        assert_eq!(decode_text(&tree, &streets).unwrap(), "STREETS");
        assert_eq!(decode_text(&tree, &[]).unwrap(), "");
    }

    #[test]
    fn test_decode_truncated() {
        let tree = example_tree();
        // "S" is 101; stop one bit short.
        let result = decode_text(&tree, &from_digits(&[0, 1, 0]).unwrap());
        assert!(matches!(result, Err(HuffmanError::MalformedStream(_))));
        let result = decode_text(&tree, &[Bit::One]);
        assert!(matches!(result, Err(HuffmanError::MalformedStream(_))));
    }

    #[test]
    fn test_decode_rejects_leaf() {
        let result = decode_text(&EncodingTreeNode::leaf('a'), &[Bit::Zero]);
        assert!(matches!(result, Err(HuffmanError::InvalidTree(_))));
    }

    #[test]
    fn test_expected_bits() {
        let text = "STREETTEST";
        let table = make_key(&example_tree()).unwrap();
        let frequencies = count_frequencies(text);
        let expected = expected_bits(&table, &frequencies).unwrap();
        assert_eq!(expected, encode_text(&example_tree(), text).unwrap().len());
        assert_eq!(expected, 19);

        let frequencies = count_frequencies("TAX");
        assert_eq!(expected_bits(&table, &frequencies), Err(HuffmanError::MissingSymbol('A')));
    }

    #[test]
    fn test_codec_reuse() {
        let codec = HuffmanCodec::new(example_tree()).unwrap();
        assert_eq!(codec.code('E'), Some(parse("11").unwrap().as_slice()));
        assert_eq!(codec.code('Z'), None);
        for text in ["TREES", "REST", "SETTER"] {
            let bits = codec.encode(text).unwrap();
            assert_eq!(codec.decode(&bits).unwrap(), text);
        }
        assert_eq!(codec.table().len(), 4);
        assert_eq!(codec.into_tree(), example_tree());
    }

    #[test]
    fn test_codec_rejects_leaf() {
        assert!(HuffmanCodec::new(EncodingTreeNode::leaf('a')).is_err());
    }
}
