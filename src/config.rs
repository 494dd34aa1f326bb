use crate::error::HuffmanError;
use std::str::FromStr;

/// Deepest tree `unflatten` will rebuild unless configured otherwise.
///
/// Huffman trees grow logarithmically in the total symbol count, so any tree
/// built from an in-memory text stays well below this.
pub const MAX_TREE_DEPTH: usize = 256;

/// Order in which equal-weight entries leave the merge queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Most recently enqueued first.
    #[default]
    Lifo,
    /// Earliest enqueued first.
    Fifo,
}

#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub tie_break: TieBreak,
    pub strict: bool,
    pub max_tree_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Lifo,
            strict: false,
            max_tree_depth: MAX_TREE_DEPTH,
        }
    }
}

impl CodecConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Validate records and reject leftover tree data when decompressing.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }
}

impl FromStr for TieBreak {
    type Err = HuffmanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lifo" => Ok(TieBreak::Lifo),
            "fifo" => Ok(TieBreak::Fifo),
            _ => Err(HuffmanError::Config(format!("Invalid tie-break: {}", s))),
        }
    }
}
