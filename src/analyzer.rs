//! Symbol frequency analysis
//!
//! Counts how often each symbol occurs. The table is ordered by symbol so
//! that everything built from it (leaf enqueue order, code tables) is
//! deterministic.

use std::collections::BTreeMap;

/// Symbol -> occurrence count.
pub type FrequencyTable = BTreeMap<char, usize>;

pub fn count_frequencies(text: &str) -> FrequencyTable {
    text.chars().fold(FrequencyTable::new(), |mut acc, symbol| {
        *acc.entry(symbol).or_insert(0) += 1;
        acc
    })
}

/// Number of symbols with a non-zero count.
pub fn distinct_symbols(frequencies: &FrequencyTable) -> usize {
    frequencies.values().filter(|&&count| count > 0).count()
}

/// Shannon entropy in bits per symbol. This is the lower bound on the
/// average Huffman code length for the table.
pub fn entropy(frequencies: &FrequencyTable) -> f64 {
    let total: usize = frequencies.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    frequencies
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
