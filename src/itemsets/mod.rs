pub mod count;
pub mod miner;
pub mod search;

use crate::types::{FrequentItemsets, Itemset, SupportCount};

/// Frequent itemsets ordered by size, then lexicographically by item id.
pub fn sorted_itemsets(frequent_itemsets: &FrequentItemsets) -> Vec<(&Itemset, SupportCount)> {
    let mut itemsets: Vec<(&Itemset, SupportCount)> = frequent_itemsets
        .iter()
        .map(|(itemset, &support)| (itemset, support))
        .collect();
    itemsets.sort_unstable_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    itemsets
}
