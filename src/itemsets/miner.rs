use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    config::{validate_min_support, Pruning},
    error::Result,
    itemsets::{count::generate_frequent_k_itemset_counts, search::generate_candidates_from_prev},
    transactions::TransactionSet,
    types::{FrequentItemsets, Itemset, ItemsetLength, SupportCount},
};

/// What happened at one level of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    pub size: ItemsetLength,
    pub candidates: usize,
    pub frequent: usize,
}

/// Level-wise frequent itemset search.
///
/// Level 1 counts every distinct item. Each later level counts the candidates
/// built from the itemsets that were frequent one level below, and the search
/// stops as soon as a level has no candidates or nothing frequent, or once
/// `max_len` has been counted.
pub fn generate_frequent_itemsets(
    transactions: &TransactionSet,
    min_support: SupportCount,
    pruning: Pruning,
    max_len: Option<ItemsetLength>,
) -> Result<(FrequentItemsets, Vec<LevelStats>)> {
    validate_min_support(min_support)?;

    let mut all_frequent_itemsets: FrequentItemsets = HashMap::new();
    let mut stats = Vec::new();

    let mut size: ItemsetLength = 1;
    let mut candidates: Vec<Itemset> = (0..transactions.num_items()).map(|item| vec![item]).collect();

    while !candidates.is_empty() {
        let num_candidates = candidates.len();
        let frequent_itemset_counts = generate_frequent_k_itemset_counts(
            candidates,
            transactions.transactions(),
            min_support,
        );

        debug!(
            size,
            candidates = num_candidates,
            frequent = frequent_itemset_counts.len(),
            "counted level"
        );
        stats.push(LevelStats {
            size,
            candidates: num_candidates,
            frequent: frequent_itemset_counts.len(),
        });

        if frequent_itemset_counts.is_empty() || max_len.map_or(false, |max| size >= max) {
            all_frequent_itemsets.extend(frequent_itemset_counts);
            break;
        }

        size += 1;
        candidates = generate_candidates_from_prev(&frequent_itemset_counts, pruning);
        all_frequent_itemsets.extend(frequent_itemset_counts);
    }

    info!(
        transactions = transactions.len(),
        levels = stats.len(),
        frequent = all_frequent_itemsets.len(),
        "mined frequent itemsets"
    );

    Ok((all_frequent_itemsets, stats))
}
