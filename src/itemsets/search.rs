use std::collections::{BTreeSet, HashSet};

use crate::{
    combi::{all_subsets_frequent, union},
    config::Pruning,
    types::{ItemId, Itemset, ItemsetCounts},
};

/// Next-level candidates from the itemsets found frequent at the previous level.
///
/// Every pair of previous itemsets is unioned and the union kept when it is
/// exactly one item larger. With [`Pruning::Weak`] a candidate may still hold
/// an infrequent (k-1)-subset; [`Pruning::Full`] drops those.
pub fn generate_candidates_from_prev(prev: &ItemsetCounts, pruning: Pruning) -> Vec<Itemset> {
    let mut itemsets: Vec<&[ItemId]> = prev.keys().map(Vec::as_slice).collect();
    itemsets.sort_unstable();

    let candidates = join_step(&itemsets);

    match pruning {
        Pruning::Weak => candidates,
        Pruning::Full => {
            let frequent: HashSet<&[ItemId]> = itemsets.iter().copied().collect();
            candidates
                .into_iter()
                .filter(|candidate| all_subsets_frequent(candidate, &frequent))
                .collect()
        }
    }
}

/// Distinct unions of size `k` over all pairs of `(k-1)`-itemsets, ascending.
pub fn join_step(itemsets: &[&[ItemId]]) -> Vec<Itemset> {
    let Some(first) = itemsets.first() else {
        return vec![];
    };
    let size = first.len() + 1;
    debug_assert!(itemsets.iter().all(|itemset| itemset.len() + 1 == size));

    // an itemset unioned with itself never grows, so only distinct pairs matter
    let mut candidates: BTreeSet<Itemset> = BTreeSet::new();
    for (i, a) in itemsets.iter().enumerate() {
        for b in &itemsets[i + 1..] {
            let merged = union(a, b);
            if merged.len() == size {
                candidates.insert(merged);
            }
        }
    }

    candidates.into_iter().collect()
}
