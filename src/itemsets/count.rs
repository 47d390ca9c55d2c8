use rayon::prelude::*;

use crate::types::{Itemset, ItemsetCounts, SupportCount, Transaction};

/// Support of every candidate, index-aligned with `candidates`.
///
/// Transactions are split across the rayon pool. Each worker folds its own
/// partial count vector and the partials are summed once all workers finish.
pub fn count_support(candidates: &[Itemset], transactions: &[Transaction]) -> Vec<SupportCount> {
    if candidates.is_empty() {
        return vec![];
    }

    transactions
        .par_iter()
        .fold(
            || vec![0; candidates.len()],
            |mut counts: Vec<SupportCount>, transaction| {
                for (count, candidate) in counts.iter_mut().zip(candidates) {
                    if transaction.contains_all(candidate) {
                        *count += 1;
                    }
                }
                counts
            },
        )
        .reduce(
            || vec![0; candidates.len()],
            |mut total, partial| {
                total
                    .iter_mut()
                    .zip(partial)
                    .for_each(|(count, part)| *count += part);
                total
            },
        )
}

/// Candidates that occur in at least `min_support_count` transactions, with
/// their exact support.
pub fn generate_frequent_k_itemset_counts(
    candidates: Vec<Itemset>,
    transactions: &[Transaction],
    min_support_count: SupportCount,
) -> ItemsetCounts {
    let counts = count_support(&candidates, transactions);

    candidates
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count >= min_support_count)
        .collect()
}
