//! Set operations over itemsets kept as strictly ascending id vectors.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{ItemId, Itemset};

/// Sorted union of two sorted itemsets.
pub fn union(a: &[ItemId], b: &[ItemId]) -> Itemset {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);

    merged
}

/// Items of `whole` that are not in `part`. Both sorted.
pub fn difference(whole: &[ItemId], part: &[ItemId]) -> Itemset {
    let mut rest = Vec::with_capacity(whole.len().saturating_sub(part.len()));
    let mut j = 0;

    for &item in whole {
        while j < part.len() && part[j] < item {
            j += 1;
        }
        if j < part.len() && part[j] == item {
            continue;
        }
        rest.push(item);
    }

    rest
}

/// True if every (k-1)-subset of `candidate` is in `frequent`.
pub fn all_subsets_frequent(candidate: &[ItemId], frequent: &HashSet<&[ItemId]>) -> bool {
    let mut subset: Itemset = Vec::with_capacity(candidate.len().saturating_sub(1));

    (0..candidate.len()).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item),
        );
        frequent.contains(subset.as_slice())
    })
}
