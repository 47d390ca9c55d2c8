use std::collections::HashMap;

use bitvec::vec::BitVec;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;
pub type Itemset = Vec<ItemId>;

pub type SupportCount = u32;
pub type ItemsetCounts = HashMap<Itemset, SupportCount>;

/// All frequent itemsets of every length, flattened into a single map.
pub type FrequentItemsets = ItemsetCounts;

pub type ItemsetLength = usize;

/// One purchase record: sorted, deduplicated item ids plus a membership bitmap
/// over the whole item universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: Vec<ItemId>,
    bits: BitVec,
}

impl Transaction {
    pub fn new(mut items: Vec<ItemId>, num_items: usize) -> Self {
        items.sort_unstable();
        items.dedup();

        let mut bits = BitVec::repeat(false, num_items);
        for &item in &items {
            bits.set(item, true);
        }

        Self { items, bits }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.bits.get(item).map_or(false, |bit| *bit)
    }

    /// Plain subset test; the transaction may hold items outside `itemset`.
    pub fn contains_all(&self, itemset: &[ItemId]) -> bool {
        itemset.len() <= self.items.len() && itemset.iter().all(|&item| self.contains(item))
    }
}
