use std::collections::{BTreeSet, HashMap};

use crate::types::{ItemId, ItemName, Itemset, Transaction};

/// Interned transaction batch.
///
/// Every distinct token gets a dense [`ItemId`]. Ids follow the lexicographic
/// order of the tokens, so sorting itemsets by id sorts them by name.
#[derive(Debug, Clone, Default)]
pub struct TransactionSet {
    inventory: Vec<String>,
    reverse_lookup: HashMap<String, ItemId>,
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    pub fn from_rows<R, I, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_transactions: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|item| item.as_ref().to_owned()).collect())
            .collect();

        let names: BTreeSet<ItemName> = raw_transactions
            .iter()
            .flat_map(|row| row.iter().map(String::as_str))
            .collect();
        let inventory: Vec<String> = names.into_iter().map(str::to_owned).collect();
        let reverse_lookup: HashMap<String, ItemId> = inventory
            .iter()
            .enumerate()
            .map(|(item_id, name)| (name.clone(), item_id))
            .collect();

        let num_items = inventory.len();
        let transactions = raw_transactions
            .iter()
            .map(|row| {
                let items = row.iter().map(|name| reverse_lookup[name]).collect();
                Transaction::new(items, num_items)
            })
            .collect();

        Self {
            inventory,
            reverse_lookup,
            transactions,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.reverse_lookup.get(name).copied()
    }

    pub fn item_name(&self, item_id: ItemId) -> Option<ItemName<'_>> {
        self.inventory.get(item_id).map(String::as_str)
    }

    /// Ids for `names`, sorted. `None` if any name never occurs in the batch.
    pub fn itemset(&self, names: &[&str]) -> Option<Itemset> {
        let mut itemset = names
            .iter()
            .map(|name| self.item_id(name))
            .collect::<Option<Itemset>>()?;
        itemset.sort_unstable();
        itemset.dedup();
        Some(itemset)
    }

    /// Names for `itemset`, in id (and therefore lexicographic) order.
    pub fn names(&self, itemset: &[ItemId]) -> Vec<String> {
        itemset
            .iter()
            .filter_map(|&item_id| self.item_name(item_id))
            .map(str::to_owned)
            .collect()
    }
}
