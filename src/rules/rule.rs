use crate::{
    combi::difference,
    types::{FrequentItemsets, ItemId, Itemset, SupportCount},
};

/// An association rule `antecedent => consequent`.
///
/// `combi` holds the antecedent items followed by the consequent items, each
/// side sorted, and `split` marks where the antecedent ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub split: usize,
    pub combi: Vec<ItemId>,
    /// Support of the whole itemset, not of either side.
    pub support: SupportCount,
    pub confidence: f64,
}

impl Rule {
    /// Splits `itemset` into `antecedent` and the remaining items and scores
    /// the split. `None` when the antecedent has no recorded support.
    pub fn from_split(
        itemset: &[ItemId],
        antecedent: Itemset,
        support: SupportCount,
        counter: &FrequentItemsets,
    ) -> Option<Rule> {
        let antecedent_support = counter.get(&antecedent).copied()?;
        let consequent = difference(itemset, &antecedent);

        let split = antecedent.len();
        let mut combi = antecedent;
        combi.extend(consequent);

        Some(Rule {
            split,
            combi,
            support,
            confidence: support as f64 / antecedent_support as f64,
        })
    }

    pub fn get_antecedent(&self) -> &[ItemId] {
        &self.combi[..self.split]
    }

    pub fn get_consequent(&self) -> &[ItemId] {
        &self.combi[self.split..]
    }
}
