use serde::{Deserialize, Serialize};

use crate::{
    itemsets::sorted_itemsets,
    rules::{Rule, RuleSet},
    transactions::TransactionSet,
    types::{FrequentItemsets, SupportCount},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsetRecord {
    pub itemset: Vec<String>,
    pub support: SupportCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: SupportCount,
    pub confidence: f64,
}

/// Mining results with item ids resolved back to names.
///
/// Itemsets are ordered by size and then by item names, items inside every
/// itemset or rule side are sorted by name, and rules keep the order in which
/// they were generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub frequent_itemsets: Vec<ItemsetRecord>,
    pub rules: Vec<RuleRecord>,
}

impl Report {
    pub fn new(
        transactions: &TransactionSet,
        frequent_itemsets: &FrequentItemsets,
        rule_set: &RuleSet,
    ) -> Self {
        Self {
            frequent_itemsets: convert_itemset_counts(transactions, frequent_itemsets),
            rules: convert_rules(transactions, &rule_set.rules),
        }
    }
}

pub fn convert_itemset_counts(
    transactions: &TransactionSet,
    frequent_itemsets: &FrequentItemsets,
) -> Vec<ItemsetRecord> {
    sorted_itemsets(frequent_itemsets)
        .into_iter()
        .map(|(itemset, support)| ItemsetRecord {
            itemset: transactions.names(itemset),
            support,
        })
        .collect()
}

pub fn convert_rules(transactions: &TransactionSet, rules: &[Rule]) -> Vec<RuleRecord> {
    rules
        .iter()
        .map(|rule| RuleRecord {
            antecedent: transactions.names(rule.get_antecedent()),
            consequent: transactions.names(rule.get_consequent()),
            support: rule.support,
            confidence: rule.confidence,
        })
        .collect()
}
