use itertools::Itertools;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    config::validate_min_confidence,
    error::Result,
    itemsets::sorted_itemsets,
    rules::rule::Rule,
    types::{FrequentItemsets, ItemId, SupportCount},
};

/// Rules derived from a set of frequent itemsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    /// Splits skipped because their antecedent had no recorded support.
    pub missing_antecedents: usize,
}

/// Generate rules based on frequent itemsets
///
/// Itemsets are visited by size and then by items, and the splits of each
/// itemset in lexicographic order, so the output order is stable across runs.
pub fn generate_rules(min_conf: f64, counter: &FrequentItemsets) -> Result<RuleSet> {
    validate_min_confidence(min_conf)?;

    let per_itemset: Vec<(Vec<Rule>, usize)> = sorted_itemsets(counter)
        .into_par_iter()
        .filter(|(itemset, _)| itemset.len() > 1)
        .map(|(itemset, support)| rules_from_itemset(itemset, support, min_conf, counter))
        .collect();

    let mut rule_set = RuleSet::default();
    for (rules, missing) in per_itemset {
        rule_set.rules.extend(rules);
        rule_set.missing_antecedents += missing;
    }

    if rule_set.missing_antecedents > 0 {
        warn!(
            missing = rule_set.missing_antecedents,
            "skipped rules whose antecedent has no recorded support"
        );
    }
    info!(rules = rule_set.rules.len(), "generated rules");

    Ok(rule_set)
}

/// Every rule of a single itemset meeting `min_conf`, plus the number of splits
/// whose antecedent was missing from `counter`.
pub fn rules_from_itemset(
    itemset: &[ItemId],
    support: SupportCount,
    min_conf: f64,
    counter: &FrequentItemsets,
) -> (Vec<Rule>, usize) {
    let mut rules = vec![];
    let mut missing = 0;

    if itemset.len() < 2 {
        return (rules, missing);
    }

    for split in 1..itemset.len() {
        for antecedent in itemset.iter().copied().combinations(split) {
            match Rule::from_split(itemset, antecedent, support, counter) {
                Some(rule) if rule.confidence >= min_conf => rules.push(rule),
                Some(_) => {}
                None => missing += 1,
            }
        }
    }

    (rules, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinerError;
    use crate::types::Itemset;
    use maplit::hashmap;

    fn counter() -> FrequentItemsets {
        hashmap! {
            vec![1] => 9,
            vec![2] => 8,
            vec![3] => 12,
            vec![4] => 13,
            vec![1, 2] => 4,
            vec![1, 3] => 5,
            vec![1, 4] => 6,
            vec![2, 3] => 3,
            vec![2, 4] => 5,
            vec![3, 4] => 3,
            vec![1, 2, 3] => 3,
            vec![1, 2, 4] => 3,
            vec![1, 3, 4] => 3,
            vec![2, 3, 4] => 3,
            vec![1, 2, 3, 4] => 2,
        }
    }

    #[test]
    fn basket_scenario() {
        // a = 0, b = 1
        let counter = hashmap! {
            vec![0] => 4,
            vec![1] => 3,
            vec![0, 1] => 3,
        };
        let rule_set = generate_rules(0.6, &counter).unwrap();

        assert_eq!(rule_set.missing_antecedents, 0);
        assert_eq!(
            rule_set.rules,
            vec![
                Rule { split: 1, combi: vec![0, 1], support: 3, confidence: 0.75 },
                Rule { split: 1, combi: vec![1, 0], support: 3, confidence: 1.0 },
            ]
        );
    }

    #[test]
    fn threshold_filters_rules() {
        let counter = hashmap! {
            vec![0] => 4,
            vec![1] => 3,
            vec![0, 1] => 3,
        };
        let rule_set = generate_rules(0.8, &counter).unwrap();

        assert_eq!(rule_set.rules.len(), 1);
        assert_eq!(rule_set.rules[0].get_antecedent(), &[1]);
    }

    #[test]
    fn every_split_is_enumerated_at_zero_confidence() {
        let rule_set = generate_rules(0.0, &counter()).unwrap();

        // 6 pairs * 2 + 4 triples * 6 + 1 quadruple * 14
        assert_eq!(rule_set.rules.len(), 12 + 24 + 14);
        assert_eq!(rule_set.missing_antecedents, 0);
    }

    #[test]
    fn confidence_matches_supports() {
        let counter = counter();
        let rule_set = generate_rules(0.5, &counter).unwrap();

        assert!(!rule_set.rules.is_empty());
        for rule in &rule_set.rules {
            let mut union: Itemset = rule.combi.clone();
            union.sort_unstable();
            let antecedent_support = counter[rule.get_antecedent()] as f64;

            assert_eq!(rule.support, counter[&union]);
            assert!((rule.confidence - rule.support as f64 / antecedent_support).abs() < 1e-9);
            assert!(rule.confidence >= 0.5);
            assert!(rule
                .get_antecedent()
                .iter()
                .all(|item| !rule.get_consequent().contains(item)));
        }
    }

    #[test]
    fn raising_min_conf_only_removes_rules() {
        let counter = counter();
        let low = generate_rules(0.3, &counter).unwrap().rules;
        let high = generate_rules(0.6, &counter).unwrap().rules;

        assert!(high.len() < low.len());
        assert!(high.iter().all(|rule| low.contains(rule)));
    }

    #[test]
    fn splits_follow_lexicographic_order() {
        let (rules, _) = rules_from_itemset(&[1, 2, 3], 3, 0.0, &counter());
        let antecedents: Vec<Itemset> = rules
            .iter()
            .map(|rule| rule.get_antecedent().to_vec())
            .collect();

        assert_eq!(
            antecedents,
            vec![vec![1], vec![2], vec![3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
    }

    #[test]
    fn missing_antecedent_is_skipped_and_counted() {
        // {2} was never recorded
        let counter = hashmap! {
            vec![1] => 4,
            vec![1, 2] => 3,
        };
        let rule_set = generate_rules(0.0, &counter).unwrap();

        assert_eq!(rule_set.missing_antecedents, 1);
        assert_eq!(
            rule_set.rules,
            vec![Rule { split: 1, combi: vec![1, 2], support: 3, confidence: 0.75 }]
        );
    }

    #[test]
    fn singletons_give_no_rules() {
        let counter = hashmap! { vec![1] => 4, vec![2] => 2 };
        let rule_set = generate_rules(0.0, &counter).unwrap();

        assert_eq!(rule_set, RuleSet::default());
        assert_eq!(rules_from_itemset(&[1], 4, 0.0, &counter), (vec![], 0));
    }

    #[test]
    fn empty_input_gives_no_rules() {
        let rule_set = generate_rules(0.5, &FrequentItemsets::new()).unwrap();
        assert!(rule_set.rules.is_empty());
    }

    #[test]
    fn invalid_confidence_is_rejected() {
        let err = generate_rules(1.5, &counter()).unwrap_err();
        assert!(matches!(err, MinerError::InvalidThreshold(_)));
    }

    #[test]
    fn repeated_runs_agree() {
        let counter = counter();
        assert_eq!(
            generate_rules(0.4, &counter).unwrap(),
            generate_rules(0.4, &counter).unwrap()
        );
    }
}
