//! Frequent itemset mining and association rules with the Apriori algorithm.
//!
//! ```
//! use marketminer::{apriori, MinerConfig};
//!
//! let transactions = vec![
//!     vec!["a", "b"],
//!     vec!["a", "b", "c"],
//!     vec!["a"],
//!     vec!["a", "b", "d"],
//! ];
//! let mined = apriori(transactions, &MinerConfig::new(2, 0.6)).unwrap();
//! let report = mined.report();
//!
//! assert_eq!(report.frequent_itemsets.len(), 3);
//! assert_eq!(report.rules.len(), 2);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod itemsets;
pub mod loader;
pub mod output;
pub mod report;
pub mod rules;
pub mod transactions;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::{MinerConfig, Pruning};
pub use error::{MinerError, Result};
pub use itemsets::miner::{generate_frequent_itemsets, LevelStats};
pub use report::Report;
pub use rules::{generate_rules, Rule, RuleSet};
pub use transactions::TransactionSet;
pub use types::{FrequentItemsets, ItemId, Itemset, SupportCount};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Mined {
    pub transactions: TransactionSet,
    pub frequent_itemsets: FrequentItemsets,
    pub levels: Vec<LevelStats>,
    pub rule_set: RuleSet,
}

impl Mined {
    pub fn report(&self) -> Report {
        Report::new(&self.transactions, &self.frequent_itemsets, &self.rule_set)
    }
}

/// Validates `config`, mines frequent itemsets from `rows` and derives rules
/// from them.
pub fn apriori<R, I, S>(rows: R, config: &MinerConfig) -> Result<Mined>
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.validate()?;

    let transactions = TransactionSet::from_rows(rows);
    let (frequent_itemsets, levels) = generate_frequent_itemsets(
        &transactions,
        config.min_support,
        config.pruning,
        config.max_len,
    )?;
    let rule_set = generate_rules(config.min_confidence, &frequent_itemsets)?;

    Ok(Mined {
        transactions,
        frequent_itemsets,
        levels,
        rule_set,
    })
}
