use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{MinerError, Result};
use crate::types::{ItemsetLength, SupportCount};

/// How next-level candidates are filtered after the pairwise union join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pruning {
    /// Keep every union of two frequent (k-1)-itemsets that has exactly k items.
    #[default]
    Weak,
    /// Additionally require every (k-1)-subset of a candidate to be frequent.
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Absolute number of transactions an itemset must appear in.
    pub min_support: SupportCount,
    pub min_confidence: f64,
    #[serde(default)]
    pub pruning: Pruning,
    /// Largest itemset size to explore. `None` mines until exhaustion.
    #[serde(default)]
    pub max_len: Option<ItemsetLength>,
}

impl MinerConfig {
    pub fn new(min_support: SupportCount, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            pruning: Pruning::default(),
            max_len: None,
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_max_len(mut self, max_len: Option<ItemsetLength>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_min_support(self.min_support)?;
        validate_min_confidence(self.min_confidence)?;
        if self.max_len == Some(0) {
            return Err(MinerError::InvalidThreshold(
                "max_len must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_min_support(min_support: SupportCount) -> Result<()> {
    if min_support == 0 {
        return Err(MinerError::InvalidThreshold(
            "min_support must be a positive count".to_owned(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_min_confidence(min_confidence: f64) -> Result<()> {
    // NaN fails the range check as well
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(MinerError::InvalidThreshold(format!(
            "min_confidence must lie in [0, 1], got {}",
            min_confidence
        )));
    }
    Ok(())
}
