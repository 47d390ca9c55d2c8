use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyString;

use crate::{
    config::MinerConfig,
    error::{MinerError, Result},
    loader::{collect_transaction, RawTransaction},
    report::Report,
    types::ItemsetLength,
};

type PyItemsets = Vec<(Vec<String>, u32)>;
type PyRules = Vec<(Vec<String>, Vec<String>, u32, f64)>;

impl From<MinerError> for PyErr {
    fn from(err: MinerError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Apriori algorithm for association rules.
///
/// Returns the frequent itemsets, the rules, and the number of rule splits
/// skipped because their antecedent had no recorded support.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence, max_len = None))]
fn apriori<'py>(
    py: Python<'py>,
    transactions: Vec<Bound<'py, PyAny>>,
    min_support: u32,
    min_confidence: f64,
    max_len: Option<ItemsetLength>,
) -> PyResult<(PyItemsets, PyRules, usize)> {
    let rows = transactions
        .iter()
        .enumerate()
        .map(|(index, entry)| extract_transaction(index, entry))
        .collect::<Result<Vec<RawTransaction>>>()?;

    let config = MinerConfig::new(min_support, min_confidence).with_max_len(max_len);
    let mined = py.allow_threads(|| crate::apriori(rows, &config))?;

    let (itemsets, rules) = convert_report(mined.report());
    Ok((itemsets, rules, mined.rule_set.missing_antecedents))
}

/// Any iterable of strings (list, tuple, set, frozenset, ...) is a transaction.
/// A bare string is not, even though it iterates.
fn extract_transaction(index: usize, entry: &Bound<'_, PyAny>) -> Result<RawTransaction> {
    let malformed = |reason: String| MinerError::MalformedTransaction { index, reason };

    if entry.is_instance_of::<PyString>() {
        return Err(malformed("expected a collection of items, got str".to_owned()));
    }
    let items = entry.iter().map_err(|err| malformed(err.to_string()))?;

    collect_transaction(
        index,
        items.map(|item| item.and_then(|item| item.extract::<String>())),
    )
}

fn convert_report(report: Report) -> (PyItemsets, PyRules) {
    let itemsets = report
        .frequent_itemsets
        .into_iter()
        .map(|record| (record.itemset, record.support))
        .collect();
    let rules = report
        .rules
        .into_iter()
        .map(|rule| (rule.antecedent, rule.consequent, rule.support, rule.confidence))
        .collect();
    (itemsets, rules)
}

#[pymodule]
fn marketminer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    Ok(())
}
