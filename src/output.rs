use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::{error::Result, report::Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Tsv,
}

impl OutputFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Json => "output.json",
            OutputFormat::Tsv => "output.tsv",
        }
    }
}

/// `{"frequent_itemsets": [...], "rules": [...]}`, indented by four spaces.
pub fn write_json<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    report.serialize(&mut serializer)?;
    Ok(())
}

/// One line per itemset (items, support), a blank line, then one line per
/// rule (antecedent items, consequent items, support, confidence). All fields
/// are tab separated.
pub fn write_tsv<W: Write>(report: &Report, mut writer: W) -> Result<()> {
    for record in &report.frequent_itemsets {
        writeln!(writer, "{}\t{}", record.itemset.join("\t"), record.support)?;
    }
    writeln!(writer)?;
    for rule in &report.rules {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            rule.antecedent.join("\t"),
            rule.consequent.join("\t"),
            rule.support,
            format_confidence(rule.confidence)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Plain decimal notation that always keeps a decimal point (`1.0`, `0.00005`).
fn format_confidence(confidence: f64) -> String {
    let mut text = confidence.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Writes the report into `dir`, creating it if needed, and returns the path
/// of the written file.
pub fn save_output(report: &Report, dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());
    let mut writer = BufWriter::new(fs::File::create(&path)?);

    match format {
        OutputFormat::Json => write_json(report, &mut writer)?,
        OutputFormat::Tsv => write_tsv(report, &mut writer)?,
    }
    writer.flush()?;

    info!(path = %path.display(), "wrote output");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ItemsetRecord, RuleRecord};

    fn report() -> Report {
        Report {
            frequent_itemsets: vec![
                ItemsetRecord { itemset: vec!["a".into()], support: 4 },
                ItemsetRecord { itemset: vec!["b".into()], support: 3 },
                ItemsetRecord { itemset: vec!["a".into(), "b".into()], support: 3 },
            ],
            rules: vec![
                RuleRecord {
                    antecedent: vec!["a".into()],
                    consequent: vec!["b".into()],
                    support: 3,
                    confidence: 0.75,
                },
                RuleRecord {
                    antecedent: vec!["b".into()],
                    consequent: vec!["a".into()],
                    support: 3,
                    confidence: 1.0,
                },
            ],
        }
    }

    #[test]
    fn tsv_layout() {
        let mut buffer = Vec::new();
        write_tsv(&report(), &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "a\t4\nb\t3\na\tb\t3\n\na\tb\t3\t0.75\nb\ta\t3\t1.0\n"
        );
    }

    #[test]
    fn tsv_small_confidence() {
        let report = Report {
            frequent_itemsets: vec![],
            rules: vec![RuleRecord {
                antecedent: vec!["a".into()],
                consequent: vec!["b".into()],
                support: 1,
                confidence: 1.0 / 20000.0,
            }],
        };
        let mut buffer = Vec::new();
        write_tsv(&report, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "\na\tb\t1\t0.00005\n");
    }

    #[test]
    fn confidence_always_has_a_decimal_point() {
        assert_eq!(format_confidence(1.0), "1.0");
        assert_eq!(format_confidence(0.0), "0.0");
        assert_eq!(format_confidence(0.75), "0.75");
        assert_eq!(format_confidence(1e-7), "0.0000001");
    }

    #[test]
    fn tsv_of_empty_report_is_a_blank_line() {
        let mut buffer = Vec::new();
        write_tsv(&Report::default(), &mut buffer).unwrap();
        assert_eq!(buffer, b"\n");
    }

    #[test]
    fn json_document() {
        let mut buffer = Vec::new();
        write_json(&report(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("{\n    \"frequent_itemsets\": [\n"));
        let parsed: Report = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report());

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rules"][0]["antecedent"][0], "a");
        assert_eq!(value["rules"][1]["confidence"], 1.0);
        assert_eq!(value["frequent_itemsets"][2]["support"], 3);
    }

    #[test]
    fn file_names() {
        assert_eq!(OutputFormat::Json.file_name(), "output.json");
        assert_eq!(OutputFormat::Tsv.file_name(), "output.tsv");
    }

    #[test]
    fn save_output_creates_directory() {
        let dir = std::env::temp_dir().join(format!("marketminer-output-{}", std::process::id()));
        let path = save_output(&report(), &dir, OutputFormat::Tsv).unwrap();

        assert_eq!(path, dir.join("output.tsv"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("a\t4\n"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
