// src/report.rs
//! Summary statistics printed after generation (and shown in the
//! dashboard's summary panel).

use std::collections::{ BTreeMap, BTreeSet };
use std::fmt;

use crate::store::DataSet;

pub const REGION_COL: &str = "Region";
pub const SEGMENT_COL: &str = "SegmentName";
pub const AMOUNT_COL: &str = "PurchaseAmount";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub rows: usize,
    /// (column, distinct values), in column order.
    pub distinct: Vec<(String, usize)>,
    /// (value, share of rows), by descending share then name.
    pub region_shares: Vec<(String, f64)>,
    pub segment_shares: Vec<(String, f64)>,
    /// (segment, mean amount rounded to 2 decimals), by segment name.
    pub mean_amount_by_segment: Vec<(String, f64)>,
}

fn shares(ds: &DataSet, col: Option<usize>) -> Vec<(String, f64)> {
    let Some(col) = col else { return Vec::new() };
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &ds.rows {
        if let Some(v) = row.get(col) {
            *counts.entry(v.as_str()).or_default() += 1;
        }
    }
    let total = ds.rows.len().max(1) as f64;
    let mut out: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(k, n)| (s!(k), n as f64 / total))
        .collect();
    // BTreeMap order is by name; stable sort keeps it for equal shares
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Compute the summary of a table. Columns that are absent simply leave
/// their section empty.
pub fn summarize(ds: &DataSet) -> Summary {
    let width = ds.header_count().max(ds.rows.first().map(|r| r.len()).unwrap_or(0));
    let names: Vec<String> = match &ds.headers {
        Some(h) => h.clone(),
        None => (0..width).map(|i| format!("col{}", i + 1)).collect(),
    };

    let distinct = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let set: BTreeSet<&str> = ds.rows.iter().filter_map(|r| r.get(i)).map(|s| s.as_str()).collect();
            (name.clone(), set.len())
        })
        .collect();

    let mut mean_amount_by_segment = Vec::new();
    if let (Some(seg), Some(amt)) = (ds.column(SEGMENT_COL), ds.column(AMOUNT_COL)) {
        let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for row in &ds.rows {
            let (Some(s), Some(a)) = (row.get(seg), row.get(amt)) else { continue };
            let Ok(a) = a.trim().parse::<f64>() else { continue };
            let e = sums.entry(s.as_str()).or_insert((0.0, 0));
            e.0 += a;
            e.1 += 1;
        }
        mean_amount_by_segment = sums
            .into_iter()
            .map(|(k, (sum, n))| (s!(k), round2(sum / n as f64)))
            .collect();
    }

    Summary {
        rows: ds.row_count(),
        distinct,
        region_shares: shares(ds, ds.column(REGION_COL)),
        segment_shares: shares(ds, ds.column(SEGMENT_COL)),
        mean_amount_by_segment,
    }
}

fn label_width<'a, I: Iterator<Item = &'a String>>(labels: I) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;

        writeln!(f, "\nDistinct values per column:")?;
        let w = label_width(self.distinct.iter().map(|(k, _)| k));
        for (name, n) in &self.distinct {
            writeln!(f, "  {name:<w$}  {n}")?;
        }

        writeln!(f, "\n{REGION_COL} share:")?;
        let w = label_width(self.region_shares.iter().map(|(k, _)| k));
        for (name, share) in &self.region_shares {
            writeln!(f, "  {name:<w$}  {share:.6}")?;
        }

        writeln!(f, "\n{SEGMENT_COL} share:")?;
        let w = label_width(self.segment_shares.iter().map(|(k, _)| k));
        for (name, share) in &self.segment_shares {
            writeln!(f, "  {name:<w$}  {share:.6}")?;
        }

        writeln!(f, "\nMean {AMOUNT_COL} by {SEGMENT_COL}:")?;
        let w = label_width(self.mean_amount_by_segment.iter().map(|(k, _)| k));
        for (name, mean) in &self.mean_amount_by_segment {
            writeln!(f, "  {name:<w$}  {mean:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headerless_tables_get_numbered_columns() {
        let ds = DataSet { headers: None, rows: vec![vec![s!("a"), s!("b")], vec![s!("a"), s!("c")]] };
        let sum = summarize(&ds);
        assert_eq!(sum.distinct, vec![(s!("col1"), 1), (s!("col2"), 2)]);
        assert!(sum.region_shares.is_empty());
        assert!(sum.mean_amount_by_segment.is_empty());
    }

    #[test]
    fn empty_table_summarizes_to_zero() {
        let ds = DataSet { headers: Some(vec![s!(REGION_COL)]), rows: Vec::new() };
        let sum = summarize(&ds);
        assert_eq!(sum.rows, 0);
        assert_eq!(sum.distinct, vec![(s!(REGION_COL), 0)]);
        assert!(sum.to_string().starts_with("Rows: 0\n"));
    }
}
