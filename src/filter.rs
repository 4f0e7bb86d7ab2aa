// src/filter.rs
//! Row filters for the contacts table (the dashboard's side panel).
//!
//! Works on raw string rows in `CONTACT_HEADERS` order so it applies the
//! same way to freshly generated data and to a loaded CSV. An unset
//! criterion keeps every row.

use std::fmt;

use chrono::{ NaiveDate, TimeDelta };

use crate::record::{ DATE_FMT, col };
use crate::store::DataSet;

/// Upper end of the amount sliders (10 lakh rupees).
pub const AMOUNT_CEILING: u32 = 1_000_000;
const LAKH: f64 = 100_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityWindow {
    #[default]
    Any,
    LastWeek,
    LastMonth,
    Last90Days,
}

impl ActivityWindow {
    pub const ALL: [ActivityWindow; 4] = [
        ActivityWindow::Any,
        ActivityWindow::LastWeek,
        ActivityWindow::LastMonth,
        ActivityWindow::Last90Days,
    ];

    pub fn days(&self) -> Option<i64> {
        match self {
            ActivityWindow::Any => None,
            ActivityWindow::LastWeek => Some(7),
            ActivityWindow::LastMonth => Some(30),
            ActivityWindow::Last90Days => Some(90),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityWindow::Any => "All",
            ActivityWindow::LastWeek => "Last Week",
            ActivityWindow::LastMonth => "Last Month",
            ActivityWindow::Last90Days => "Last 90 Days",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFilter {
    pub age_group: Option<String>,
    pub region: Option<String>,
    /// Empty = all genders.
    pub genders: Vec<String>,
    pub language: Option<String>,
    pub activity: ActivityWindow,
    /// Date the activity window counts back from.
    pub reference_date: Option<NaiveDate>,
    pub min_amount: u32,
    pub max_amount: u32,
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self {
            age_group: None,
            region: None,
            genders: Vec::new(),
            language: None,
            activity: ActivityWindow::Any,
            reference_date: None,
            min_amount: 0,
            max_amount: AMOUNT_CEILING,
        }
    }
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(|s| s.as_str()).unwrap_or("")
}

fn eq_opt(want: &Option<String>, got: &str) -> bool {
    want.as_deref().is_none_or(|w| w == got)
}

impl ContactFilter {
    pub fn is_active(&self) -> bool {
        *self != Self { reference_date: self.reference_date, ..Self::default() }
    }

    pub fn toggle_gender(&mut self, g: &str) {
        match self.genders.iter().position(|x| x == g) {
            Some(i) => { self.genders.remove(i); }
            None => self.genders.push(s!(g)),
        }
    }

    pub fn matches(&self, row: &[String]) -> bool {
        if !eq_opt(&self.age_group, cell(row, col::AGE_GROUP)) { return false; }
        if !eq_opt(&self.region, cell(row, col::REGION)) { return false; }
        if !eq_opt(&self.language, cell(row, col::LANGUAGE)) { return false; }
        if !self.genders.is_empty() && !self.genders.iter().any(|g| g == cell(row, col::GENDER)) {
            return false;
        }

        if self.min_amount > 0 || self.max_amount < AMOUNT_CEILING {
            let Ok(amount) = cell(row, col::PURCHASE_AMOUNT).trim().parse::<f64>() else { return false };
            if amount < f64::from(self.min_amount) || amount > f64::from(self.max_amount) {
                return false;
            }
        }

        if let (Some(days), Some(reference)) = (self.activity.days(), self.reference_date) {
            let Ok(date) = NaiveDate::parse_from_str(cell(row, col::PURCHASE_DATE), DATE_FMT) else {
                return false;
            };
            if date > reference || date < reference - TimeDelta::days(days) {
                return false;
            }
        }
        true
    }

    /// Rows of `ds` that pass, headers kept.
    pub fn apply(&self, ds: &DataSet) -> DataSet {
        DataSet {
            headers: ds.headers.clone(),
            rows: ds.rows.iter().filter(|r| self.matches(r)).cloned().collect(),
        }
    }
}

/// One-paragraph description of the active criteria.
impl fmt::Display for ContactFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_all = |v: &Option<String>| v.clone().unwrap_or_else(|| s!("All"));
        let genders = if self.genders.is_empty() { s!("All") } else { self.genders.join(", ") };
        write!(
            f,
            "Age Group: {}, Region: {}, Gender: {}, Language: {}, Purchase Activity: {}, \
             Purchase Amount: Min: {:.2} Lakh / Max: {:.2} Lakh",
            or_all(&self.age_group),
            or_all(&self.region),
            genders,
            or_all(&self.language),
            self.activity.label(),
            f64::from(self.min_amount) / LAKH,
            f64::from(self.max_amount) / LAKH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive_and_describes_all() {
        let f = ContactFilter::default();
        assert!(!f.is_active());
        assert_eq!(
            f.to_string(),
            "Age Group: All, Region: All, Gender: All, Language: All, Purchase Activity: All, \
             Purchase Amount: Min: 0.00 Lakh / Max: 10.00 Lakh"
        );
    }

    #[test]
    fn toggle_gender_adds_then_removes() {
        let mut f = ContactFilter::default();
        f.toggle_gender("F");
        assert_eq!(f.genders, vec![s!("F")]);
        assert!(f.is_active());
        f.toggle_gender("F");
        assert!(f.genders.is_empty());
    }

    #[test]
    fn short_rows_do_not_panic() {
        let f = ContactFilter { region: Some(s!("North")), ..ContactFilter::default() };
        assert!(!f.matches(&[s!("CID00001")]));
    }
}
