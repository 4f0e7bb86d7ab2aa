// src/record.rs
//! Row types produced by the two pipelines.

use chrono::NaiveDate;

/// A record that knows its own column layout.
/// `to_row` must yield cells in `HEADERS` order.
pub trait Tabular {
    const HEADERS: &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

pub const DATE_FMT: &str = "%Y-%m-%d";

pub const CONTACT_HEADERS: &[&str] = &[
    "ContactID", "FullName", "Email", "Phone", "Gender", "AgeGroup", "Occupation",
    "City", "State", "Region", "Tier", "PurchaseID", "ProductCategory", "ProductName",
    "PurchaseAmount", "PurchaseDate", "PaymentMethod", "PreferredChannel",
    "PreferredLanguage", "ContactFrequency", "Rating", "Sentiment", "PreferredFestival",
    "SegmentName", "CreatedDate",
];

/// Column positions in `CONTACT_HEADERS` that other modules read back.
pub mod col {
    pub const GENDER: usize = 4;
    pub const AGE_GROUP: usize = 5;
    pub const REGION: usize = 9;
    pub const PURCHASE_AMOUNT: usize = 14;
    pub const PURCHASE_DATE: usize = 15;
    pub const LANGUAGE: usize = 18;
    pub const SEGMENT: usize = 23;
}

/// One fictitious CRM contact with a single purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    pub contact_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age_group: String,
    pub occupation: String,
    pub city: String,
    pub state: String,
    pub region: String,
    pub tier: String,
    pub purchase_id: String,
    pub product_category: String,
    pub product_name: String,
    /// Whole rupees, a multiple of 100.
    pub purchase_amount: u32,
    pub purchase_date: NaiveDate,
    pub payment_method: String,
    pub preferred_channel: String,
    pub preferred_language: String,
    pub contact_frequency: String,
    pub rating: u8,
    pub sentiment: String,
    pub preferred_festival: String,
    pub segment_name: String,
    pub created_date: NaiveDate,
}

impl Tabular for ContactRecord {
    const HEADERS: &'static [&'static str] = CONTACT_HEADERS;

    fn to_row(&self) -> Vec<String> {
        row![
            self.contact_id,
            self.full_name,
            self.email,
            self.phone,
            self.gender,
            self.age_group,
            self.occupation,
            self.city,
            self.state,
            self.region,
            self.tier,
            self.purchase_id,
            self.product_category,
            self.product_name,
            self.purchase_amount,
            self.purchase_date.format(DATE_FMT),
            self.payment_method,
            self.preferred_channel,
            self.preferred_language,
            self.contact_frequency,
            self.rating,
            self.sentiment,
            self.preferred_festival,
            self.segment_name,
            self.created_date.format(DATE_FMT),
        ]
    }
}

pub const PAGE_HEADERS: &[&str] = &["title", "content", "url"];

/// Title and body text of one fetched page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedPage {
    pub title: String,
    pub content: String,
    pub url: String,
}

impl Tabular for ScrapedPage {
    const HEADERS: &'static [&'static str] = PAGE_HEADERS;

    fn to_row(&self) -> Vec<String> {
        vec![self.title.clone(), self.content.clone(), self.url.clone()]
    }
}

/// `"CID"` + index zero-padded to five digits.
pub fn contact_id(index: usize) -> String {
    format!("CID{index:05}")
}

pub fn purchase_id(index: usize) -> String {
    format!("PID{index:05}")
}
