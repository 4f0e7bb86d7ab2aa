// tests/synthesis_invariants.rs
use chrono::{ NaiveDate, TimeDelta };
use proptest::prelude::*;

use crm_synth::config::options::GenerateOptions;
use crm_synth::csv::to_export_string;
use crm_synth::error::{ Error, TableError };
use crm_synth::generate::{ generate, generate_with };
use crm_synth::persona::IndianNames;
use crm_synth::record::{ CONTACT_HEADERS, ContactRecord, Tabular };
use crm_synth::reference::{ self, ReferenceTables, lookup };
use crm_synth::store::DataSet;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn opts(count: usize, seed: u64) -> GenerateOptions {
    GenerateOptions { count, seed, today: Some(fixed_today()), ..GenerateOptions::default() }
}

fn check_record(rec: &ContactRecord, tables: &ReferenceTables, today: NaiveDate) {
    // geography
    let cities = lookup(&tables.cities, &rec.region).unwrap();
    assert!(cities.contains(&rec.city.as_str()), "{} not in {}", rec.city, rec.region);
    assert!(lookup(&tables.states, &rec.region).unwrap().contains(&rec.state.as_str()));
    assert!(lookup(&tables.languages, &rec.region).unwrap().contains(&rec.preferred_language.as_str()));
    assert!(lookup(&tables.festivals, &rec.region).unwrap().contains(&rec.preferred_festival.as_str()));
    assert_eq!(rec.tier, tables.tier_of(&rec.city));

    // product + amount
    let (min, max) = tables.price_band(&rec.product_category).unwrap();
    assert!(rec.purchase_amount >= min && rec.purchase_amount <= max);
    assert_eq!(rec.purchase_amount % 100, 0);
    let sub = rec.product_name
        .strip_prefix(&format!("{} - ", rec.product_category))
        .unwrap();
    assert!(lookup(&tables.categories, &rec.product_category).unwrap().contains(&sub));

    // segment follows the amount's position in the band
    let amount = f64::from(rec.purchase_amount);
    if amount > 0.8 * f64::from(max) {
        assert!(lookup(&tables.segments, reference::PREMIUM).unwrap().contains(&rec.segment_name.as_str()));
    } else if amount < 1.2 * f64::from(min) {
        assert!(lookup(&tables.segments, reference::VALUE).unwrap().contains(&rec.segment_name.as_str()));
    }

    // payment
    if reference::DIGITAL_ONLY_AGES.contains(&rec.age_group.as_str()) {
        assert!(lookup(&tables.payment_methods, reference::DIGITAL)
            .unwrap()
            .contains(&rec.payment_method.as_str()));
    }

    // dates
    let age = (today - rec.created_date).num_days();
    assert!((30..=730).contains(&age), "created {age} days ago");
    let gap = (rec.purchase_date - rec.created_date).num_days();
    assert!((1..=365).contains(&gap));
    assert!(rec.purchase_date <= today + TimeDelta::days(335));

    // scalars
    assert!((1..=5).contains(&rec.rating));
    assert!(reference::GENDERS.contains(&rec.gender.as_str()));
    assert!(reference::AGE_GROUPS.contains(&rec.age_group.as_str()));
    assert!(tables.occupations.contains(&rec.occupation.as_str()));

    // phone: +91-<2-digit prefix><8 digits>
    let digits = rec.phone.strip_prefix("+91-").unwrap();
    assert_eq!(digits.len(), 10);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
    assert!(reference::PHONE_PREFIXES.contains(&&digits[..2]));

    assert!(rec.email.contains('@'));
    assert!(rec.full_name.contains(' '));
}

#[test]
fn three_records_have_all_columns() {
    let records = generate(&opts(3, 42), None).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(CONTACT_HEADERS.len(), 25);

    let ids: Vec<&str> = records.iter().map(|r| r.contact_id.as_str()).collect();
    assert_eq!(ids, ["CID00001", "CID00002", "CID00003"]);
    assert_eq!(records[2].purchase_id, "PID00003");

    for rec in &records {
        let row = rec.to_row();
        assert_eq!(row.len(), CONTACT_HEADERS.len());
        assert!(row.iter().all(|c| !c.is_empty()));
    }
}

#[test]
fn same_seed_same_bytes() {
    let render = || {
        let records = generate(&opts(200, 7), None).unwrap();
        let ds = DataSet::from_records(&records);
        to_export_string(&ds.headers, &ds.rows, true, ',')
    };
    assert_eq!(render(), render());
}

#[test]
fn different_seeds_differ() {
    let a = generate(&opts(20, 1), None).unwrap();
    let b = generate(&opts(20, 2), None).unwrap();
    assert_ne!(a, b);
}

#[test]
fn zero_count_is_empty() {
    let records = generate(&opts(0, 42), None).unwrap();
    assert!(records.is_empty());
    let ds = DataSet::from_records(&records);
    assert_eq!(ds.header_count(), 25);
    assert_eq!(ds.row_count(), 0);
}

#[test]
fn phones_are_unique_across_a_run() {
    let records = generate(&opts(2000, 3), None).unwrap();
    let mut phones: Vec<&str> = records.iter().map(|r| r.phone.as_str()).collect();
    phones.sort_unstable();
    phones.dedup();
    assert_eq!(phones.len(), records.len());
}

#[test]
fn broken_tables_draw_nothing() {
    let mut tables = ReferenceTables::builtin();
    tables.price_bands.retain(|(k, _)| *k != "Books");
    let err = generate_with(&tables, &IndianNames, &opts(5, 42), None).unwrap_err();
    assert!(matches!(err, Error::Table(TableError::MissingPriceBand(ref c)) if c == "Books"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_record_respects_the_draw_rules(seed in any::<u64>()) {
        let tables = ReferenceTables::builtin();
        let records = generate(&opts(50, seed), None).unwrap();
        prop_assert_eq!(records.len(), 50);
        for rec in &records {
            check_record(rec, &tables, fixed_today());
        }
    }
}
