// tests/report.rs
use crm_synth::record::{ CONTACT_HEADERS, col };
use crm_synth::report::summarize;
use crm_synth::store::DataSet;

fn contact(region: &str, segment: &str, amount: &str) -> Vec<String> {
    let mut row: Vec<String> = (0..CONTACT_HEADERS.len()).map(|i| format!("c{i}")).collect();
    row[col::REGION] = region.into();
    row[col::SEGMENT] = segment.into();
    row[col::PURCHASE_AMOUNT] = amount.into();
    row
}

fn table() -> DataSet {
    DataSet {
        headers: Some(CONTACT_HEADERS.iter().map(|h| h.to_string()).collect()),
        rows: vec![
            contact("North", "Premium Shoppers", "1500"),
            contact("North", "Value Seekers", "300"),
            contact("South", "Premium Shoppers", "1000"),
            contact("East", "Value Seekers", "200"),
        ],
    }
}

fn find(items: &[(String, f64)], name: &str) -> f64 {
    items.iter().find(|(k, _)| k == name).map(|(_, v)| *v).unwrap()
}

#[test]
fn shares_and_means() {
    let sum = summarize(&table());
    assert_eq!(sum.rows, 4);

    assert_eq!(sum.region_shares.len(), 3);
    assert_eq!(sum.region_shares[0], ("North".to_string(), 0.5));
    // ties ordered by name
    assert_eq!(sum.region_shares[1].0, "East");
    assert_eq!(sum.region_shares[2].0, "South");
    assert_eq!(find(&sum.region_shares, "South"), 0.25);

    assert_eq!(find(&sum.segment_shares, "Premium Shoppers"), 0.5);
    assert_eq!(find(&sum.segment_shares, "Value Seekers"), 0.5);

    assert_eq!(
        sum.mean_amount_by_segment,
        vec![("Premium Shoppers".to_string(), 1250.0), ("Value Seekers".to_string(), 250.0)]
    );
}

#[test]
fn distinct_counts_follow_column_order() {
    let sum = summarize(&table());
    assert_eq!(sum.distinct.len(), CONTACT_HEADERS.len());
    assert_eq!(sum.distinct[0], ("ContactID".to_string(), 1));
    assert_eq!(sum.distinct[col::REGION], ("Region".to_string(), 3));
    assert_eq!(sum.distinct[col::SEGMENT], ("SegmentName".to_string(), 2));
    assert_eq!(sum.distinct[col::PURCHASE_AMOUNT], ("PurchaseAmount".to_string(), 4));
}

#[test]
fn means_are_rounded_to_cents() {
    let ds = DataSet {
        headers: Some(CONTACT_HEADERS.iter().map(|h| h.to_string()).collect()),
        rows: vec![
            contact("West", "Loyal", "100"),
            contact("West", "Loyal", "100"),
            contact("West", "Loyal", "200"),
        ],
    };
    let sum = summarize(&ds);
    assert_eq!(sum.mean_amount_by_segment, vec![("Loyal".to_string(), 133.33)]);
    assert_eq!(sum.region_shares, vec![("West".to_string(), 1.0)]);
}

#[test]
fn printed_report_lists_every_section() {
    let text = summarize(&table()).to_string();
    assert!(text.starts_with("Rows: 4\n"));
    assert!(text.contains("Region share:"));
    assert!(text.contains("0.500000"));
    assert!(text.contains("SegmentName share:"));
    assert!(text.contains("Mean PurchaseAmount by SegmentName:"));
    assert!(text.contains("1250.00"));
}
