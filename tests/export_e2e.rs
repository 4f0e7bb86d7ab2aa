// tests/export_e2e.rs
use std::fs;

use chrono::NaiveDate;

use crm_synth::config::options::{ DatasetKind, ExportFormat, ExportOptions, GenerateOptions };
use crm_synth::csv::parse_rows;
use crm_synth::file::{ write_dataset, write_export };
use crm_synth::generate::generate;
use crm_synth::record::{ CONTACT_HEADERS, ScrapedPage };
use crm_synth::store::DataSet;

fn pages() -> DataSet {
    DataSet::from_records(&[
        ScrapedPage {
            title: "Goa".into(),
            content: "Goa is small.\nIt has \"beaches\", forts.\n".into(),
            url: "https://en.wikipedia.org/wiki/Goa".into(),
        },
        ScrapedPage {
            title: "Tamil Nadu".into(),
            content: "Chennai\tis the capital.\n".into(),
            url: "https://en.wikipedia.org/wiki/Tamil_Nadu".into(),
        },
    ])
}

#[test]
fn multi_line_content_survives_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("wikipedia_content.csv");
    let ds = pages();

    write_dataset(&path, &ds, ',', true).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("title,content,url\n"));

    let back = DataSet::from_text(&text, ',', true);
    assert_eq!(back, ds);
}

#[test]
fn tsv_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    export.set_path(dir.path().join("pages.csv").to_str().unwrap());

    let written = write_export(&export, DatasetKind::Pages, &pages()).unwrap();
    assert_eq!(written, dir.path().join("pages.tsv"));

    let rows = parse_rows(&fs::read_to_string(&written).unwrap(), '\t');
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Goa");
    assert_eq!(rows[1][1], "Chennai\tis the capital.\n");
}

#[test]
fn generated_contacts_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = GenerateOptions {
        count: 25,
        seed: 42,
        today: NaiveDate::from_ymd_opt(2024, 6, 1),
        out: dir.path().join("crm_synthetic_data.csv"),
        ..GenerateOptions::default()
    };
    let records = generate(&opts, None).unwrap();
    let ds = DataSet::from_records(&records);
    write_dataset(&opts.out, &ds, ',', true).unwrap();

    let rows = parse_rows(&fs::read_to_string(&opts.out).unwrap(), ',');
    assert_eq!(rows.len(), 26);
    assert_eq!(rows[0], CONTACT_HEADERS);
    assert!(rows.iter().all(|r| r.len() == 25));
    assert_eq!(rows[1][0], "CID00001");
    assert_eq!(rows[25][11], "PID00025");
    // dates are ISO, amounts whole rupees
    assert!(NaiveDate::parse_from_str(&rows[1][15], "%Y-%m-%d").is_ok());
    assert!(rows[1][14].parse::<u32>().is_ok());
}
