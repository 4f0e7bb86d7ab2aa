// tests/cli_side_effects.rs
//
// Changes the process working directory, so it stays the only test in
// this binary.
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crm_synth::config::consts::{ CONTACTS_FILE, STORE_DIR };
use crm_synth::config::options::GenerateOptions;
use crm_synth::file::write_dataset;
use crm_synth::generate::generate;
use crm_synth::store::DataSet;

#[test]
fn generate_run_leaves_only_the_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let opts = GenerateOptions {
        count: 50,
        today: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..GenerateOptions::default()
    };
    let records = generate(&opts, None).unwrap();
    write_dataset(&opts.out, &DataSet::from_records(&records), ',', true).unwrap();

    let mut names: Vec<String> = fs::read_dir(".")
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, [CONTACTS_FILE]);
    assert!(!Path::new(STORE_DIR).exists());
}
