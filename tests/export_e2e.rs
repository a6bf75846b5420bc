// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use drug_finder::config::options::{ExportFormat, ExportOptions, ExportType};
use drug_finder::file::{self, Columns};
use drug_finder::{store, CatalogError, DrugRecord};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("drug_finder_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn single_csv_with_headers() {
    let c = store::bundled().unwrap();
    let base = c.find_exact("디오반필름코팅정80mg").unwrap();
    let view = c.same_ingredient(base, false);

    let dir = tmp_dir("single_csv");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("valsartan.csv").to_str().unwrap());

    let path = file::write_export_single(&view, Columns::Product, &opts).unwrap();
    assert_eq!(path, dir.join("valsartan.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name,Ingredient,Dose,Manufacturer,Price");
    assert_eq!(lines[1], "디오반필름코팅정80mg,발사르탄,80mg,한국노바티스,385");
    assert_eq!(lines.len(), 3);
}

#[test]
fn user_extension_survives_format_change() {
    let c = store::bundled().unwrap();
    let view = c.by_category("위장약");

    let dir = tmp_dir("user_ext");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("gi.txt").to_str().unwrap());
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    let path = file::write_export_single(&view, Columns::WithCategory, &opts).unwrap();
    assert!(path.to_string_lossy().ends_with("gi.txt"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|l| l.split('\t').count() == 6 && l.ends_with("위장약")));
}

#[test]
fn json_export_reads_back_as_records() {
    let c = store::bundled().unwrap();
    let view = c.by_category("항히스타민제");

    let dir = tmp_dir("json");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Json;
    opts.set_path(dir.join("allergy").to_str().unwrap());

    let path = file::write_export_single(&view, Columns::WithCategory, &opts).unwrap();
    assert_eq!(path, dir.join("allergy.json"));

    let back: Vec<DrugRecord> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, view.to_owned_records());
}

#[test]
fn per_category_writes_one_file_each() {
    let c = store::bundled().unwrap();
    let dir = tmp_dir("per_category");

    let mut opts = ExportOptions::default();
    opts.set_export_type(ExportType::PerCategory);
    opts.set_path(dir.to_str().unwrap());

    let written = file::write_export_per_category(&c, &[], &opts).unwrap();
    assert_eq!(written.len(), c.categories().len());
    assert!(written.contains(&dir.join("고혈압약.csv")));

    let text = fs::read_to_string(dir.join("당뇨약.csv")).unwrap();
    assert_eq!(text.lines().count(), 1 + 4);
}

#[test]
fn per_category_subset_and_unknown() {
    let c = store::bundled().unwrap();
    let dir = tmp_dir("per_category_subset");

    let mut opts = ExportOptions::default();
    opts.set_export_type(ExportType::PerCategory);
    opts.set_path(dir.to_str().unwrap());

    let written = file::write_export_per_category(&c, &["위장약"], &opts).unwrap();
    assert_eq!(written, vec![dir.join("위장약.csv")]);

    let err = file::write_export_per_category(&c, &["없는분류"], &opts).unwrap_err();
    assert!(matches!(err, CatalogError::NothingToExport));
}

#[test]
fn empty_view_is_not_written() {
    let c = store::bundled().unwrap();
    let dir = tmp_dir("empty");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("none.csv").to_str().unwrap());

    let err = file::write_export_single(&c.by_category("없는분류"), Columns::Product, &opts).unwrap_err();
    assert!(matches!(err, CatalogError::NothingToExport));
    assert!(!dir.join("none.csv").exists());
}

#[test]
fn fields_with_commas_are_quoted() {
    let c = store::bundled().unwrap();
    let base = c.find_exact("엑스포지정5/80mg").unwrap();
    let text = file::to_export_string(&c.same_ingredient(base, false), Columns::Product, &ExportOptions::default())
        .unwrap();
    assert!(text.contains("\"암로디핀베실산염, 발사르탄\""));
}
