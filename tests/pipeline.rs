use std::io::Write;
use std::path::Path;

use skylabel::labels::Category;
use skylabel::pipelines::{Pipeline, PreLabel};
use skylabel::sampling::QuotaTable;

fn write_corpus(dir: &Path, texts: &[&str]) {
    let mut f = std::fs::File::create(dir.join("posts.jsonl")).unwrap();
    for text in texts {
        writeln!(f, "{}", serde_json::json!({ "text": text })).unwrap();
    }
}

fn run_pipeline(src: &Path, dst: &Path, quotas: QuotaTable, seed: u64) {
    PreLabel::new(src.to_path_buf(), dst.to_path_buf(), quotas, seed)
        .run()
        .unwrap();
}

/// (text, label) pairs from the CSV export, row order.
fn csv_pairs(dst: &Path) -> Vec<(String, String)> {
    let mut reader = csv::Reader::from_path(dst.join("pre_labeled_dataset.csv")).unwrap();
    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            (record[0].to_string(), record[1].to_string())
        })
        .collect()
}

/// (text, label) pairs from the Label Studio export, task order.
fn task_pairs(dst: &Path) -> Vec<(String, String)> {
    let content = std::fs::read_to_string(dst.join("label_studio_import.json")).unwrap();
    let tasks: serde_json::Value = serde_json::from_str(&content).unwrap();
    tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|task| {
            let text = task["data"]["text"].as_str().unwrap().to_string();
            let label = task["predictions"][0]["result"][0]["value"]["choices"][0]
                .as_str()
                .unwrap()
                .to_string();
            (text, label)
        })
        .collect()
}

#[test_log::test]
fn end_to_end_five_posts() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();

    write_corpus(
        src.path(),
        &[
            "Car crash on Main St",
            "Wildfire spreads in hills",
            "Car crash on Main St",
            "Nothing special today",
            "Magnitude 5 quake hit",
        ],
    );

    let quotas = QuotaTable::from_pairs([
        (Category::AutoAccident, 1),
        (Category::Fire, 1),
        (Category::Earthquake, 1),
        (Category::NotRelevant, 1),
    ]);
    run_pipeline(src.path(), dst.path(), quotas, 42);

    // duplicate dropped, one post per category, quota declaration order
    let expected = vec![
        ("Car crash on Main St".to_string(), "auto_accident".to_string()),
        ("Wildfire spreads in hills".to_string(), "fire".to_string()),
        ("Magnitude 5 quake hit".to_string(), "earthquake".to_string()),
        ("Nothing special today".to_string(), "not_relevant".to_string()),
    ];
    assert_eq!(csv_pairs(dst.path()), expected);
    assert_eq!(task_pairs(dst.path()), expected);
}

#[test]
fn dual_format_equivalence() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();

    write_corpus(
        src.path(),
        &[
            "fire in the warehouse",
            "flames everywhere downtown",
            "the fire rages on",
            "flood waters rising",
            "just a nice day ☀️",
            "boring afternoon",
            "boring afternoon",
            "lovely weather we had",
        ],
    );

    // fire needs a real draw (2 of 3), not_relevant is a shortfall (2 of 5),
    // flood is absent from the table and must not appear at all
    let quotas = QuotaTable::from_pairs([(Category::Fire, 2), (Category::NotRelevant, 5)]);
    run_pipeline(src.path(), dst.path(), quotas, 1);

    let csv = csv_pairs(dst.path());
    let tasks = task_pairs(dst.path());
    assert_eq!(csv, tasks);

    assert_eq!(csv.len(), 4);
    assert_eq!(csv.iter().filter(|(_, label)| label == "fire").count(), 2);
    assert!(csv.iter().all(|(_, label)| label != "flood"));

    // shortfall keeps pool order
    assert_eq!(csv[2].0, "boring afternoon");
    assert_eq!(csv[3].0, "lovely weather we had");
}

#[test]
fn reruns_are_byte_identical() {
    let src = tempfile::tempdir().unwrap();

    let texts: Vec<String> = (0..50)
        .map(|i| format!("fire number {} in the hills", i))
        .chain((0..10).map(|i| format!("plain post number {}", i)))
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    write_corpus(src.path(), &refs);

    let quotas = QuotaTable::from_pairs([(Category::Fire, 5), (Category::NotRelevant, 5)]);

    let dst_a = tempfile::tempdir().unwrap();
    let dst_b = tempfile::tempdir().unwrap();
    run_pipeline(src.path(), dst_a.path(), quotas.clone(), 42);
    run_pipeline(src.path(), dst_b.path(), quotas, 42);

    for filename in ["pre_labeled_dataset.csv", "label_studio_import.json"] {
        let a = std::fs::read(dst_a.path().join(filename)).unwrap();
        let b = std::fs::read(dst_b.path().join(filename)).unwrap();
        assert_eq!(a, b, "{} differs between identical runs", filename);
    }
}

#[test]
fn gzipped_corpus_files_are_read() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();

    let file = std::fs::File::create(src.path().join("posts.jsonl.gz")).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    writeln!(encoder, "{}", serde_json::json!({ "text": "tsunami warning issued" })).unwrap();
    encoder.finish().unwrap();

    let quotas = QuotaTable::from_pairs([(Category::OtherDisaster, 1)]);
    run_pipeline(src.path(), dst.path(), quotas, 0);

    assert_eq!(
        csv_pairs(dst.path()),
        vec![("tsunami warning issued".to_string(), "other_disaster".to_string())]
    );
}
