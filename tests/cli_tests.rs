//! CLI behavior tests: exit codes, output files, and report formats.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_file(path: &std::path::Path, content: &str) {
    let mut f = std::fs::File::create(path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}

fn seqfuse() -> Command {
    Command::cargo_bin("seqfuse").unwrap()
}

#[test]
fn merge_with_no_inputs_fails() {
    let dir = tempfile::tempdir().unwrap();
    seqfuse()
        .args(["merge", "--output"])
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input data"));
}

#[test]
fn merge_with_missing_files_fails_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    seqfuse()
        .args(["merge", "--faostat"])
        .arg(dir.path().join("missing.csv"))
        .arg("--mapping")
        .arg(dir.path().join("missing.tsv"))
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input data"));
}

#[test]
fn merge_with_partial_inputs_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir.path().join("faostat.csv"),
        "Area,Item,Element,Year,Value,Unit\nKenya,Maize,Production,2020,3800000,tonnes\n",
    );
    let out = dir.path().join("out.csv");

    seqfuse()
        .args(["merge", "--faostat"])
        .arg(dir.path().join("faostat.csv"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Merge summary"))
        .stdout(predicate::str::contains("Agricultural records:   1"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("record_id,data_type,"));
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn merge_full_pipeline_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let reads = dir.path().join("reads");
    std::fs::create_dir(&reads).unwrap();
    write_file(
        &reads.join("soil_a.fastq"),
        "@read_1\nGATTACA\n+\nIIIIIII\n",
    );
    write_file(
        &dir.path().join("mapping.tsv"),
        "sample_name\tbarcode\nsoil_a\tBC1\n",
    );
    let out = dir.path().join("out.csv");

    seqfuse()
        .args(["merge", "--format", "json", "--fastq-dir"])
        .arg(&reads)
        .arg("--mapping")
        .arg(dir.path().join("mapping.tsv"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sequence_records\": 1"))
        .stdout(predicate::str::contains("\"total_records\": 1"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("genomic_sequence"));
    assert!(written.contains("soil_a"));
}

#[test]
fn features_prints_csv() {
    let dir = tempfile::tempdir().unwrap();
    let fastq = dir.path().join("s.fastq");
    write_file(&fastq, "@r1\nAAAA\n+\n!!!!\n");

    seqfuse()
        .arg("features")
        .arg(&fastq)
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence_id,header,source_file"))
        .stdout(predicate::str::contains("1,r1,s.fastq,4,0.00,4,0,0,0,0,0.00,1,false"));
}

#[test]
fn tabular_reports_shape() {
    let dir = tempfile::tempdir().unwrap();
    let tsv = dir.path().join("mapping.tsv");
    write_file(&tsv, "sample_name\tbarcode\nsoil_a\tBC1\nsoil_b\tBC2\n");

    seqfuse()
        .arg("tabular")
        .arg(&tsv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 2"))
        .stdout(predicate::str::contains("Columns (2): sample_name, barcode"));
}
