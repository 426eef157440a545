#![allow(missing_docs)]
//! Integration tests for the `fitstab` binary.

use std::fs;
use std::io::Read;
use std::path::Path;

use assert_cmd::Command;
use fits_table_core::formats::fits;
use fits_table_core::table::ColumnData;
use flate2::read::GzDecoder;
use predicates::str::contains;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitstab"))
}

fn write_csv(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

const SAMPLE: &str = "id,mag,band\n1,17.25,g\n2,18.5,r\n";

#[test]
fn csv2fits_writes_a_fits_table() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "data.csv"])
        .assert()
        .success();

    let table = fits::read_table(&tmp.path().join("data.fits")).unwrap();
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "mag", "band"]);
    assert_eq!(table.columns()[0].data, ColumnData::Int(vec![1, 2]));
    assert_eq!(table.columns()[1].data, ColumnData::Float(vec![17.25, 18.5]));
}

#[test]
fn csv2fits_upper_folds_column_names() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "--upper", "data.csv"])
        .assert()
        .success();

    let table = fits::read_table(&tmp.path().join("data.fits")).unwrap();
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ID", "MAG", "BAND"]);
}

#[test]
fn lower_and_upper_are_mutually_exclusive() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "--lower", "--upper", "data.csv"])
        .assert()
        .failure();
}

#[test]
fn unrecognized_extension_aborts_with_the_exact_message() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), "hello").unwrap();

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "notes.txt"])
        .assert()
        .failure()
        .stderr(contains("Unrecognized file extension: notes.txt"));
}

#[test]
fn batch_stops_at_the_first_bad_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.txt"), "nope").unwrap();
    write_csv(tmp.path(), "good.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "bad.txt", "good.csv"])
        .assert()
        .failure()
        .stderr(contains("Unrecognized file extension: bad.txt"));

    // The later file was never processed.
    assert!(!tmp.path().join("good.fits").exists());
}

#[test]
fn verbose_prints_reading_and_writing_lines() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "--verbose", "data.csv"])
        .assert()
        .success()
        .stdout(contains("Reading data.csv..."))
        .stdout(contains("Writing data.fits..."));
}

#[test]
fn fpack_flag_names_the_output_with_an_fz_suffix() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "--fpack", "data.csv"])
        .assert()
        .success();

    assert!(tmp.path().join("data.fits.fz").exists());
    assert!(!tmp.path().join("data.fits").exists());
}

#[test]
fn gzipped_csv_input_resolves_to_the_same_base() {
    let tmp = TempDir::new().unwrap();
    let gz = fs::File::create(tmp.path().join("data.csv.gz")).unwrap();
    let mut enc = flate2::write::GzEncoder::new(gz, flate2::Compression::default());
    std::io::Write::write_all(&mut enc, SAMPLE.as_bytes()).unwrap();
    enc.finish().unwrap();

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "data.csv.gz"])
        .assert()
        .success();

    assert!(tmp.path().join("data.fits").exists());
}

#[test]
fn csv2fits_gzip_writes_a_readable_compressed_fits() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "--gzip", "data.csv"])
        .assert()
        .success();

    // cfitsio both compresses on write and decompresses on read.
    let table = fits::read_table(&tmp.path().join("data.fits.gz")).unwrap();
    assert_eq!(table.num_rows(), 2);
}

#[test]
fn fits2csv_round_trips_the_sample() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "data.csv"])
        .assert()
        .success();

    fs::remove_file(tmp.path().join("data.csv")).unwrap();

    cli()
        .current_dir(tmp.path())
        .args(["fits2csv", "data.fits"])
        .assert()
        .success();

    let back = fs::read_to_string(tmp.path().join("data.csv")).unwrap();
    assert_eq!(back, SAMPLE);
}

#[test]
fn fits2csv_gzip_writes_a_decompressible_csv() {
    let tmp = TempDir::new().unwrap();
    write_csv(tmp.path(), "data.csv", SAMPLE);

    cli()
        .current_dir(tmp.path())
        .args(["csv2fits", "data.csv"])
        .assert()
        .success();

    cli()
        .current_dir(tmp.path())
        .args(["fits2csv", "--gzip", "data.fits"])
        .assert()
        .success();

    let gz = fs::File::open(tmp.path().join("data.csv.gz")).unwrap();
    let mut contents = String::new();
    GzDecoder::new(gz).read_to_string(&mut contents).unwrap();
    assert_eq!(contents, SAMPLE);
}
