#![allow(missing_docs)]
//! End-to-end conversion through real files: CSV -> FITS -> CSV.

use std::fs;

use fits_table_core::formats::{csv, fits};
use fits_table_core::suffix::{output_name, SuffixSet};
use fits_table_core::table::{CaseFold, ColumnData};
use tempfile::TempDir;

#[test]
fn csv_to_fits_to_csv_preserves_values_and_order() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let csv_in = tmp.path().join("objects.csv");
    fs::write(
        &csv_in,
        "OBJ_ID,RA,DEC,BAND\n1001,54.125,-35.5,g\n1002,54.25,-35.625,r\n1003,54.5,-36.75,i\n",
    )?;

    let table = csv::read_table(&csv_in)?;
    let fits_path = tmp.path().join("objects.fits");
    fits::write_table(&fits_path, &table)?;

    let back = fits::read_table(&fits_path)?;
    assert_eq!(back, table);

    let csv_out = tmp.path().join("objects_out.csv");
    csv::write_table(&csv_out, &back, false)?;
    assert_eq!(
        fs::read_to_string(&csv_out)?,
        fs::read_to_string(&csv_in)?
    );
    Ok(())
}

#[test]
fn case_folding_survives_the_fits_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let csv_in = tmp.path().join("t.csv");
    fs::write(&csv_in, "Alpha,Beta\n1,2\n")?;

    let mut table = csv::read_table(&csv_in)?;
    table.fold_column_names(CaseFold::Upper);

    let fits_path = tmp.path().join("t.fits");
    fits::write_table(&fits_path, &table)?;

    let back = fits::read_table(&fits_path)?;
    let names: Vec<&str> = back.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ALPHA", "BETA"]);
    assert_eq!(back.columns()[0].data, ColumnData::Int(vec![1]));
    Ok(())
}

#[test]
fn resolved_names_compose_into_reresolvable_outputs() {
    // The name a conversion writes must itself resolve cleanly for the
    // reverse direction.
    let csv_set = SuffixSet::csv_input();
    let fits_set = SuffixSet::fits_input();

    let resolved = csv_set.resolve("catalog.csv.gz").unwrap();
    let outfile = output_name(&resolved.base, ".fits", false, true);
    assert_eq!(outfile, "catalog.fits.fz");

    let back = fits_set.resolve(&outfile).unwrap();
    assert_eq!(back.base, "catalog");
    assert_eq!(back.suffix, ".fits.fz");
}
