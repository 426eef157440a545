//! CSV reading and writing, with transparent gzip on both sides.
//!
//! Reading infers one type per column over the whole file: a column where
//! every field parses as `i64` becomes `Int`, otherwise all-`f64` becomes
//! `Float`, otherwise the raw strings are kept as `Text`. A header row is
//! required; a header-only file produces zero-row columns.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use snafu::ResultExt;

use crate::error::{
    CreateOutputSnafu, CsvReadSnafu, CsvWriteSnafu, FinishOutputSnafu, OpenInputSnafu, Result,
};
use crate::table::{Column, ColumnData, Table};

fn is_gzip(path: &Path) -> bool {
    path.extension().map(|e| e == "gz").unwrap_or(false)
}

/// Read a CSV file into a [`Table`].
///
/// Names ending in `.gz` are decompressed while reading. Ragged rows are a
/// parse error from the `csv` crate and propagate unchanged.
pub fn read_table(path: &Path) -> Result<Table> {
    let display = path.display().to_string();
    let file = File::open(path).context(OpenInputSnafu {
        path: display.clone(),
    })?;

    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut rdr = csv::Reader::from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context(CsvReadSnafu {
            path: display.clone(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record.context(CsvReadSnafu {
            path: display.clone(),
        })?;
        for (i, field) in record.iter().enumerate() {
            cells[i].push(field.to_string());
        }
    }

    let rows = cells.first().map(|c| c.len()).unwrap_or(0);
    debug!("{display}: {} columns, {rows} rows", headers.len());

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column {
            name,
            data: infer_column(raw),
        })
        .collect();

    Table::new(columns)
}

/// Whole-column type inference over the raw string fields.
fn infer_column(raw: Vec<String>) -> ColumnData {
    if let Ok(ints) = raw
        .iter()
        .map(|s| s.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<i64>, _>>()
    {
        return ColumnData::Int(ints);
    }
    if let Ok(floats) = raw
        .iter()
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
    {
        return ColumnData::Float(floats);
    }
    ColumnData::Text(raw)
}

/// Write `table` as CSV to `path`, gzip-compressing the stream when `gzip`
/// is set.
pub fn write_table(path: &Path, table: &Table, gzip: bool) -> Result<()> {
    let display = path.display().to_string();
    let file = File::create(path).context(CreateOutputSnafu {
        path: display.clone(),
    })?;

    if gzip {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        write_rows(csv::Writer::from_writer(&mut encoder), table, &display)?;
        // finish() writes the trailing gzip block; dropping would swallow
        // any error it reports.
        encoder
            .finish()
            .context(FinishOutputSnafu {
                path: display.clone(),
            })?
            .flush()
            .context(FinishOutputSnafu { path: display })?;
    } else {
        write_rows(csv::Writer::from_writer(BufWriter::new(file)), table, &display)?;
    }
    Ok(())
}

/// Write the header and every row, flushing through to the underlying
/// stream before the writer is dropped.
fn write_rows<W: Write>(mut wtr: csv::Writer<W>, table: &Table, display: &str) -> Result<()> {
    wtr.write_record(table.columns().iter().map(|c| c.name.as_str()))
        .context(CsvWriteSnafu {
            path: display.to_string(),
        })?;

    for row in 0..table.num_rows() {
        wtr.write_record(table.columns().iter().map(|c| c.data.format_value(row)))
            .context(CsvWriteSnafu {
                path: display.to_string(),
            })?;
    }

    wtr.flush().context(FinishOutputSnafu {
        path: display.to_string(),
    })
}
