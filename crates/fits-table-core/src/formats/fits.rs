//! FITS binary-table reading and writing via cfitsio.
//!
//! Reading scans the HDUs for the first table extension and maps its
//! columns onto the shared model: integer-typed columns become `Int`,
//! floating-point columns `Float`, and string columns `Text`. Anything
//! else is rejected with the offending column named.
//!
//! Compression is entirely cfitsio's business here: `.gz` and `.fz` inputs
//! are decompressed transparently on open, and a create target whose name
//! ends in `.gz` is gzip-compressed on close. A `.fz` output name is a
//! naming convention only; no tile compression is performed.

use std::path::Path;

use fitsio::hdu::{FitsHdu, HduInfo};
use fitsio::tables::{ColumnDataType, ColumnDescription, ConcreteColumnDescription};
use fitsio::FitsFile;
use log::debug;
use snafu::ResultExt;

use crate::error::{FitsSnafu, NoTableHduSnafu, Result, UnsupportedColumnTypeSnafu};
use crate::table::{Column, ColumnData, Table};

/// Extension name written on new table HDUs.
const TABLE_EXTNAME: &str = "DATA";

/// Read the first table HDU of `path` into a [`Table`].
pub fn read_table(path: &Path) -> Result<Table> {
    let display = path.display().to_string();
    let mut fits = FitsFile::open(path).context(FitsSnafu {
        path: display.clone(),
    })?;

    let hdu = find_table_hdu(&mut fits, &display)?;
    let descriptions = match &hdu.info {
        HduInfo::TableInfo {
            column_descriptions,
            ..
        } => column_descriptions.clone(),
        _ => Vec::new(),
    };

    let mut columns = Vec::with_capacity(descriptions.len());
    for desc in descriptions {
        let data = read_column(&mut fits, &hdu, &desc.name, desc.data_type.typ, &display)?;
        columns.push(Column {
            name: desc.name,
            data,
        });
    }

    Table::new(columns)
}

fn find_table_hdu(fits: &mut FitsFile, display: &str) -> Result<FitsHdu> {
    // hdu() moves the cfitsio cursor, so collect the count first.
    let hdu_count = fits.iter().count();
    for index in 0..hdu_count {
        let hdu = fits.hdu(index).context(FitsSnafu {
            path: display.to_string(),
        })?;
        if matches!(hdu.info, HduInfo::TableInfo { .. }) {
            return Ok(hdu);
        }
        debug!("{display}: HDU {index} is not a table, skipping");
    }
    NoTableHduSnafu {
        path: display.to_string(),
    }
    .fail()
}

fn read_column(
    fits: &mut FitsFile,
    hdu: &FitsHdu,
    name: &str,
    typ: ColumnDataType,
    display: &str,
) -> Result<ColumnData> {
    let ctx = || FitsSnafu {
        path: display.to_string(),
    };
    match typ {
        ColumnDataType::Short
        | ColumnDataType::Int
        | ColumnDataType::Long
        | ColumnDataType::LongLong => {
            let values: Vec<i64> = hdu.read_col(fits, name).context(ctx())?;
            Ok(ColumnData::Int(values))
        }
        ColumnDataType::Float | ColumnDataType::Double => {
            let values: Vec<f64> = hdu.read_col(fits, name).context(ctx())?;
            Ok(ColumnData::Float(values))
        }
        ColumnDataType::String => {
            let values: Vec<String> = hdu.read_col(fits, name).context(ctx())?;
            Ok(ColumnData::Text(values))
        }
        other => UnsupportedColumnTypeSnafu {
            path: display.to_string(),
            column: name.to_string(),
            column_type: format!("{other:?}"),
        }
        .fail(),
    }
}

/// Write `table` as a binary-table extension of a new FITS file at `path`.
///
/// An existing file at `path` is overwritten, matching the original tools'
/// clobber behavior.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let display = path.display().to_string();
    let mut fits = FitsFile::create(path)
        .overwrite()
        .open()
        .context(FitsSnafu {
            path: display.clone(),
        })?;

    let descriptions: Vec<ConcreteColumnDescription> = table
        .columns()
        .iter()
        .map(|col| describe_column(col, &display))
        .collect::<Result<_>>()?;

    let hdu = fits
        .create_table(TABLE_EXTNAME.to_string(), &descriptions)
        .context(FitsSnafu {
            path: display.clone(),
        })?;

    // write_col hands back the updated handle; thread it through.
    table.columns().iter().try_fold(hdu, |hdu, col| {
        let written = match &col.data {
            ColumnData::Int(values) => hdu.write_col(&mut fits, col.name.as_str(), values),
            ColumnData::Float(values) => hdu.write_col(&mut fits, col.name.as_str(), values),
            ColumnData::Text(values) => hdu.write_col(&mut fits, col.name.as_str(), values),
        };
        written.context(FitsSnafu {
            path: display.clone(),
        })
    })?;

    Ok(())
}

fn describe_column(col: &Column, display: &str) -> Result<ConcreteColumnDescription> {
    let mut description = ColumnDescription::new(col.name.as_str());
    match &col.data {
        // "K" (64-bit); "J" would silently wrap large i64 values.
        ColumnData::Int(_) => {
            description.with_type(ColumnDataType::LongLong);
        }
        ColumnData::Float(_) => {
            description.with_type(ColumnDataType::Double);
        }
        ColumnData::Text(values) => {
            // String columns are fixed-width; size to the longest value.
            let width = values.iter().map(|s| s.len()).max().unwrap_or(0).max(1);
            description
                .with_type(ColumnDataType::String)
                .that_repeats(width);
        }
    }
    description.create().context(FitsSnafu {
        path: display.to_string(),
    })
}
