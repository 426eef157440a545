//! The per-file conversion pipeline shared by both subcommands.
//!
//! Each input is handled to completion before the next begins: resolve its
//! suffix, build the output name, read, fold column names, write. The first
//! failure of any kind ends the batch; there is no per-file recovery.

use std::path::Path;

use fits_table_core::formats::{csv, fits};
use fits_table_core::suffix::{output_name, SuffixSet};
use fits_table_core::table::CaseFold;
use log::debug;
use snafu::{OptionExt, ResultExt};

use crate::error::{CliResult, ConvertSnafu, UnrecognizedExtensionSnafu};

/// Which way a batch converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// CSV inputs, FITS binary-table outputs.
    CsvToFits,
    /// FITS inputs, CSV outputs.
    FitsToCsv,
}

impl Direction {
    fn input_suffixes(&self) -> SuffixSet {
        match self {
            Direction::CsvToFits => SuffixSet::csv_input(),
            Direction::FitsToCsv => SuffixSet::fits_input(),
        }
    }

    fn target_extension(&self) -> &'static str {
        match self {
            Direction::CsvToFits => ".fits",
            Direction::FitsToCsv => ".csv",
        }
    }
}

/// Flags shared by both subcommands.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Column-name case folding, if either mode was requested.
    pub fold: Option<CaseFold>,
    /// Print `Reading`/`Writing` progress lines.
    pub verbose: bool,
    /// Gzip the output (and append `.gz` to its name).
    pub gzip: bool,
    /// Append an fpack `.fz` suffix to the output name.
    pub fpack: bool,
}

/// Convert every file in `filenames`, in order, stopping at the first
/// failure.
pub fn convert_batch(direction: Direction, filenames: &[String], opts: &Options) -> CliResult<()> {
    for filename in filenames {
        convert_file(direction, filename, opts)?;
    }
    Ok(())
}

fn convert_file(direction: Direction, filename: &str, opts: &Options) -> CliResult<()> {
    let resolved = direction
        .input_suffixes()
        .resolve(filename)
        .context(UnrecognizedExtensionSnafu { filename })?;

    let outfile = output_name(
        &resolved.base,
        direction.target_extension(),
        opts.gzip,
        opts.fpack,
    );
    debug!("{filename}: matched suffix {:?}, output {outfile}", resolved.suffix);

    if opts.verbose {
        println!("Reading {filename}...");
    }
    let mut table = match direction {
        Direction::CsvToFits => csv::read_table(Path::new(filename)),
        Direction::FitsToCsv => fits::read_table(Path::new(filename)),
    }
    .context(ConvertSnafu)?;

    if let Some(fold) = opts.fold {
        table.fold_column_names(fold);
    }

    if opts.verbose {
        println!("Writing {outfile}...");
    }
    match direction {
        Direction::CsvToFits => fits::write_table(Path::new(&outfile), &table),
        Direction::FitsToCsv => csv::write_table(Path::new(&outfile), &table, opts.gzip),
    }
    .context(ConvertSnafu)?;

    Ok(())
}
