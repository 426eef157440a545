//! `fitstab` — convert tabular data between CSV and FITS binary tables.

mod convert;
mod error;

use clap::{Args, Parser, Subcommand};
use fits_table_core::table::CaseFold;

use crate::convert::{convert_batch, Direction, Options};
use crate::error::CliResult;

#[derive(Debug, Args)]
struct CommonArgs {
    /// Input file name(s)
    #[arg(required = true)]
    filenames: Vec<String>,

    /// Lowercase column names
    #[arg(short = 'l', long, conflicts_with = "upper")]
    lower: bool,

    /// Uppercase column names
    #[arg(short = 'u', long)]
    upper: bool,

    /// Print progress messages
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Gzip the output file
    #[arg(short = 'z', long)]
    gzip: bool,
}

impl CommonArgs {
    fn fold(&self) -> Option<CaseFold> {
        if self.upper {
            Some(CaseFold::Upper)
        } else if self.lower {
            Some(CaseFold::Lower)
        } else {
            None
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert CSV files to FITS binary tables
    Csv2fits {
        #[command(flatten)]
        common: CommonArgs,

        /// Name output files with an fpack .fz suffix
        #[arg(short = 'f', long)]
        fpack: bool,
    },

    /// Convert FITS binary tables to CSV files
    Fits2csv {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Debug, Parser)]
#[command(name = "fitstab", about = "Convert tabular data between CSV and FITS")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Csv2fits { common, fpack } => {
            let opts = Options {
                fold: common.fold(),
                verbose: common.verbose,
                gzip: common.gzip,
                fpack,
            };
            convert_batch(Direction::CsvToFits, &common.filenames, &opts)
        }

        Command::Fits2csv { common } => {
            let opts = Options {
                fold: common.fold(),
                verbose: common.verbose,
                gzip: common.gzip,
                fpack: false,
            };
            convert_batch(Direction::FitsToCsv, &common.filenames, &opts)
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
