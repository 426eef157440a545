//! Core library for the `fits-table-tools` conversion utilities.
//!
//! This crate provides the pieces shared by the `csv2fits` and `fits2csv`
//! command-line tools:
//!
//! - Filename suffix resolution: matching an input name against an ordered
//!   set of (format extension, compression suffix) combinations and
//!   constructing output names (`suffix` module).
//! - A small in-memory tabular data model with column-name case folding
//!   (`table` module).
//! - Format readers/writers for CSV (plain or gzip) and FITS binary tables
//!   (`formats` module).
//!
//! The CLI crate is expected to compose these pieces; nothing here parses
//! arguments or decides batch policy.
#![deny(missing_docs)]

pub mod error;
pub mod formats;
pub mod suffix;
pub mod table;
