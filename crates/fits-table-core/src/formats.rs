//! Format-specific readers and writers.
//!
//! One submodule per on-disk format. Each exposes `read_table` /
//! `write_table` over the shared [`crate::table::Table`] model.

pub mod csv;
pub mod fits;
