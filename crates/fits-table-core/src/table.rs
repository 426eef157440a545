//! In-memory tabular data model shared by the CSV and FITS format code.
//!
//! A [`Table`] is an ordered list of named, equal-length columns. Three
//! column types cover what the conversion path needs: 64-bit integers,
//! 64-bit floats, and strings. Anything richer (booleans, arrays,
//! variable-length columns) is rejected at read time by the format layer.

use snafu::ensure;

use crate::error::{ColumnLengthMismatchSnafu, Result};

/// Column-name case-folding mode.
///
/// The two modes are mutually exclusive; the CLI argument parser enforces
/// that, not this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// Fold every column name to uppercase.
    Upper,
    /// Fold every column name to lowercase.
    Lower,
}

impl CaseFold {
    /// Fold a single name.
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseFold::Upper => name.to_uppercase(),
            CaseFold::Lower => name.to_lowercase(),
        }
    }
}

/// Cell data for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// 64-bit signed integers.
    Int(Vec<i64>),
    /// 64-bit floats.
    Float(Vec<f64>),
    /// Strings.
    Text(Vec<String>),
}

impl ColumnData {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// True when the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the value at `row` for text output.
    ///
    /// Callers are expected to stay within bounds; `row` comes from the
    /// owning table's row count.
    pub fn format_value(&self, row: usize) -> String {
        match self {
            ColumnData::Int(v) => v[row].to_string(),
            ColumnData::Float(v) => v[row].to_string(),
            ColumnData::Text(v) => v[row].clone(),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name as it appears in the file header.
    pub name: String,
    /// The column's rows.
    pub data: ColumnData,
}

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, validating that all columns have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.data.len();
            for col in &columns {
                ensure!(
                    col.data.len() == expected,
                    ColumnLengthMismatchSnafu {
                        column: col.name.clone(),
                        expected,
                        actual: col.data.len(),
                    }
                );
            }
        }
        Ok(Table { columns })
    }

    /// The columns, in file order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (zero for a table with no columns).
    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }

    /// Fold every column name through `fold`, uniformly and exactly once.
    pub fn fold_column_names(&mut self, fold: CaseFold) {
        for col in &mut self.columns {
            col.name = fold.apply(&col.name);
        }
    }
}
