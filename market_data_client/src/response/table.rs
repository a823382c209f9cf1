//! Column-named, row-ordered table decoded from a CSV response.

use std::io;

use serde::Serialize;

/// Name given to the first column of every decoded table.
pub const TIME_COLUMN: &str = "time";

/// Rows of text values under named columns, in response order.
///
/// The first column is always named [`TIME_COLUMN`] and serves as the row key
/// for [`TimeSeriesTable::row`]. Values are never typecast, sorted, or
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TimeSeriesTable {
    /// Builds a table from a header and rows. The caller guarantees every
    /// row is as wide as the header.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renames the column at `position`. Returns `false` if out of range.
    pub fn rename_column(&mut self, position: usize, name: impl Into<String>) -> bool {
        match self.columns.get_mut(position) {
            Some(column) => {
                *column = name.into();
                true
            }
            None => false,
        }
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Row at `index` in response order.
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|values| Record {
            columns: &self.columns,
            values,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            columns: &self.columns,
            values,
        })
    }

    /// First row whose `time` value equals `time`.
    pub fn row(&self, time: &str) -> Option<Record<'_>> {
        self.records().find(|record| record.time() == time)
    }

    /// Row keys in response order.
    pub fn times(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row[0].as_str())
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Writes the table back out as CSV, header first.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// The row key.
    pub fn time(&self) -> &'a str {
        &self.values[0]
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.columns.iter().position(|name| name == column)?;
        Some(self.values[index].as_str())
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}
