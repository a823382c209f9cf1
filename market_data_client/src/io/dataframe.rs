use polars::prelude::{Column, DataFrame, PolarsResult};

use crate::response::TimeSeriesTable;

impl TimeSeriesTable {
    /// Copies the table into a polars `DataFrame` of string columns.
    ///
    /// Column and row order are preserved; values are not parsed, so cast
    /// the columns you need afterwards.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values: Vec<&str> = self
                    .records()
                    .map(|record| record.values()[index].as_str())
                    .collect();
                Column::new(name.as_str().into(), values)
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}
