//! Column-oriented employee dataset.
//!
//! This module defines `Column` and `Dataset`, the immutable in-memory table
//! every dashboard task reads from. Columns are typed as either numeric or
//! categorical; missing cells are `None`. Tasks derive filtered or
//! transformed copies and never mutate the shared set.
use std::collections::HashSet;

use crate::error::DataError;

/// Typed cell storage for a single column.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

/// A named column with its typed values.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    /// Cell values as display labels, regardless of the column type.
    ///
    /// Numeric cells are formatted with `Display`; integral values drop the
    /// fractional part so a zone coded as `3.0` groups under the label "3".
    pub fn labels(&self) -> Vec<Option<String>> {
        match &self.data {
            ColumnData::Categorical(v) => v.clone(),
            ColumnData::Numeric(v) => v
                .iter()
                .map(|cell| {
                    cell.map(|x| {
                        if x.fract() == 0.0 {
                            format!("{}", x as i64)
                        } else {
                            format!("{}", x)
                        }
                    })
                })
                .collect(),
        }
    }
}

/// The working dataset: an ordered set of equal-length columns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset from columns, validating that lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self, DataError> {
        let n_rows = columns.first().map_or(0, Column::len);
        for column in &columns {
            if column.len() != n_rows {
                return Err(DataError::ColumnLengthMismatch {
                    column: column.name.clone(),
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Dataset { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Numeric cells of a column, or `None` if absent or categorical.
    pub fn numeric(&self, name: &str) -> Option<&[Option<f64>]> {
        match self.column(name)? {
            Column {
                data: ColumnData::Numeric(v),
                ..
            } => Some(v),
            _ => None,
        }
    }

    /// Categorical cells of a column, or `None` if absent or numeric.
    pub fn categorical(&self, name: &str) -> Option<&[Option<String>]> {
        match self.column(name)? {
            Column {
                data: ColumnData::Categorical(v),
                ..
            } => Some(v),
            _ => None,
        }
    }

    /// Display labels of a column regardless of its type.
    pub fn labels(&self, name: &str) -> Option<Vec<Option<String>>> {
        self.column(name).map(Column::labels)
    }

    /// All numeric columns in file order.
    pub fn numeric_columns(&self) -> Vec<(&str, &[Option<f64>])> {
        self.columns
            .iter()
            .filter_map(|c| match &c.data {
                ColumnData::Numeric(v) => Some((c.name.as_str(), v.as_slice())),
                ColumnData::Categorical(_) => None,
            })
            .collect()
    }

    /// Distinct non-null labels of a column, in first-encounter order.
    ///
    /// Insertion order drives the sunburst fan-out, so it must not be sorted.
    pub fn distinct_non_null(&self, name: &str) -> Vec<String> {
        let Some(labels) = self.labels(name) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for label in labels.into_iter().flatten() {
            if seen.insert(label.clone()) {
                distinct.push(label);
            }
        }
        distinct
    }

    pub fn log_summary(&self) {
        let numeric = self.columns.iter().filter(|c| c.is_numeric()).count();
        log::info!(
            "Loaded {} rows, {} columns ({} numeric, {} categorical)",
            self.n_rows,
            self.columns.len(),
            numeric,
            self.columns.len() - numeric
        );
    }
}
