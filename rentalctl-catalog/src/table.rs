//! Tabular query results
//!
//! Every operation returns a [`Table`] of typed records. A record knows its
//! ordered column names and can flatten itself into display cells, so
//! callers can render any result without knowing its concrete type.

use std::fmt;

use serde::Serialize;

/// One value of a result row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Int(i64::from(v))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_owned())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Null, Into::into)
    }
}

/// A row type with a fixed, ordered column set
pub trait Record: Serialize {
    /// Column names in result order
    const COLUMNS: &'static [&'static str];

    /// Row values in the same order as [`Record::COLUMNS`]
    fn cells(&self) -> Vec<Cell>;
}

/// Ordered rows of one record type, in the order the database returned them.
///
/// Zero rows is a successful, empty result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Row values, one `Vec<Cell>` per row
    pub fn cells(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.rows.iter().map(Record::cells)
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<R> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
