//! Tabular result rows and cell values.
//!
//! Every catalog statement produces a [`RowSet`]: ordered column labels
//! (the SQL `AS` aliases) plus rows of loosely-typed cells. Rows keep the
//! order the statement's `ORDER BY` produced; columns keep the `SELECT`
//! list order. A [`SelectedRow`] is one row the user picked, with
//! label-keyed access for drill-in and logging.

use std::fmt;

/// One cell of a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// An ordered result set: column labels plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy out row `index` together with the column labels.
    pub fn select(&self, index: usize) -> Option<SelectedRow> {
        self.rows.get(index).map(|row| SelectedRow {
            headers: self.headers.clone(),
            values: row.clone(),
        })
    }
}

/// One picked row, carrying its column labels for keyed access.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRow {
    headers: Vec<String>,
    values: Vec<Value>,
}

impl SelectedRow {
    pub fn get(&self, label: &str) -> Option<&Value> {
        let idx = self.headers.iter().position(|h| h == label)?;
        self.values.get(idx)
    }

    /// Text cell under `label`, if present and textual.
    pub fn get_str(&self, label: &str) -> Option<&str> {
        match self.get(label) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Integer cell under `label`, if present and integral.
    pub fn get_i64(&self, label: &str) -> Option<i64> {
        match self.get(label) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Iterate `(label, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RowSet {
        RowSet::new(
            vec!["Nr".to_string(), "category".to_string()],
            vec![
                vec![Value::Int(1), Value::Text("Action".to_string())],
                vec![Value::Int(2), Value::Text("Animation".to_string())],
            ],
        )
    }

    #[test]
    fn test_select_returns_labelled_row() {
        let row = sample().select(1).unwrap();
        assert_eq!(row.get_i64("Nr"), Some(2));
        assert_eq!(row.get_str("category"), Some("Animation"));
    }

    #[test]
    fn test_select_out_of_range() {
        assert!(sample().select(2).is_none());
    }

    #[test]
    fn test_get_missing_label() {
        let row = sample().select(0).unwrap();
        assert!(row.get("year").is_none());
        assert!(row.get_str("Nr").is_none()); // wrong type
    }

    #[test]
    fn test_iter_preserves_column_order() {
        let row = sample().select(0).unwrap();
        let labels: Vec<&str> = row.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Nr", "category"]);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Text("love".to_string()).to_string(), "love");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
