//! Shared fakes and fixtures for flow tests.

use std::collections::VecDeque;
use std::io;

use crate::db::{Backend, Operation, RowSet, SelectedRow, UsageKind, Value};
use crate::error::{Result, SearchError};
use crate::present::Present;

pub fn text(v: &str) -> Value {
    Value::Text(v.to_string())
}

pub fn int(v: i64) -> Value {
    Value::Int(v)
}

pub fn row_set(headers: &[&str], rows: Vec<Vec<Value>>) -> RowSet {
    RowSet::new(headers.iter().map(|h| h.to_string()).collect(), rows)
}

/// Backend double: canned row sets handed out in call order, every
/// operation and log write recorded for assertions.
#[derive(Default)]
pub struct FakeBackend {
    pub responses: VecDeque<RowSet>,
    pub calls: Vec<Operation>,
    pub logged: Vec<(&'static str, String)>,
    pub tables: Vec<String>,
    pub fail_log: bool,
}

impl FakeBackend {
    pub fn with_responses(responses: Vec<RowSet>) -> Self {
        Self {
            responses: responses.into(),
            ..Default::default()
        }
    }
}

impl Backend for FakeBackend {
    fn run(&mut self, op: &Operation) -> Result<RowSet> {
        self.calls.push(op.clone());
        self.responses
            .pop_front()
            .ok_or_else(|| SearchError::query(format!("unexpected query '{}'", op.name())))
    }

    fn table_exists(&mut self, name: &str) -> Result<bool> {
        Ok(self.tables.iter().any(|t| t == name))
    }

    fn log_use(&mut self, kind: UsageKind, text: &str) -> Result<()> {
        if self.fail_log {
            return Err(SearchError::Log {
                message: "simulated log failure".to_string(),
            });
        }
        self.logged.push((kind.as_str(), text.to_string()));
        Ok(())
    }
}

/// Presenter double: selections are scripted up front, everything shown
/// is recorded.
#[derive(Default)]
pub struct ScriptedPresenter {
    pub picks: VecDeque<Option<usize>>,
    pub pick_titles: Vec<String>,
    pub shown_tables: Vec<String>,
    pub details: Vec<SelectedRow>,
    pub notices: Vec<String>,
}

impl ScriptedPresenter {
    /// Scripted row picks, one per expected `pick_row` call (0-based row
    /// index, `None` cancels). An exhausted script also cancels.
    pub fn with_picks(picks: Vec<Option<usize>>) -> Self {
        Self {
            picks: picks.into(),
            ..Default::default()
        }
    }
}

impl Present for ScriptedPresenter {
    fn pick_row(&mut self, title: &str, table: &RowSet) -> io::Result<Option<SelectedRow>> {
        self.pick_titles.push(title.to_string());
        match self.picks.pop_front().flatten() {
            Some(index) => Ok(table.select(index)),
            None => Ok(None),
        }
    }

    fn show_table(&mut self, title: &str, _table: &RowSet) -> io::Result<()> {
        self.shown_tables.push(title.to_string());
        Ok(())
    }

    fn show_detail(&mut self, _title: &str, row: &SelectedRow) -> io::Result<()> {
        self.details.push(row.clone());
        Ok(())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}
