//! Database layer: connection management, the query catalog, result rows,
//! and popularity logging.

pub mod catalog;
pub mod connection;
pub mod popularity;
pub mod rows;

pub use catalog::{resolve, Operation};
pub use connection::DbClient;
pub use popularity::UsageKind;
pub use rows::{RowSet, SelectedRow, Value};

use crate::error::Result;

/// The seam the search flows run against.
///
/// `DbClient` is the production implementation; tests substitute a
/// scripted fake so flow sequencing can be checked without an engine.
pub trait Backend {
    /// Execute a catalog operation and return its rows.
    fn run(&mut self, op: &Operation) -> Result<RowSet>;

    /// Whether a table exists in the current schema.
    fn table_exists(&mut self, name: &str) -> Result<bool>;

    /// Record one use of a search in the popularity log.
    fn log_use(&mut self, kind: UsageKind, text: &str) -> Result<()>;
}

impl Backend for DbClient {
    fn run(&mut self, op: &Operation) -> Result<RowSet> {
        self.execute(op.statement(), &op.params())
    }

    fn table_exists(&mut self, name: &str) -> Result<bool> {
        DbClient::table_exists(self, name)
    }

    fn log_use(&mut self, kind: UsageKind, text: &str) -> Result<()> {
        popularity::record(self, kind, text)
    }
}
