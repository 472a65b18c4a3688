//! Popularity tracking for user-initiated searches.
//!
//! Each successful search upserts a frequency counter keyed by
//! (usage kind, argument text). The backing table is created lazily, and
//! creation plus upsert run inside one transaction: either both land or
//! neither does.

use crate::error::{Result, SearchError};

use super::connection::DbClient;

/// Name of the table this module owns.
pub const TABLE_NAME: &str = "popular_query";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS popular_query (
    log_id      integer GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    type_query  text NOT NULL,
    text_query  text NOT NULL,
    count       integer NOT NULL DEFAULT 1,
    query_time  timestamptz NOT NULL DEFAULT now(),
    UNIQUE (type_query, text_query)
)
"#;

// Single-statement upsert: an existence check followed by an insert would
// race against concurrent writers of the same (type, text) pair.
const UPSERT: &str = r#"
INSERT INTO popular_query (type_query, text_query)
VALUES ($1, $2)
ON CONFLICT (type_query, text_query)
DO UPDATE SET count = popular_query.count + 1, query_time = now()
"#;

/// The kinds of searches the log distinguishes.
///
/// All three keyword scopes log under the same kind, as the keyword they
/// share is what users care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    FilmByKeyword,
    FilmByCategoryAndYear,
    FilmByActor,
}

impl UsageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilmByKeyword => "film_by_keyword",
            Self::FilmByCategoryAndYear => "film_by_category_and_year",
            Self::FilmByActor => "film_by_actor",
        }
    }
}

/// Record one use of a search.
///
/// Creates the backing table if absent, then inserts the pair with count 1
/// or bumps the existing counter, all in one transaction. On any failure
/// the transaction rolls back (dropped uncommitted) and a `Log` error is
/// returned; callers report it but keep their already-presented results.
pub fn record(db: &mut DbClient, kind: UsageKind, text: &str) -> Result<()> {
    let client = db.client_mut().ok_or_else(|| SearchError::Log {
        message: "no open database connection".to_string(),
    })?;

    let mut tx = client.transaction().map_err(log_error)?;
    tx.batch_execute(CREATE_TABLE).map_err(log_error)?;
    tx.execute(UPSERT, &[&kind.as_str(), &text])
        .map_err(log_error)?;
    tx.commit().map_err(log_error)?;

    Ok(())
}

fn log_error(e: postgres::Error) -> SearchError {
    SearchError::Log {
        message: e.to_string(),
    }
}
