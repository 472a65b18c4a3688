//! Database connection management.

use postgres::types::{ToSql, Type};
use postgres::{Client, Config, NoTls, Row};

use crate::config::DbSettings;
use crate::error::{Result, SearchError};

use super::rows::{RowSet, Value};

const TABLE_EXISTS: &str = "SELECT EXISTS (
    SELECT 1 FROM information_schema.tables
    WHERE table_schema = current_schema() AND table_name = $1::text
)";

/// The one live connection to the relational engine.
///
/// Holds `None` once closed; issuing a query against a closed handle is a
/// `Query` error, closing twice is a no-op.
pub struct DbClient {
    client: Option<Client>,
}

impl DbClient {
    /// Open a connection from the resolved settings.
    ///
    /// Fails with a `Connection` error if the engine is unreachable or the
    /// credentials are rejected; nothing is retained on failure.
    pub fn connect(settings: &DbSettings) -> Result<Self> {
        let mut config = Config::new();
        config
            .host(&settings.host)
            .port(settings.port)
            .user(&settings.user)
            .dbname(&settings.database)
            .application_name("film_search");
        if let Some(password) = &settings.password {
            config.password(password);
        }

        let client = config.connect(NoTls).map_err(|e| SearchError::Connection {
            message: e.to_string(),
        })?;

        Ok(Self {
            client: Some(client),
        })
    }

    pub fn is_open(&self) -> bool {
        self.client.is_some()
    }

    fn open(&mut self) -> Result<&mut Client> {
        self.client
            .as_mut()
            .ok_or_else(|| SearchError::query("no open database connection"))
    }

    /// Raw client access for the popularity logger's transaction scope.
    pub(crate) fn client_mut(&mut self) -> Option<&mut Client> {
        self.client.as_mut()
    }

    /// Execute `statement` with positional parameter binding and collect
    /// the result into a [`RowSet`].
    pub fn execute(&mut self, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<RowSet> {
        let client = self.open()?;
        let rows = client
            .query(statement, params)
            .map_err(|e| SearchError::query(e.to_string()))?;
        rows_to_set(&rows)
    }

    /// Whether a table named `name` exists in the current schema.
    pub fn table_exists(&mut self, name: &str) -> Result<bool> {
        let client = self.open()?;
        let row = client
            .query_one(TABLE_EXISTS, &[&name])
            .map_err(|e| SearchError::query(e.to_string()))?;
        row.try_get(0).map_err(|e| SearchError::query(e.to_string()))
    }

    /// Close the connection. Tolerates an already-closed handle and never
    /// returns an error; close failures are logged and the call completes.
    pub fn close(&mut self) {
        if let Some(client) = self.client.take() {
            if let Err(e) = client.close() {
                log::warn!("error closing database connection: {}", e);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn closed() -> Self {
        Self { client: None }
    }
}

impl Drop for DbClient {
    fn drop(&mut self) {
        self.close();
    }
}

fn rows_to_set(rows: &[Row]) -> Result<RowSet> {
    let Some(first) = rows.first() else {
        return Ok(RowSet::default());
    };

    let headers: Vec<String> = first
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(headers.len());
        for idx in 0..row.len() {
            cells.push(cell_value(row, idx)?);
        }
        data.push(cells);
    }

    Ok(RowSet::new(headers, data))
}

/// Convert one cell into a [`Value`], NULLs included.
///
/// Only the types the catalog statements can produce are supported;
/// anything else must be cast in the statement.
fn cell_value(row: &Row, idx: usize) -> Result<Value> {
    let column = &row.columns()[idx];
    let ty = column.type_();

    let fetched: std::result::Result<Option<Value>, postgres::Error> = if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)
            .map(|v| v.map(|v| Value::Int(i64::from(v))))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)
            .map(|v| v.map(|v| Value::Int(i64::from(v))))
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx).map(|v| v.map(Value::Int))
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(idx)
            .map(|v| v.map(|v| Value::Float(f64::from(v))))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(idx)
            .map(|v| v.map(Value::Float))
    } else if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(idx).map(|v| v.map(Value::Bool))
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME
    {
        row.try_get::<_, Option<String>>(idx)
            .map(|v| v.map(Value::Text))
    } else {
        return Err(SearchError::query(format!(
            "unsupported column type '{}' for column '{}'; cast it in the statement",
            ty,
            column.name()
        )));
    };

    fetched.map(|v| v.unwrap_or(Value::Null)).map_err(|e| {
        SearchError::query(format!("failed to read column '{}': {}", column.name(), e))
    })
}
