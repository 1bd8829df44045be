use log::info;
use odbc_api::{Connection, ConnectionOptions, Environment};

use crate::config::DbConfig;
use crate::error::HarnessError;
use crate::odbc::cursor::DbCursor;

/// Owns the process ODBC environment. Constructed once per test session and
/// must outlive every connection derived from it.
pub struct OdbcEnv {
    environment: Environment,
}

impl OdbcEnv {
    pub fn new() -> Result<Self, HarnessError> {
        let environment = Environment::new().map_err(HarnessError::Environment)?;

        Ok(Self { environment })
    }

    /// Opens the session connection described by `config`. Autocommit is
    /// disabled so transaction control stays with the test body.
    pub fn connect(&self, config: &DbConfig) -> Result<DbSession<'_>, HarnessError> {
        info!(
            "connecting to {} on {} as {}",
            config.database, config.server, config.user
        );

        let conn = self
            .environment
            .connect_with_connection_string(
                &config.connection_string(),
                ConnectionOptions::default(),
            )
            .map_err(HarnessError::Connect)?;

        conn.set_autocommit(false).map_err(HarnessError::Connect)?;

        Ok(DbSession { conn })
    }
}

/// The session-scoped database connection. One per test session, shared by
/// every test; dropping it disconnects exactly once.
pub struct DbSession<'env> {
    conn: Connection<'env>,
}

impl<'env> DbSession<'env> {
    /// Yields a fresh cursor to `body` and releases it on every exit path,
    /// whether `body` returns, errors, or unwinds.
    pub fn with_cursor<T, F>(&self, body: F) -> Result<T, HarnessError>
    where
        F: FnOnce(&mut DbCursor<'_, 'env>) -> Result<T, HarnessError>,
    {
        let mut cursor = DbCursor::new(&self.conn);
        body(&mut cursor)
    }

    pub fn commit(&self) -> Result<(), HarnessError> {
        self.conn.commit().map_err(HarnessError::Query)
    }

    pub fn rollback(&self) -> Result<(), HarnessError> {
        self.conn.rollback().map_err(HarnessError::Query)
    }
}
