use log::debug;
use odbc_api::{Connection, Cursor, ParameterCollectionRef, buffers::TextRowSet};

use crate::error::HarnessError;

const BUFFER_SIZE: usize = 4_096;

/// A test-local handle on the session connection. Each test body gets its
/// own cursor through [`DbSession::with_cursor`] and the handle is released
/// when the body finishes, regardless of outcome.
///
/// [`DbSession::with_cursor`]: crate::odbc::conn::DbSession::with_cursor
pub struct DbCursor<'conn, 'env> {
    conn: &'conn Connection<'env>,
}

impl<'conn, 'env> DbCursor<'conn, 'env> {
    pub(crate) fn new(conn: &'conn Connection<'env>) -> Self {
        Self { conn }
    }

    /// Runs a parameterized statement and discards any result set it
    /// produces. Used for stored-procedure calls.
    pub fn execute(
        &mut self,
        sql: &str,
        params: impl ParameterCollectionRef,
    ) -> Result<(), HarnessError> {
        debug!("executing: {sql}");

        let mut stmt = self.conn.prepare(sql).map_err(HarnessError::Query)?;
        stmt.execute(params).map_err(HarnessError::Query)?;

        Ok(())
    }

    /// Runs a parameterized query and fetches at most one row, returning
    /// its columns as text.
    pub fn query_one(
        &mut self,
        sql: &str,
        params: impl ParameterCollectionRef,
    ) -> Result<Option<Vec<String>>, HarnessError> {
        debug!("querying: {sql}");

        let mut stmt = self.conn.prepare(sql).map_err(HarnessError::Query)?;
        let executed = stmt.execute(params).map_err(HarnessError::Query)?;

        let Some(mut cursor) = executed else {
            return Ok(None);
        };

        let mut buffers = TextRowSet::for_cursor(1, &mut cursor, Some(BUFFER_SIZE))
            .map_err(HarnessError::Query)?;
        let mut row_set_cursor = cursor.bind_buffer(&mut buffers).map_err(HarnessError::Query)?;

        if let Some(batch) = row_set_cursor.fetch().map_err(HarnessError::Query)? {
            if batch.num_rows() > 0 {
                let row = (0..batch.num_cols())
                    .map(|col| {
                        String::from_utf8_lossy(batch.at(col, 0).unwrap_or(&[])).into_owned()
                    })
                    .collect();

                return Ok(Some(row));
            }
        }

        Ok(None)
    }

    /// Commits the transaction on the owning connection. Transaction
    /// control belongs to the test body, never to the cursor lifecycle.
    pub fn commit(&mut self) -> Result<(), HarnessError> {
        self.conn.commit().map_err(HarnessError::Query)
    }
}
