use thiserror::Error;

/// Failures surfaced by the harness. Nothing is retried; every variant
/// propagates straight to the test runner.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to allocate ODBC environment")]
    Environment(#[source] odbc_api::Error),

    #[error("failed to connect to database")]
    Connect(#[source] odbc_api::Error),

    #[error("query execution failed")]
    Query(#[source] odbc_api::Error),
}
