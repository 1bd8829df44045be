//! Integration-test harness for the SQL Server e-commerce database.
//!
//! Provides the connection/cursor lifecycle used by the database tests:
//! environment-driven configuration, a session-scoped ODBC connection with
//! explicit transaction control, and per-test cursors with guaranteed
//! release.

pub mod config;
pub mod error;
pub mod odbc;
