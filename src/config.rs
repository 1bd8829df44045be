use std::env;

/// Connection settings for the e-commerce test database, resolved from the
/// environment with the documented defaults. No credential validation
/// happens here; a bad value surfaces as a driver connection failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub server: String,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Loads a local `.env` file if present, then resolves `DB_SERVER`,
    /// `DB_NAME`, `DB_USER` and `DB_PASSWORD` from the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the four settings through `lookup`, falling back to the
    /// defaults for any key it does not answer.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: lookup("DB_SERVER").unwrap_or_else(|| "localhost".into()),
            database: lookup("DB_NAME").unwrap_or_else(|| "ecommerce_db".into()),
            user: lookup("DB_USER").unwrap_or_else(|| "sa".into()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
        }
    }

    /// ODBC connection descriptor for SQL Server.
    pub fn connection_string(&self) -> String {
        format!(
            "DRIVER={{ODBC Driver 17 for SQL Server}};SERVER={};DATABASE={};UID={};PWD={};",
            self.server, self.database, self.user, self.password
        )
    }
}
