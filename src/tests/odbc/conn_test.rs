#[cfg(test)]
mod tests {
    use std::env;

    use crate::config::DbConfig;
    use crate::odbc::conn::OdbcEnv;

    #[test]
    fn test_environment_allocation() {
        let result = OdbcEnv::new();

        assert!(
            result.is_ok(),
            "Expected Ok(OdbcEnv), got {:?}",
            result.err()
        );
    }

    #[test]
    fn test_connect_success() {
        if env::var("DB_SERVER").is_err() {
            eprintln!("DB_SERVER not set; skipping");
            return;
        }

        let odbc = OdbcEnv::new().expect("failed to allocate ODBC environment");
        let config = DbConfig::from_env();

        let result = odbc.connect(&config);

        assert!(result.is_ok(), "Expected Ok(DbSession), got an error");
    }
}
