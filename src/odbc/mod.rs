pub mod conn;
pub mod cursor;
