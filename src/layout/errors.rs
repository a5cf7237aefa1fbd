#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("io error: {0}")] Io(#[from] std::io::Error),
    #[error("invalid layout document: {0}")] Json(#[from] serde_json::Error),
    #[error("duplicate column '{column}' in table '{table}'")] DuplicateColumn { table: String, column: String },
    #[error("table with empty name")] EmptyTableName,
    #[error("config error: {0}")] Config(String),
    #[error("usage: {0}")] Usage(String),
}
