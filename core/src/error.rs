use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SqlError {
    #[error("Unsupported database URL: {0}")]
    UnsupportedDatabase(String),
    /// `?` 占位符数量与绑定参数数量不一致
    #[error("Placeholder mismatch: {placeholders} placeholder(s) but {params} parameter(s)")]
    PlaceholderMismatch { placeholders: usize, params: usize },
}

pub type Result<T> = std::result::Result<T, SqlError>;
