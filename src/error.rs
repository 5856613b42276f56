use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AboutError {
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse token file '{path}': {message}")]
    TokenFileParse { path: PathBuf, message: String },

    #[error("Failed to parse config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Truncation limit must be positive, got {0}")]
    InvalidLimit(usize),

    #[error("Token file '{0}' contains no tokens")]
    EmptyTokenFile(PathBuf),

    #[error("No token given: pass --address and --chain, or --token-file")]
    MissingToken,

    #[error("Unsupported token file format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Could not open '{url}': {message}")]
    OpenLink { url: String, message: String },
}

/// Result type alias for token-about operations.
pub type AboutResult<T> = Result<T, AboutError>;
