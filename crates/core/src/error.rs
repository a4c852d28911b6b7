use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum NetbarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sampler error: {0}")]
    Sampler(String),

    #[error("state file error: {0}")]
    Store(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = NetbarError> = std::result::Result<T, E>;
