use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {path}, line {line}: {source}")]
    SeedParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("inference request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("console: {0}")]
    Console(#[source] std::io::Error),

    #[error("input closed before a suspect was chosen")]
    InputClosed,
}

impl CaseError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CaseError>;
