use std::path::PathBuf;

use thiserror::Error;

/// User-facing errors.
///
/// Statement-level parse failures are not represented here: they are
/// recovered inside the extractor by passing the fragment through
/// unchanged, and never reach the operator.
#[derive(Error, Debug)]
pub enum MdsqlfmtError {
    #[error("mdsqlfmt config error: {0}")]
    Config(String),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MdsqlfmtError>;
