//! CLI error type.

use std::io;
use std::path::PathBuf;

use folio_lib::error::{ShapeError, TableError};
use folio_lib::model::UnknownStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Status(#[from] UnknownStatus),
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

impl CliError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
