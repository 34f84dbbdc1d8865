use crate::pokemon;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),
    #[error("decoding failed: {0}")]
    Decode(Arc<serde_json::Error>),
    #[error("io operation failed: {0}")]
    Io(Arc<io::Error>),
    #[error("duplicate pokedex number: {0}")]
    DuplicateEntry(pokemon::Id),
    #[error("catalog loading was interrupted")]
    Interrupted,
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::Io(Arc::new(io::Error::from(error)))
        } else {
            Self::Decode(Arc::new(error))
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}
