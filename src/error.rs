use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to link {} -> {source_path}", .destination.display())]
    Link {
        source_path: String,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// 底层 IO 错误类型（例如 AlreadyExists）
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            SortError::CreateDir { source, .. } | SortError::Link { source, .. } => source.kind(),
        }
    }
}
