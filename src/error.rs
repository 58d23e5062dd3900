use std::path::PathBuf;

/// Failures that abort a whole run.
///
/// Anything that goes wrong with a single entry is not an error at this
/// level; it degrades to placeholder text inside that entry's section.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("zip file not found: {}", path.display())]
    ArchiveNotFound { path: PathBuf },

    #[error("cannot read archive {}: {reason:#}", path.display())]
    Archive { path: PathBuf, reason: anyhow::Error },

    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DigestError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            DigestError::ArchiveNotFound { .. } => 2,
            DigestError::Archive { .. } | DigestError::Output { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
