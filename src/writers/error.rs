
use std::path::{Path, PathBuf};

/// Everything that can go wrong while writing quantification results.
/// Partially written files are left on disk; a re-run overwrites them.
#[derive(thiserror::Error, Debug)]
pub enum WriterError {
    #[error("failed to create directory {path:?}: {source}")]
    DirectoryCreation { path: PathBuf, source: std::io::Error },
    #[error("failed to open {path:?} for writing: {source}")]
    StreamOpen { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("failed to write table {path:?}: {source}")]
    Table { path: PathBuf, source: csv::Error },
    #[error("failed to write manifest: {0:#}")]
    Manifest(anyhow::Error),
    #[error("failed to sample the fragment length distribution: {0}")]
    FragmentLengthDistribution(#[from] rand::distributions::WeightedError),
    #[error("experiment has no transcripts")]
    EmptyExperiment,
    #[error("bootstrap folder is not set, metadata must be written before any bootstraps")]
    BootstrapFolderUnset,
}

/// Builds a mapper for errors while creating `path`
pub(crate) fn dir_error(path: &Path) -> impl FnOnce(std::io::Error) -> WriterError + '_ {
    move |source| WriterError::DirectoryCreation { path: path.to_owned(), source }
}

/// Builds a mapper for errors while opening `path`
pub(crate) fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> WriterError + '_ {
    move |source| WriterError::StreamOpen { path: path.to_owned(), source }
}

/// Builds a mapper for errors while writing `path`
pub(crate) fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> WriterError + '_ {
    move |source| WriterError::Write { path: path.to_owned(), source }
}

/// Builds a mapper for csv errors while writing `path`
pub(crate) fn table_error(path: &Path) -> impl FnOnce(csv::Error) -> WriterError + '_ {
    move |source| WriterError::Table { path: path.to_owned(), source }
}

/// Creates `path` and any missing parents; an existing folder is fine.
/// # Errors
/// * if the folder cannot be created
pub(crate) fn create_folder(path: &Path) -> Result<(), WriterError> {
    std::fs::create_dir_all(path)
        .map_err(dir_error(path))
}
