use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("There is no source path: {0:?}")]
    MissingSourceDirectory(PathBuf),

    #[error("Could not create target directory {path:?}")]
    CreateTargetDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read source directory {path:?}")]
    ReadSourceDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
