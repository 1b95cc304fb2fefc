use std::path::{Path, PathBuf};

use crate::{GLSLC, SOURCE_SHADERS_DIRECTORY, TARGET_SHADERS_DIRECTORY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    pub source_directory: PathBuf,
    pub target_directory: PathBuf,
    pub compiler: String,
}

impl BuildConfiguration {
    /// `<working_directory>/src/shaders` compiled into `<working_directory>/build/shaders`.
    pub fn from_working_directory(working_directory: impl AsRef<Path>) -> Self {
        let working_directory = working_directory.as_ref();
        Self {
            source_directory: SOURCE_SHADERS_DIRECTORY
                .iter()
                .fold(working_directory.to_path_buf(), |path, part| path.join(part)),
            target_directory: TARGET_SHADERS_DIRECTORY
                .iter()
                .fold(working_directory.to_path_buf(), |path, part| path.join(part)),
            compiler: GLSLC.to_owned(),
        }
    }

    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::from_working_directory(std::env::current_dir()?))
    }

    pub fn with_source_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.source_directory = directory.as_ref().to_path_buf();
        self
    }

    pub fn with_target_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.target_directory = directory.as_ref().to_path_buf();
        self
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }
}
