use std::{fs, path::Path};

use log::debug;

use crate::{BuildError, ShaderFile, ShaderStage};

/// Shaders found in a source directory, split by stage, in directory enumeration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScannedShaders {
    pub fragment: Vec<ShaderFile>,
    pub vertex: Vec<ShaderFile>,
}

impl ScannedShaders {
    fn push(&mut self, stage: ShaderStage, shader: ShaderFile) {
        match stage {
            ShaderStage::Fragment => self.fragment.push(shader),
            ShaderStage::Vertex => self.vertex.push(shader),
        }
    }

    /// Every fragment shader, then every vertex shader.
    pub fn in_compile_order(&self) -> impl Iterator<Item = &ShaderFile> {
        self.fragment.iter().chain(self.vertex.iter())
    }

    pub fn len(&self) -> usize {
        self.fragment.len() + self.vertex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects the regular files directly inside `directory` whose names end in a stage suffix.
/// Subdirectories are not descended into.
pub fn scan_source_directory(directory: &Path) -> Result<ScannedShaders, BuildError> {
    let read_error = |source: std::io::Error| BuildError::ReadSourceDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let mut shaders = ScannedShaders::default();
    for entry in fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(stage) = ShaderStage::classify(&name) else {
            debug!("Ignoring {:?}, not a shader", path);
            continue;
        };
        shaders.push(stage, ShaderFile::new(name, path));
    }
    Ok(shaders)
}
