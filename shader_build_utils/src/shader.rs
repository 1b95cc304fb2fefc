use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use crate::SPIRV_EXTENSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Fragment,
    Vertex,
}

impl ShaderStage {
    /// Stages in the order their suffixes are tested, which is also the order they are compiled in.
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Fragment, ShaderStage::Vertex];

    pub fn suffix(self) -> &'static str {
        match self {
            ShaderStage::Fragment => "frag",
            ShaderStage::Vertex => "vert",
        }
    }

    /// Matches the raw file name against each stage suffix, first match wins.
    /// `shader.frag` and `shaderfrag` are both fragment shaders.
    pub fn classify(file_name: &OsStr) -> Option<ShaderStage> {
        let bytes = file_name.as_encoded_bytes();
        Self::ALL
            .into_iter()
            .find(|stage| bytes.ends_with(stage.suffix().as_bytes()))
    }
}

/// A shader source found while scanning the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderFile {
    pub name: OsString,
    pub path: PathBuf,
}

impl ShaderFile {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn stage(&self) -> Option<ShaderStage> {
        ShaderStage::classify(&self.name)
    }

    pub fn output_file_name(&self) -> OsString {
        spirv_file_name(&self.name)
    }
}

fn spirv_file_name(name: &OsStr) -> OsString {
    let mut output = name.to_os_string();
    output.push(".");
    output.push(SPIRV_EXTENSION);
    output
}

/// `triangle.vert` in `build/shaders` becomes `build/shaders/triangle.vert.spv`.
pub fn spirv_output_path(target_directory: &Path, shader_name: impl AsRef<OsStr>) -> PathBuf {
    target_directory.join(spirv_file_name(shader_name.as_ref()))
}
