mod compiler;
mod config;
mod driver;
mod error;
mod scan;
mod shader;

pub use compiler::{Glslc, ShaderCompiler};
pub use config::BuildConfiguration;
pub use driver::build_shaders;
pub use error::BuildError;
pub use scan::{scan_source_directory, ScannedShaders};
pub use shader::{spirv_output_path, ShaderFile, ShaderStage};

/// Where shader sources live, relative to the working directory.
pub const SOURCE_SHADERS_DIRECTORY: [&str; 2] = ["src", "shaders"];

/// Where compiled SPIR-V is written, relative to the working directory.
pub const TARGET_SHADERS_DIRECTORY: [&str; 2] = ["build", "shaders"];

/// The compiler executable, resolved through `PATH`.
pub const GLSLC: &str = "glslc";

pub const SPIRV_EXTENSION: &str = "spv";
