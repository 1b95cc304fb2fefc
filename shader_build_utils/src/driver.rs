use std::fs;

use log::info;

use crate::{
    scan_source_directory, spirv_output_path, BuildConfiguration, BuildError, ScannedShaders,
    ShaderCompiler,
};

/// Compiles every shader in the configured source directory into the target directory.
///
/// The source directory must already exist; the target directory is created on demand.
/// Fragment shaders are all compiled before any vertex shader. Per-shader compile failures
/// are not reported: the returned [`ScannedShaders`] lists what was handed to `compiler`,
/// not what it managed to produce.
pub fn build_shaders(
    config: &BuildConfiguration,
    compiler: &mut impl ShaderCompiler,
) -> Result<ScannedShaders, BuildError> {
    if !config.source_directory.is_dir() {
        return Err(BuildError::MissingSourceDirectory(
            config.source_directory.clone(),
        ));
    }

    fs::create_dir_all(&config.target_directory).map_err(|source| {
        BuildError::CreateTargetDirectory {
            path: config.target_directory.clone(),
            source,
        }
    })?;

    let shaders = scan_source_directory(&config.source_directory)?;
    for shader in shaders.in_compile_order() {
        let output = spirv_output_path(&config.target_directory, &shader.name);
        info!("Compiling {:?} into {:?}", shader.path, output);
        compiler.compile(&shader.path, &output);
    }

    info!(
        "Dispatched {} fragment and {} vertex shaders",
        shaders.fragment.len(),
        shaders.vertex.len()
    );
    Ok(shaders)
}
