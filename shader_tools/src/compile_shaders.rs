use clap::Parser;
use log::info;
use shader_build_utils::{build_shaders, BuildConfiguration, Glslc};

/// Compiles ./src/shaders/*.{frag,vert} into ./build/shaders/<name>.spv using glslc
#[derive(Parser, Debug)]
#[command(version, about)]
struct CompileShadersArgs {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = CompileShadersArgs::parse();

    let config = BuildConfiguration::from_current_dir()?;
    info!(
        "Compiling shaders from {:?} into {:?}",
        config.source_directory, config.target_directory
    );

    let mut compiler = Glslc::with_command(config.compiler.clone());
    build_shaders(&config, &mut compiler)?;
    Ok(())
}
