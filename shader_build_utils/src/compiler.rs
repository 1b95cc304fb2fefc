use std::{
    path::Path,
    process::{Command, ExitStatus},
};

use log::debug;

use crate::GLSLC;

/// Turns one shader source into a SPIR-V binary at `output`.
///
/// Compilation is fire-and-forget: implementations report nothing back, and a shader that
/// fails to compile never stops the rest of the batch.
pub trait ShaderCompiler {
    fn compile(&mut self, source: &Path, output: &Path);
}

/// Shells out to `glslc <source> -o <output>`, blocking until the process exits.
/// The compiler's own stdout and stderr go straight to the console.
#[derive(Debug, Clone)]
pub struct Glslc {
    command: String,
}

impl Glslc {
    pub fn new() -> Self {
        Self::with_command(GLSLC)
    }

    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn run(&self, source: &Path, output: &Path) -> std::io::Result<ExitStatus> {
        Command::new(&self.command)
            .arg(source)
            .arg("-o")
            .arg(output)
            .status()
    }
}

impl Default for Glslc {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderCompiler for Glslc {
    fn compile(&mut self, source: &Path, output: &Path) {
        match self.run(source, output) {
            Ok(status) if !status.success() => {
                debug!("{} exited with {} for {:?}", self.command, status, source)
            }
            Err(e) => debug!("Could not spawn {} for {:?}: {}", self.command, source, e),
            Ok(_) => {}
        }
    }
}
