#![cfg(unix)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

struct Project {
    root: TempDir,
    bin: TempDir,
}

impl Project {
    /// A working directory plus a `glslc` on PATH that logs each invocation and writes the output.
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();

        let log = bin.path().join("invocations.log");
        let script = format!(
            "#!/bin/sh\necho \"$1 $2 $3\" >> '{}'\necho compiled > \"$3\"\n",
            log.display()
        );
        let glslc = bin.path().join("glslc");
        fs::write(&glslc, script).unwrap();
        fs::set_permissions(&glslc, fs::Permissions::from_mode(0o755)).unwrap();

        Self { root, bin }
    }

    // The binary sees the canonical working directory.
    fn working_directory(&self) -> PathBuf {
        self.root.path().canonicalize().unwrap()
    }

    fn source(&self) -> PathBuf {
        self.working_directory().join("src").join("shaders")
    }

    fn target(&self) -> PathBuf {
        self.working_directory().join("build").join("shaders")
    }

    fn add_shader(&self, name: &str) {
        fs::create_dir_all(self.source()).unwrap();
        fs::write(self.source().join(name), "#version 450\nvoid main() {}\n").unwrap();
    }

    fn run(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_compile_shaders"))
            .current_dir(self.root.path())
            .env("PATH", self.bin.path())
            .output()
            .unwrap()
    }

    fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.bin.path().join("invocations.log"))
            .map(|log| log.lines().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}

fn invocation(source: &Path, target: &Path) -> String {
    format!("{} -o {}", source.display(), target.display())
}

#[test]
fn compiles_fragment_then_vertex_shaders() {
    let project = Project::new();
    project.add_shader("a.vert");
    project.add_shader("b.frag");
    project.add_shader("c.txt");
    fs::create_dir(project.source().join("d")).unwrap();

    let output = project.run();
    assert!(output.status.success());

    let source = project.source();
    let target = project.target();
    assert_eq!(
        project.invocations(),
        [
            invocation(&source.join("b.frag"), &target.join("b.frag.spv")),
            invocation(&source.join("a.vert"), &target.join("a.vert.spv")),
        ]
    );
    assert!(target.join("b.frag.spv").is_file());
    assert!(target.join("a.vert.spv").is_file());
    assert!(!target.join("c.txt.spv").exists());
}

#[test]
fn suffix_without_dot_is_a_shader() {
    let project = Project::new();
    project.add_shader("weirdfrag");

    assert!(project.run().status.success());
    assert_eq!(
        project.invocations(),
        [invocation(
            &project.source().join("weirdfrag"),
            &project.target().join("weirdfrag.spv")
        )]
    );
}

#[test]
fn empty_source_succeeds_and_creates_target() {
    let project = Project::new();
    fs::create_dir_all(project.source()).unwrap();

    assert!(project.run().status.success());
    assert!(project.invocations().is_empty());
    assert!(project.target().is_dir());
}

#[test]
fn missing_source_fails_without_writing() {
    let project = Project::new();

    let output = project.run();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("There is no source path"));
    assert!(!project.root.path().join("build").exists());
    assert!(project.invocations().is_empty());
}

#[test]
fn failing_compiler_does_not_fail_the_build() {
    let project = Project::new();
    project.add_shader("broken.frag");
    project.add_shader("fine.vert");
    fs::write(project.bin.path().join("glslc"), "#!/bin/sh\nexit 1\n").unwrap();

    assert!(project.run().status.success());
    assert!(project.target().is_dir());
    assert!(!project.target().join("broken.frag.spv").exists());
}

#[test]
fn missing_compiler_does_not_fail_the_build() {
    let project = Project::new();
    project.add_shader("glow.frag");
    fs::remove_file(project.bin.path().join("glslc")).unwrap();

    assert!(project.run().status.success());
    assert!(!project.target().join("glow.frag.spv").exists());
}

#[test]
fn existing_target_files_are_left_alone() {
    let project = Project::new();
    project.add_shader("glow.frag");
    fs::create_dir_all(project.target()).unwrap();
    fs::write(project.target().join("old.bin"), "untouched").unwrap();

    assert!(project.run().status.success());
    assert_eq!(
        fs::read_to_string(project.target().join("old.bin")).unwrap(),
        "untouched"
    );
    assert!(project.target().join("glow.frag.spv").is_file());
}
