use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    Succeeded,
    /// `code` is `None` when the process was terminated by a signal.
    Failed { code: Option<i32> },
}

pub trait ShaderCompiler {
    /// Compiles one shader source into `output`, blocking until the compiler exits.
    fn compile(&mut self, input: &Path, output: &Path) -> Result<CompileOutcome>;
}

/// Runs an external `glslc`-compatible executable as `<compiler> <input> -o <output>`.
///
/// The child inherits stdout and stderr so its diagnostics reach the console directly.
pub struct Glslc {
    executable: PathBuf,
}

impl Glslc {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl ShaderCompiler for Glslc {
    fn compile(&mut self, input: &Path, output: &Path) -> Result<CompileOutcome> {
        let status = Command::new(&self.executable)
            .arg(input)
            .arg("-o")
            .arg(output)
            .status()
            .with_context(|| format!("Failed to run {}", self.executable.display()))?;

        Ok(if status.success() {
            CompileOutcome::Succeeded
        } else {
            CompileOutcome::Failed {
                code: status.code(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_an_error() {
        let mut compiler = Glslc::new("shaderbuild-no-such-compiler");

        assert!(
            compiler
                .compile(Path::new("basic.vert"), Path::new("basic.vert.spv"))
                .is_err()
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_reported() {
        assert_eq!(
            Glslc::new("true")
                .compile(Path::new("a.vert"), Path::new("a.vert.spv"))
                .unwrap(),
            CompileOutcome::Succeeded
        );
        assert_eq!(
            Glslc::new("false")
                .compile(Path::new("a.vert"), Path::new("a.vert.spv"))
                .unwrap(),
            CompileOutcome::Failed { code: Some(1) }
        );
    }
}
