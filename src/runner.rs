use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::{
    compiler::{CompileOutcome, ShaderCompiler},
    config::BuildConfig,
    discover::discover_shaders,
    output::ensure_output_dir,
};

#[derive(Debug)]
pub struct FailedShader {
    pub source: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub compiled: Vec<PathBuf>,
    pub failed: Vec<FailedShader>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turns any recorded failures into a single error.
    pub fn into_result(self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }

        let names = self
            .failed
            .iter()
            .map(|failed| format!("{} ({})", failed.source.display(), failed.reason))
            .collect::<Vec<_>>()
            .join(", ");

        bail!(
            "{} of {} shaders failed to compile: {names}",
            self.failed.len(),
            self.failed.len() + self.compiled.len()
        )
    }
}

pub struct ShaderBuild<C> {
    config: BuildConfig,
    compiler: C,
}

impl<C: ShaderCompiler> ShaderBuild<C> {
    pub fn new(config: BuildConfig, compiler: C) -> Self {
        Self { config, compiler }
    }

    /// Discovers every shader, makes sure the output directory exists, then compiles each
    /// source in turn. A failing shader never stops the remaining ones from being compiled.
    ///
    /// Only filesystem problems with the shader or output directory are returned as `Err`.
    pub fn run(&mut self) -> Result<BuildReport> {
        let shaders = discover_shaders(&self.config)?;
        ensure_output_dir(&self.config.output_dir)?;

        let mut report = BuildReport::default();

        for source in shaders {
            log::info!("Compiling {}...", source.display());

            let artifact = self.config.artifact_path(&source);
            let reason = match self.compiler.compile(&source, &artifact) {
                Ok(CompileOutcome::Succeeded) => {
                    report.compiled.push(source);
                    continue;
                }
                Ok(CompileOutcome::Failed { code: Some(code) }) => {
                    format!("compiler exited with status {code}")
                }
                Ok(CompileOutcome::Failed { code: None }) => {
                    "compiler was terminated by a signal".to_string()
                }
                Err(err) => format!("{err:#}"),
            };

            log::error!("Failed to compile {}: {reason}", source.display());
            report.failed.push(FailedShader { source, reason });
        }

        if report.is_success() {
            log::info!("Shaders compiled successfully!");
        }

        Ok(report)
    }
}
