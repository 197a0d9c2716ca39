use std::path::{Path, PathBuf};

/// Appended to the full source file name, so `basic.vert` becomes `basic.vert.spv`.
pub const ARTIFACT_EXTENSION: &str = "spv";

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub shader_dir: PathBuf,
    pub output_dir: PathBuf,
    pub compiler: PathBuf,
    pub extensions: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            shader_dir: PathBuf::from("./resources/shaders"),
            output_dir: PathBuf::from("./bin/debug/sandbox/resources/shaders"),
            compiler: PathBuf::from("glslc"),
            extensions: vec!["frag".to_string(), "vert".to_string()],
        }
    }
}

impl BuildConfig {
    pub fn with_shader_dir(mut self, shader_dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = shader_dir.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_compiler(mut self, compiler: impl Into<PathBuf>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Whether `file_name` ends with `.<ext>` for one of the recognised extensions.
    pub fn is_shader_source(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    pub fn artifact_path(&self, source: &Path) -> PathBuf {
        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        self.output_dir
            .join(format!("{file_name}.{ARTIFACT_EXTENSION}"))
    }
}
