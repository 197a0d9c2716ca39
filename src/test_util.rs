use std::{
    fs,
    path::{Path, PathBuf},
};

/// A throwaway directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("shaderbuild-{:016x}", fastrand::u64(..)));
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn mkdir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn touch(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
