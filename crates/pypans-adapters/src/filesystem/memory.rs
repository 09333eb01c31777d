//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use pypans_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PansResult,
};

/// In-memory filesystem for testing.
///
/// Mirrors the local adapter's contract: directories are created one level
/// at a time and files can only be written under an existing directory.
/// File bodies are raw bytes so binary templates survive a copy.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create `path` and all of its ancestors (testing helper).
    pub fn add_dir_all(&self, path: &Path) {
        let mut inner = self.write_lock();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Place a file directly, creating its ancestors (testing helper).
    pub fn add_file(&self, path: &Path, content: impl Into<Vec<u8>>) {
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        self.write_lock()
            .files
            .insert(path.to_path_buf(), content.into());
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read_bytes(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Read a file's raw bytes (testing helper).
    pub fn read_bytes(&self, path: &Path) -> Option<Vec<u8>> {
        self.read_lock().files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.read_lock().executables.contains(path)
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn ensure_parent(&self, path: &Path) -> PansResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.directories.contains(parent) {
                return Err(ApplicationError::FileAccess {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> PansResult<()> {
        let mut inner = self.write_lock();
        if inner.exists(path) {
            return Err(ApplicationError::DirectoryExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.ensure_parent(path)?;
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> PansResult<String> {
        let inner = self.read_lock();
        let bytes = inner
            .files
            .get(path)
            .ok_or_else(|| ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            })?;
        String::from_utf8(bytes.clone()).map_err(|e| {
            ApplicationError::FileAccess {
                path: path.to_path_buf(),
                reason: format!("Failed to read file: {}", e),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> PansResult<()> {
        let mut inner = self.write_lock();
        inner.ensure_parent(path)?;
        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> PansResult<()> {
        let mut inner = self.write_lock();
        inner.ensure_parent(path)?;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(content.as_bytes());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> PansResult<()> {
        let mut inner = self.write_lock();
        let bytes = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| ApplicationError::FileAccess {
                path: to.to_path_buf(),
                reason: format!("Failed to copy file: {} does not exist", from.display()),
            })?;
        inner.ensure_parent(to)?;
        inner.files.insert(to.to_path_buf(), bytes);
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> PansResult<()> {
        let mut inner = self.write_lock();
        if !inner.files.contains_key(path) {
            return Err(ApplicationError::FileAccess {
                path: path.to_path_buf(),
                reason: "Failed to get metadata: no such file".into(),
            }
            .into());
        }

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_lock().exists(path)
    }
}
