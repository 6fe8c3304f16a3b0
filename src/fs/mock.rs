use super::{FileSystem, FileType};
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<Vec<u8>>,
    pub file_type: FileType,
}

/// In-memory file system rooted at `/mock` unless another root is given.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root: root.clone(),
        };
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    /// Registers a file with arbitrary, possibly non-UTF-8, contents.
    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: Some(content.to_vec()),
                file_type: FileType::File,
            },
        );
    }

    /// Registers a file that exists but fails every read.
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                file_type: FileType::Directory,
            },
        );
    }

    fn insert(&self, path: &Path, entry: MockEntry) {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }
        files.insert(path, entry);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }

    fn entry(&self, path: &Path) -> Option<MockEntry> {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&path)
            .cloned()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.entry(path)
            .map(|e| e.file_type == FileType::File)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        String::from_utf8(self.read(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let entry = self.entry(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {:?}", path),
            )
        })?;

        match (entry.file_type, entry.content) {
            (FileType::File, Some(content)) => Ok(content),
            (FileType::File, None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {:?}", path),
            )),
            (FileType::Directory, _) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a file: {:?}", path),
            )),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let normalized = self.normalize_path(path);
        if self.exists(&normalized) {
            Ok(normalized)
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Path not found: {:?}", path),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{}");

        assert!(fs.exists(Path::new("/mock/package.json")));
        assert!(fs.is_file(Path::new("/mock/package.json")));
        assert!(fs.exists(Path::new("/mock")));
        assert!(!fs.is_file(Path::new("/mock")));
    }

    #[test]
    fn test_nested_file_creates_parents() {
        let fs = MockFileSystem::new();
        fs.add_file("src/components/Button.jsx", "");

        assert!(fs.exists(Path::new("/mock/src")));
        assert!(fs.exists(Path::new("/mock/src/components")));
        assert!(!fs.is_file(Path::new("/mock/src/components")));
    }

    #[test]
    fn test_read_to_string() {
        let fs = MockFileSystem::new();
        fs.add_file("index.js", "import React from 'react';");

        let content = fs.read_to_string(Path::new("/mock/index.js")).unwrap();
        assert_eq!(content, "import React from 'react';");
    }

    #[test]
    fn test_read_non_utf8_file() {
        let fs = MockFileSystem::new();
        fs.add_bytes("legacy.js", b"// caf\xe9");

        assert_eq!(fs.read(Path::new("/mock/legacy.js")).unwrap(), b"// caf\xe9");
        let err = fs.read_to_string(Path::new("/mock/legacy.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_missing_file() {
        let fs = MockFileSystem::new();
        let err = fs.read_to_string(Path::new("/mock/missing.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_unreadable_file() {
        let fs = MockFileSystem::new();
        fs.add_unreadable_file("package.json");

        assert!(fs.is_file(Path::new("/mock/package.json")));
        let err = fs
            .read_to_string(Path::new("/mock/package.json"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_canonicalize_resolves_parent_components() {
        let fs = MockFileSystem::new();
        fs.add_file("src/index.js", "");

        let canonical = fs
            .canonicalize(Path::new("/mock/src/../src/./index.js"))
            .unwrap();
        assert_eq!(canonical, PathBuf::from("/mock/src/index.js"));
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("package.json", "{}");

        assert_eq!(fs.root(), Path::new("/repo"));
        assert!(fs.exists(Path::new("/repo/package.json")));
        assert!(!fs.exists(Path::new("/mock/package.json")));
    }
}
