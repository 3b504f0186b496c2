//! Chunk names.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::errors::{NowebError, Result};

/// The name of a chunk, as written between `<<` and `>>`.
///
/// Names that look like file paths (containing `.` or `/`) are tangle
/// targets; all other names are macros that only exist to be included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChunkName(String);

impl ChunkName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this chunk should be written out as a file.
    pub fn is_file_like(&self) -> bool {
        is_file_like(&self.0)
    }

    /// Path of the tangled file, relative to the output directory.
    ///
    /// Root and `.` components are dropped; a `..` component is an error.
    pub fn output_path(&self) -> Result<PathBuf> {
        let mut path = PathBuf::new();
        for component in Path::new(&self.0).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::ParentDir => {
                    return Err(NowebError::OutputOutsideDirectory(self.clone()))
                }
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            }
        }
        Ok(path)
    }
}

/// Returns true iff `name` contains a `.` or a `/`.
pub fn is_file_like(name: &str) -> bool {
    name.contains('.') || name.contains('/')
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChunkName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ChunkName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ChunkName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_like() {
        assert!(is_file_like("main.c"));
        assert!(is_file_like("src/util"));
        assert!(is_file_like(".gitignore"));
        assert!(!is_file_like("helpers"));
        assert!(!is_file_like("read the input"));
    }

    #[test]
    fn test_chunk_name_file_like() {
        assert!(ChunkName::new("lib/io.c").is_file_like());
        assert!(!ChunkName::new("includes").is_file_like());
    }

    #[test]
    fn test_output_path() {
        let path = |name: &str| ChunkName::new(name).output_path().unwrap();
        assert_eq!(path("lib/io.c"), Path::new("lib/io.c"));
        assert_eq!(path("/etc/motd"), Path::new("etc/motd"));
        assert_eq!(path("./src/./a.rs"), Path::new("src/a.rs"));
    }

    #[test]
    fn test_output_path_parent_dir() {
        for name in ["../escape.c", "src/../../escape.c", "/../etc/passwd"] {
            let result = ChunkName::new(name).output_path();
            assert!(
                matches!(result, Err(NowebError::OutputOutsideDirectory(ref n)) if n.as_str() == name),
                "{name} was accepted"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ChunkName::from("main.c").to_string(), "main.c");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ChunkName::new("a.c")).unwrap();
        assert_eq!(json, "\"a.c\"");
    }
}
