//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Join paths
    fn join(&self, base: &Path, path: &str) -> PathBuf {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyFileSystem;

    impl FileSystem for EmptyFileSystem {
        fn is_file(&self, _path: &Path) -> bool {
            false
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            Err(anyhow::anyhow!("File not found: {:?}", path))
        }
    }

    #[test]
    fn test_default_join() {
        let fs = EmptyFileSystem;
        assert_eq!(
            fs.join(Path::new("/src/pkg"), "setup.py"),
            PathBuf::from("/src/pkg/setup.py")
        );
    }
}
