// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{ops::Deref,
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering}};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    #[must_use]
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }

    /// Write `content` to a file named `file_name` in this directory, and return its
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be written.
    pub fn try_write_file(&self, file_name: &str, content: &str) -> miette::Result<PathBuf> {
        let path = self.join(file_name);
        std::fs::write(&path, content).into_diagnostic()?;
        Ok(path)
    }
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped. Every call returns a new directory, even for tests
/// running in parallel in the same process.
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|it| it.as_nanos())
        .unwrap_or_default();
    let count = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    let new_temp_dir = std::env::temp_dir().join(format!(
        "r3bl_hilite_{}_{nanos}_{count}",
        std::process::id()
    ));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // Nothing useful to do if this fails.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_temp_dir_is_deleted_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let file_path = temp_dir.try_write_file("a.txt", "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "hello");

        let root = temp_dir.inner.clone();
        drop(temp_dir);

        assert!(!root.exists());
    }

    #[test]
    fn test_each_temp_dir_is_unique() {
        let first = try_create_temp_dir().unwrap();
        let second = try_create_temp_dir().unwrap();
        assert_ne!(first.inner, second.inner);
    }
}
