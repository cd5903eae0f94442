//! Document persistence: directory creation and near-atomic writes.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create output directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write document in `{}`: {source}", .dir.display())]
    Write {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to persist document `{}`: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Idempotently create the output directory.
pub fn ensure_dir(dir: &Path) -> Result<(), WriteError> {
    std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write the document under `dir/file_name`, replacing any existing file.
///
/// The content is staged in a temporary file in the same directory and then
/// renamed over the target, so a failed save never leaves a half-written
/// document at the destination.
pub fn write_document(dir: &Path, file_name: &str, document: &str) -> Result<PathBuf, WriteError> {
    let path = dir.join(file_name);

    let mut staged = NamedTempFile::new_in(dir).map_err(|source| WriteError::Write {
        dir: dir.to_path_buf(),
        source,
    })?;
    staged
        .write_all(document.as_bytes())
        .map_err(|source| WriteError::Write {
            dir: dir.to_path_buf(),
            source,
        })?;

    staged.persist(&path).map_err(|err| WriteError::Persist {
        path: path.clone(),
        source: err.error,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_is_idempotent() {
        let root = tempfile::tempdir().expect("tempdir");
        let nested = root.path().join("exported");

        ensure_dir(&nested).expect("first create");
        ensure_dir(&nested).expect("second create");
        assert!(nested.is_dir());
    }

    #[test]
    fn write_creates_the_named_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path =
            write_document(dir.path(), "story.html", "<html></html>").expect("write succeeds");

        assert_eq!(path, dir.path().join("story.html"));
        let written = std::fs::read_to_string(&path).expect("readable");
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn write_replaces_existing_content_silently() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_document(dir.path(), "story.html", "first").expect("first write");
        write_document(dir.path(), "story.html", "second").expect("second write");

        let written = std::fs::read_to_string(dir.path().join("story.html")).expect("readable");
        assert_eq!(written, "second");
    }

    #[test]
    fn write_leaves_no_staging_files_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_document(dir.path(), "story.html", "content").expect("write succeeds");

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("listable")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("story.html")]);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent");

        let err = write_document(&missing, "story.html", "content").expect_err("must fail");
        assert!(matches!(err, WriteError::Write { .. }));
    }
}
