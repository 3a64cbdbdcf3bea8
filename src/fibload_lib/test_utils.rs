use anyhow::bail;

use crate::file_system::FileOperations;
use crate::file_system::FileSystemInteractor;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor;

pub const EMPTY_FS: EmptyFilesystem = EmptyFilesystem {};

/// A file system on which nothing exists.
pub struct EmptyFilesystem;

impl FileOperations for EmptyFilesystem {
    fn exists(&self, _: &std::path::Path) -> bool {
        false
    }

    fn read_bytes(&self, path: &std::path::Path) -> anyhow::Result<Vec<u8>> {
        bail!("File not found: {path:?}")
    }

    fn read_utf8(&self, path: &std::path::Path) -> anyhow::Result<String> {
        bail!("File not found: {path:?}")
    }

    fn try_read_toml<T: serde::de::DeserializeOwned>(
        &self,
        path: &std::path::Path,
    ) -> anyhow::Result<T> {
        bail!("File not found: {path:?}")
    }
}
