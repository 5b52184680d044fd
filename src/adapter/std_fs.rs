//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::io::Read;
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to get metadata for '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(FileMetadata::new(m.len(), m.is_file(), m.is_dir()))
    }

    fn create_dir_private(&self, path: &Path) -> Result<(), Error> {
        let mut builder = std::fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!(
                    "Failed to open '{}' for append: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(Box::new(f))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, Error> {
        let mut file = std::fs::File::open(path).map_err(|e| {
            Error::io_msg(format!("Failed to open '{}': {}", path.display(), e))
        })?;
        let size = file
            .metadata()
            .map_err(|e| {
                Error::io_msg(format!(
                    "Failed to get metadata for '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .len() as usize;

        let mut buffer = Vec::with_capacity(size);
        file.read_to_end(&mut buffer).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        if buffer.len() != size {
            return Err(Error::io_msg(format!(
                "Short read on '{}': expected {} bytes, got {}",
                path.display(),
                size,
                buffer.len()
            )));
        }
        Ok(buffer)
    }
}
