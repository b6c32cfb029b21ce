use crate::ports::outbound::PageFetcher;
use crate::shared::error::TevCatError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum page size accepted from disk (50 MB)
const MAX_PAGE_SIZE: u64 = 50 * 1024 * 1024;

/// FileSystemPageReader adapter for reading a saved copy of the TeVCat page
///
/// Implements the PageFetcher port for offline use.
pub struct FileSystemPageReader {
    path: PathBuf,
}

impl FileSystemPageReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_error(&self, details: impl Into<String>) -> anyhow::Error {
        TevCatError::FileReadError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Safely read the page with security checks:
    /// - Reject symbolic links
    /// - Validate the path is a regular file
    /// - Check the file size limit
    fn safe_read(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| self.read_error(format!("Failed to read file metadata: {}", e)))?;

        if metadata.is_symlink() {
            return Err(self.read_error(
                "Security: Page path is a symbolic link. For security reasons, symbolic links are not allowed.",
            ));
        }

        if !metadata.is_file() {
            return Err(self.read_error("Not a regular file"));
        }

        if metadata.len() > MAX_PAGE_SIZE {
            return Err(self.read_error(format!(
                "Security: File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_PAGE_SIZE
            )));
        }

        fs::read_to_string(path).map_err(|e| self.read_error(e.to_string()))
    }
}

impl PageFetcher for FileSystemPageReader {
    fn fetch_page(&self) -> Result<String> {
        self.safe_read(&self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
