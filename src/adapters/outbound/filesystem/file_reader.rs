use crate::ports::outbound::ResolutionResultReader;
use crate::shared::error::ComponentError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading resolution results from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| ComponentError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(ComponentError::SecurityError {
                path: path.to_path_buf(),
                reason: "The resolution result is a symbolic link".to_string(),
                hint: "For security reasons, symbolic links are not allowed. Pass the target file instead.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ComponentError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(ComponentError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
                hint: "Split the resolution result or exclude components before exporting it."
                    .to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            ComponentError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ResolutionResultReader for FileSystemReader {
    fn read_resolution_result(&self, path: &Path) -> Result<String> {
        // symlink_metadata so that dangling links reach the security check
        if fs::symlink_metadata(path).is_err() {
            return Err(ComponentError::ResolutionResultNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Export the resolution result first, or specify the correct file with the --input option.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path)
    }
}
