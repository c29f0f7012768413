use crate::shared::Result;
use std::path::Path;

/// ResolutionResultReader port for reading a resolution result document
///
/// The document is written by an external resolver. This port only
/// fetches its raw content; parsing happens in the application layer.
pub trait ResolutionResultReader {
    /// Reads the resolution result file at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is not a regular file or is a symbolic link
    /// - The file cannot be read due to permissions or I/O errors
    fn read_resolution_result(&self, path: &Path) -> Result<String>;
}
