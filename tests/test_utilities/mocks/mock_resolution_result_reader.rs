use resolved_components::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ResolutionResultReader serving an in-memory document
#[derive(Clone)]
pub struct MockResolutionResultReader {
    content: String,
    should_fail: bool,
    read_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockResolutionResultReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            read_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A reader that reports the file as missing
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn read_paths(&self) -> Vec<PathBuf> {
        self.read_paths.lock().unwrap().clone()
    }
}

impl ResolutionResultReader for MockResolutionResultReader {
    fn read_resolution_result(&self, path: &Path) -> Result<String> {
        self.read_paths.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            return Err(ComponentError::ResolutionResultNotFound {
                path: path.to_path_buf(),
                suggestion: "mock failure".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
