/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_resolution_result_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resolution_result_reader::MockResolutionResultReader;
