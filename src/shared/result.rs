/// Crate-wide result type.
///
/// Errors are `anyhow::Error`; user-facing failures are built from
/// [`ComponentError`](super::error::ComponentError) and downcast where a
/// caller needs to tell them apart.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
