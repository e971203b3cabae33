//! Error types for view-hooks

use thiserror::Error;

/// Error type for render operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
	/// A context-bound component was rendered with no provider in scope
	#[error("withContext must be used within a proper ContextProvider")]
	MissingProvider,
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
