//! Errors raised by the element renderer primitive.

/// Result type used by every rendering operation in this crate
pub type RenderResult<T> = Result<T, RenderError>;

/// Rejection from an [`ElementRenderer`](crate::ElementRenderer)
///
/// The tag builder never retries or recovers from these; they propagate
/// unchanged through every enclosing scope.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	#[error("Unknown tag: <{0}>")]
	UnknownTag(String),

	#[error("Invalid attribute {attribute:?} on <{tag}>")]
	InvalidAttributeName { tag: String, attribute: String },
}
