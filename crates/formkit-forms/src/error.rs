//! Errors raised while rendering form inputs.

use formkit_tags::RenderError;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
	/// Malformed or contradictory input options
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// The form object could not produce the items or the current value
	#[error("Could not resolve '{method}': {message}")]
	CollectionResolution { method: String, message: String },

	/// The element renderer rejected an element
	#[error(transparent)]
	RenderPrimitive(#[from] RenderError),
}

impl FormError {
	pub fn resolution(method: impl Into<String>, message: impl Into<String>) -> Self {
		FormError::CollectionResolution {
			method: method.into(),
			message: message.into(),
		}
	}
}

pub type FormResult<T> = Result<T, FormError>;
