//! # formkit
//!
//! Scoped tag building and collection-backed form inputs for server-rendered
//! HTML.
//!
//! ## Crates
//!
//! - [`tags`] (`formkit-tags`): escaped [`Markup`], attribute maps, the
//!   [`ElementRenderer`] primitive and the nested [`TagBuilder`]
//! - [`forms`] (`formkit-forms`): check box groups and basic inputs bound to a
//!   [`FormObject`]
//!
//! ## Feature Flags
//!
//! - `forms` (default) - form inputs; without it only the tag builder is built
//!
//! ## Quick Example
//!
//! ```
//! use formkit::prelude::*;
//! use serde_json::json;
//!
//! let renderer = HtmlRenderer::new();
//! let book = InMemoryObject::new("book")
//!     .with_value("author", json!([1]))
//!     .with_collection("author", json!([["Justin French", 1], ["Kate French", 2]]));
//!
//! let html = CheckBoxesInput::new(&renderer)
//!     .render(&book, "author", &CheckBoxesOptions::new())?;
//!
//! assert!(html.as_str().contains(
//!     r#"<label for="book_author_1"><input checked="checked" id="book_author_1""#
//! ));
//! # Ok::<(), FormError>(())
//! ```

pub use formkit_tags as tags;

#[cfg(feature = "forms")]
pub use formkit_forms as forms;

pub use formkit_tags::{
	AttrValue, Attributes, Content, ElementRenderer, HtmlRenderer, Markup, RenderError,
	RenderResult, TagBuilder,
};

#[cfg(feature = "forms")]
pub use formkit_forms::{
	BasicInput, BasicInputOptions, BoundValue, CheckBoxesInput, CheckBoxesOptions,
	CollectionItem, DisabledValues, FormError, FormObject, FormResult, InMemoryObject,
	InputKind, LabelOption,
};

/// Commonly used types
pub mod prelude {
	pub use crate::{
		AttrValue, Attributes, Content, ElementRenderer, HtmlRenderer, Markup, RenderError,
		RenderResult, TagBuilder,
	};

	#[cfg(feature = "forms")]
	pub use crate::{
		BasicInput, BasicInputOptions, BoundValue, CheckBoxesInput, CheckBoxesOptions,
		CollectionItem, FormError, FormObject, FormResult, InMemoryObject, InputKind,
		LabelOption,
	};
}
