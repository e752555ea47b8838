//! Collection-backed form inputs for formkit
//!
//! Inputs render through [`formkit_tags::TagBuilder`] and read everything they
//! need about the bound object from a [`FormObject`].
//!
//! ## Inputs
//!
//! - [`CheckBoxesInput`]: a `fieldset` of check boxes, one per collection item,
//!   plus a hidden field so an all-unchecked group still submits a value
//! - [`BasicInput`]: a label and a single field (`text`, `password`, `email`,
//!   `textarea`, ...)
//!
//! ## Example
//!
//! ```
//! use formkit_forms::{CheckBoxesInput, CheckBoxesOptions, InMemoryObject};
//! use formkit_tags::HtmlRenderer;
//! use serde_json::json;
//!
//! let renderer = HtmlRenderer::new();
//! let book = InMemoryObject::new("book")
//!     .with_value("author", json!([1]))
//!     .with_collection("author", json!([["Justin French", 1], ["Kate French", 2]]));
//!
//! let html = CheckBoxesInput::new(&renderer)
//!     .render(&book, "author", &CheckBoxesOptions::new())
//!     .unwrap();
//!
//! assert_eq!(html.as_str().matches("<li>").count(), 2);
//! ```

pub mod basic;
pub mod check_boxes;
pub mod collection;
pub mod error;
pub mod fields;
pub mod inflector;
pub mod naming;
pub mod object;
pub mod options;

pub use basic::{BasicInput, InputKind};
pub use check_boxes::CheckBoxesInput;
pub use collection::{
	BoundValue, CollectionItem, CollectionOverride, DisabledValues, SelectionState,
};
pub use error::{FormError, FormResult};
pub use object::{FormObject, InMemoryObject};
pub use options::{BasicInputOptions, CheckBoxesOptions, LabelOption};
