//! The form object inputs are rendered for
//!
//! Inputs never inspect domain objects directly. Everything they need about
//! the bound object goes through [`FormObject`]: its name in field names, the
//! items a choice input offers, the current value of a method, and the label
//! text for it.

use crate::collection::{BoundValue, CollectionItem, CollectionOverride};
use crate::error::{FormError, FormResult};
use crate::inflector;
use crate::options::CheckBoxesOptions;
use serde_json::Value;
use std::collections::HashMap;

/// Collaborator that binds inputs to a domain object
///
/// # Examples
///
/// ```
/// use formkit_forms::{BoundValue, CheckBoxesOptions, CollectionItem, FormObject, FormResult};
/// use serde_json::json;
///
/// struct Book {
///     author_ids: Vec<i64>,
/// }
///
/// impl FormObject for Book {
///     fn object_name(&self) -> &str {
///         "book"
///     }
///
///     fn resolve_collection(
///         &self,
///         _method: &str,
///         _options: &CheckBoxesOptions,
///     ) -> FormResult<Vec<CollectionItem>> {
///         Ok(vec![CollectionItem::pair("Justin French", 1)])
///     }
///
///     fn resolve_bound_value(&self, _method: &str) -> FormResult<BoundValue> {
///         Ok(BoundValue::from(json!(self.author_ids)))
///     }
/// }
///
/// let book = Book { author_ids: vec![1] };
/// assert_eq!(book.humanized_label("author_ids"), "Authors");
/// assert_eq!(book.input_name("author_ids"), "author_ids");
/// ```
pub trait FormObject {
	/// Prefix of every field name, e.g. `book` in `book[title]`
	fn object_name(&self) -> &str;

	/// Position of this object inside an indexed parent form
	fn index(&self) -> Option<String> {
		None
	}

	/// Name of the submitted parameter for `method`
	fn input_name(&self, method: &str) -> String {
		method.to_string()
	}

	/// Items a choice input offers for `method`
	///
	/// Called only when the input options carry no explicit collection.
	fn resolve_collection(
		&self,
		method: &str,
		options: &CheckBoxesOptions,
	) -> FormResult<Vec<CollectionItem>>;

	/// Current value of `method`
	fn resolve_bound_value(&self, method: &str) -> FormResult<BoundValue>;

	fn humanized_label(&self, method: &str) -> String {
		inflector::humanize(method)
	}

	fn singularize(&self, word: &str) -> String {
		inflector::singularize(word)
	}
}

/// [`FormObject`] backed by plain maps
///
/// A method is known once it has a value or a collection. Asking for anything
/// else fails with [`FormError::CollectionResolution`].
///
/// # Examples
///
/// ```
/// use formkit_forms::{BoundValue, FormObject, InMemoryObject};
/// use serde_json::json;
///
/// let book = InMemoryObject::new("book")
///     .with_value("author_ids", json!([1]))
///     .with_collection("author_ids", json!([["Justin French", 1], ["Kate French", 2]]));
///
/// assert_eq!(book.object_name(), "book");
/// assert_eq!(
///     book.resolve_bound_value("author_ids").unwrap(),
///     BoundValue::Many(vec![json!(1)])
/// );
/// assert!(book.resolve_bound_value("editor_ids").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryObject {
	object_name: String,
	index: Option<String>,
	values: HashMap<String, Value>,
	collections: HashMap<String, CollectionOverride>,
	input_names: HashMap<String, String>,
}

impl InMemoryObject {
	pub fn new(object_name: impl Into<String>) -> Self {
		Self {
			object_name: object_name.into(),
			..Self::default()
		}
	}

	/// Set the current value of `method`
	pub fn with_value(mut self, method: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(method.into(), value.into());
		self
	}

	/// Set the items offered for `method`
	pub fn with_collection(
		mut self,
		method: impl Into<String>,
		collection: impl Into<CollectionOverride>,
	) -> Self {
		self.collections.insert(method.into(), collection.into());
		self
	}

	/// Submit `method` under a different parameter name, e.g. `author_ids` for `authors`
	pub fn with_input_name(mut self, method: impl Into<String>, input_name: impl Into<String>) -> Self {
		self.input_names.insert(method.into(), input_name.into());
		self
	}

	pub fn with_index(mut self, index: impl Into<String>) -> Self {
		self.index = Some(index.into());
		self
	}

	fn is_known(&self, method: &str) -> bool {
		self.values.contains_key(method) || self.collections.contains_key(method)
	}
}

impl FormObject for InMemoryObject {
	fn object_name(&self) -> &str {
		&self.object_name
	}

	fn index(&self) -> Option<String> {
		self.index.clone()
	}

	fn input_name(&self, method: &str) -> String {
		self.input_names
			.get(method)
			.cloned()
			.unwrap_or_else(|| method.to_string())
	}

	fn resolve_collection(
		&self,
		method: &str,
		options: &CheckBoxesOptions,
	) -> FormResult<Vec<CollectionItem>> {
		let collection = self.collections.get(method).ok_or_else(|| {
			FormError::resolution(method, format!("{} has no collection", self.object_name))
		})?;

		collection
			.resolve(options.label_method.as_deref(), options.value_method.as_deref())
			.map_err(|e| FormError::resolution(method, e.to_string()))
	}

	fn resolve_bound_value(&self, method: &str) -> FormResult<BoundValue> {
		match self.values.get(method) {
			Some(value) => Ok(BoundValue::from(value.clone())),
			None if self.is_known(method) => Ok(BoundValue::Nothing),
			None => Err(FormError::resolution(
				method,
				format!("{} has no such method", self.object_name),
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn book() -> InMemoryObject {
		InMemoryObject::new("book")
			.with_value("title", "Rust")
			.with_collection(
				"authors",
				json!([
					{ "id": 1, "login": "justin", "name": "Justin French" },
					{ "id": 2, "login": "kate", "name": "Kate French" }
				]),
			)
			.with_input_name("authors", "author_ids")
	}

	#[rstest]
	fn test_collection_uses_default_projection(book: InMemoryObject) {
		let items = book
			.resolve_collection("authors", &CheckBoxesOptions::new())
			.unwrap();

		assert_eq!(
			items,
			vec![
				CollectionItem::pair("Justin French", 1),
				CollectionItem::pair("Kate French", 2)
			]
		);
	}

	#[rstest]
	fn test_collection_uses_label_method(book: InMemoryObject) {
		let options = CheckBoxesOptions::new().with_label_method("login");
		let items = book.resolve_collection("authors", &options).unwrap();

		assert_eq!(items[0], CollectionItem::pair("justin", 1));
	}

	#[rstest]
	fn test_bad_projection_is_a_resolution_error(book: InMemoryObject) {
		let options = CheckBoxesOptions::new().with_value_method("uuid");
		let result = book.resolve_collection("authors", &options);

		assert!(matches!(
			result,
			Err(FormError::CollectionResolution { ref method, .. }) if method == "authors"
		));
	}

	#[rstest]
	fn test_unknown_method_fails(book: InMemoryObject) {
		assert!(matches!(
			book.resolve_collection("editors", &CheckBoxesOptions::new()),
			Err(FormError::CollectionResolution { .. })
		));
		assert!(matches!(
			book.resolve_bound_value("editors"),
			Err(FormError::CollectionResolution { .. })
		));
	}

	#[rstest]
	fn test_collection_without_value_selects_nothing(book: InMemoryObject) {
		assert_eq!(book.resolve_bound_value("authors").unwrap(), BoundValue::Nothing);
	}

	#[rstest]
	fn test_input_name_and_index(book: InMemoryObject) {
		assert_eq!(book.input_name("authors"), "author_ids");
		assert_eq!(book.input_name("title"), "title");
		assert_eq!(book.index(), None);
		assert_eq!(book.with_index("3").index().as_deref(), Some("3"));
	}
}
