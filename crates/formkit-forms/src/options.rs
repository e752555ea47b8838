//! Input options
//!
//! Options are explicit structures rather than loose maps. Both support
//! builder-style setters for use from code and `serde` deserialization for
//! options that come from configuration; unknown keys are rejected.
//!
//! ## Example
//!
//! ```
//! use formkit_forms::options::CheckBoxesOptions;
//! use serde_json::json;
//!
//! let options = CheckBoxesOptions::from_json(&json!({
//!     "value_as_class": true,
//!     "disabled": [2, 3],
//!     "input_html": { "class": "author" }
//! }))
//! .unwrap();
//!
//! assert!(options.value_as_class);
//! assert!(CheckBoxesOptions::from_json(&json!({ "hidden_field": true })).is_err());
//! ```

use crate::collection::{CollectionOverride, DisabledValues};
use crate::error::{FormError, FormResult};
use formkit_tags::Attributes;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// What to show as an input's label or legend
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelOption {
	/// Ask the form object for the humanized method name
	#[default]
	Humanized,
	/// Use this text, escaped on output
	Text(String),
	/// Render no label at all
	Hidden,
}

impl From<&str> for LabelOption {
	fn from(text: &str) -> Self {
		LabelOption::Text(text.to_string())
	}
}

impl From<String> for LabelOption {
	fn from(text: String) -> Self {
		LabelOption::Text(text)
	}
}

struct LabelOptionVisitor;

impl<'de> Visitor<'de> for LabelOptionVisitor {
	type Value = LabelOption;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a label string, false to hide the label, or true/null for the default")
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<LabelOption, E> {
		Ok(if v {
			LabelOption::Humanized
		} else {
			LabelOption::Hidden
		})
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<LabelOption, E> {
		Ok(LabelOption::Text(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<LabelOption, E> {
		Ok(LabelOption::Text(v))
	}

	fn visit_unit<E: de::Error>(self) -> Result<LabelOption, E> {
		Ok(LabelOption::Humanized)
	}

	fn visit_none<E: de::Error>(self) -> Result<LabelOption, E> {
		Ok(LabelOption::Humanized)
	}
}

impl<'de> Deserialize<'de> for LabelOption {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(LabelOptionVisitor)
	}
}

/// Options for [`CheckBoxesInput`](crate::check_boxes::CheckBoxesInput)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckBoxesOptions {
	/// Merged into every generated check box
	pub input_html: Attributes,
	/// `true` suppresses the hidden "nothing selected" field
	pub hidden_fields: bool,
	/// Add a `<singular method>_<value>` class to every list item
	pub value_as_class: bool,
	/// Value submitted by the hidden field
	pub unchecked_value: String,
	/// Values rendered disabled; `None` leaves the attribute unset
	pub disabled: Option<DisabledValues>,
	/// Items to render instead of asking the form object
	pub collection: Option<CollectionOverride>,
	/// Object key used as an item's label
	pub label_method: Option<String>,
	/// Object key used as an item's value
	pub value_method: Option<String>,
	/// Legend text
	pub label: LabelOption,
}

impl CheckBoxesOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read options from configuration data
	pub fn from_json(value: &Value) -> FormResult<Self> {
		Self::deserialize(value)
			.map_err(|e| FormError::Configuration(format!("invalid check box options: {e}")))
	}

	pub fn with_input_html(mut self, attrs: Attributes) -> Self {
		self.input_html = attrs;
		self
	}

	pub fn with_hidden_fields(mut self, hidden_fields: bool) -> Self {
		self.hidden_fields = hidden_fields;
		self
	}

	pub fn with_value_as_class(mut self, value_as_class: bool) -> Self {
		self.value_as_class = value_as_class;
		self
	}

	pub fn with_unchecked_value(mut self, value: impl Into<String>) -> Self {
		self.unchecked_value = value.into();
		self
	}

	/// Accepts a single value or an array of values
	pub fn with_disabled(mut self, disabled: impl Into<DisabledValues>) -> Self {
		self.disabled = Some(disabled.into());
		self
	}

	pub fn with_collection(mut self, collection: impl Into<CollectionOverride>) -> Self {
		self.collection = Some(collection.into());
		self
	}

	pub fn with_label_method(mut self, method: impl Into<String>) -> Self {
		self.label_method = Some(method.into());
		self
	}

	pub fn with_value_method(mut self, method: impl Into<String>) -> Self {
		self.value_method = Some(method.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<LabelOption>) -> Self {
		self.label = label.into();
		self
	}

	/// Render without a legend
	pub fn without_label(mut self) -> Self {
		self.label = LabelOption::Hidden;
		self
	}
}

/// Options for [`BasicInput`](crate::basic::BasicInput)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasicInputOptions {
	/// Merged over the generated field attributes
	pub input_html: Attributes,
	/// Merged over the generated label attributes
	pub label_html: Attributes,
	pub label: LabelOption,
}

impl BasicInputOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read options from configuration data
	pub fn from_json(value: &Value) -> FormResult<Self> {
		Self::deserialize(value)
			.map_err(|e| FormError::Configuration(format!("invalid input options: {e}")))
	}

	pub fn with_input_html(mut self, attrs: Attributes) -> Self {
		self.input_html = attrs;
		self
	}

	pub fn with_label_html(mut self, attrs: Attributes) -> Self {
		self.label_html = attrs;
		self
	}

	pub fn with_label(mut self, label: impl Into<LabelOption>) -> Self {
		self.label = label.into();
		self
	}

	pub fn without_label(mut self) -> Self {
		self.label = LabelOption::Hidden;
		self
	}
}
