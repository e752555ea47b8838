//! Collection items and selection state for choice inputs

use crate::error::{FormError, FormResult};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Object keys tried, in order, for an item's label when no label method is given
pub const DEFAULT_LABEL_METHODS: &[&str] = &[
	"to_label",
	"display_name",
	"full_name",
	"name",
	"title",
	"username",
	"login",
	"value",
];

/// Object key used for an item's value when no value method is given
pub const DEFAULT_VALUE_METHOD: &str = "id";

/// Text form of a raw option value, as used in `value` attributes and ids
///
/// # Examples
///
/// ```
/// use formkit_forms::collection::value_text;
/// use serde_json::json;
///
/// assert_eq!(value_text(&json!(1)), "1");
/// assert_eq!(value_text(&json!("Gold Member")), "Gold Member");
/// assert_eq!(value_text(&json!(null)), "");
/// ```
pub fn value_text(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(s) => Cow::Borrowed(s),
		Value::Null => Cow::Borrowed(""),
		Value::Bool(b) => Cow::Owned(b.to_string()),
		Value::Number(n) => Cow::Owned(n.to_string()),
		other => Cow::Owned(other.to_string()),
	}
}

/// One selectable option
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionItem {
	/// A value that is also its own label
	Scalar(Value),
	/// A display label and the raw value submitted for it
	LabelValue(String, Value),
}

impl CollectionItem {
	pub fn scalar(value: impl Into<Value>) -> Self {
		CollectionItem::Scalar(value.into())
	}

	pub fn pair(label: impl Into<String>, value: impl Into<Value>) -> Self {
		CollectionItem::LabelValue(label.into(), value.into())
	}

	/// Display label, not yet escaped
	pub fn label(&self) -> Cow<'_, str> {
		match self {
			CollectionItem::Scalar(value) => value_text(value),
			CollectionItem::LabelValue(label, _) => Cow::Borrowed(label),
		}
	}

	/// Raw value used for membership tests
	pub fn value(&self) -> &Value {
		match self {
			CollectionItem::Scalar(value) | CollectionItem::LabelValue(_, value) => value,
		}
	}

	/// Interpret one JSON collection entry
	///
	/// - `[label, value]` becomes [`CollectionItem::LabelValue`]
	/// - an object is projected through `label_method`/`value_method`
	/// - any other scalar becomes [`CollectionItem::Scalar`]
	pub fn from_json(
		item: &Value,
		label_method: Option<&str>,
		value_method: Option<&str>,
	) -> FormResult<Self> {
		match item {
			Value::Array(pair) => match pair.as_slice() {
				[label, value] => Ok(CollectionItem::pair(value_text(label), value.clone())),
				_ => Err(FormError::Configuration(format!(
					"collection entries given as arrays must be [label, value] pairs, got {} elements",
					pair.len()
				))),
			},
			Value::Object(object) => project_object(object, label_method, value_method),
			scalar => Ok(CollectionItem::Scalar(scalar.clone())),
		}
	}
}

fn project_object(
	object: &Map<String, Value>,
	label_method: Option<&str>,
	value_method: Option<&str>,
) -> FormResult<CollectionItem> {
	let label = match label_method {
		Some(method) => object.get(method).ok_or_else(|| {
			FormError::Configuration(format!("collection entry has no label field '{method}'"))
		})?,
		None => DEFAULT_LABEL_METHODS
			.iter()
			.find_map(|method| object.get(*method))
			.ok_or_else(|| {
				FormError::Configuration(format!(
					"collection entry has none of the label fields {DEFAULT_LABEL_METHODS:?}"
				))
			})?,
	};

	let value_method = value_method.unwrap_or(DEFAULT_VALUE_METHOD);
	let value = object.get(value_method).ok_or_else(|| {
		FormError::Configuration(format!(
			"collection entry has no value field '{value_method}'"
		))
	})?;

	Ok(CollectionItem::pair(value_text(label), value.clone()))
}

/// Interpret a whole JSON collection
///
/// Arrays are read entry by entry with [`CollectionItem::from_json`]. Objects
/// are read as ordered `label => value` pairs.
pub fn collection_from_json(
	collection: &Value,
	label_method: Option<&str>,
	value_method: Option<&str>,
) -> FormResult<Vec<CollectionItem>> {
	match collection {
		Value::Array(items) => items
			.iter()
			.map(|item| CollectionItem::from_json(item, label_method, value_method))
			.collect(),
		Value::Object(pairs) => Ok(pairs
			.iter()
			.map(|(label, value)| CollectionItem::pair(label.as_str(), value.clone()))
			.collect()),
		other => Err(FormError::Configuration(format!(
			"collection must be an array or an object, got {other}"
		))),
	}
}

/// An explicit item set given through input options
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionOverride {
	/// Items already in their final shape
	Items(Vec<CollectionItem>),
	/// Raw configuration data, interpreted when the input is rendered
	Json(Value),
}

impl CollectionOverride {
	pub fn resolve(
		&self,
		label_method: Option<&str>,
		value_method: Option<&str>,
	) -> FormResult<Vec<CollectionItem>> {
		match self {
			CollectionOverride::Items(items) => Ok(items.clone()),
			CollectionOverride::Json(value) => {
				collection_from_json(value, label_method, value_method)
			}
		}
	}
}

impl From<Vec<CollectionItem>> for CollectionOverride {
	fn from(items: Vec<CollectionItem>) -> Self {
		CollectionOverride::Items(items)
	}
}

impl From<Value> for CollectionOverride {
	fn from(value: Value) -> Self {
		CollectionOverride::Json(value)
	}
}

impl<'de> Deserialize<'de> for CollectionOverride {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Value::deserialize(deserializer).map(CollectionOverride::Json)
	}
}

/// Current value of the bound method
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BoundValue {
	#[default]
	Nothing,
	One(Value),
	Many(Vec<Value>),
}

impl BoundValue {
	/// Flatten into the list of selected raw values
	pub fn into_values(self) -> Vec<Value> {
		match self {
			BoundValue::Nothing => Vec::new(),
			BoundValue::One(Value::Null) => Vec::new(),
			BoundValue::One(value) => vec![value],
			BoundValue::Many(values) => values.into_iter().filter(|v| !v.is_null()).collect(),
		}
	}
}

impl From<Value> for BoundValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => BoundValue::Nothing,
			Value::Array(values) => BoundValue::Many(values),
			other => BoundValue::One(other),
		}
	}
}

/// Values forced into the disabled state, normalized to a list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisabledValues(Vec<Value>);

impl DisabledValues {
	pub fn contains(&self, value: &Value) -> bool {
		self.0.contains(value)
	}

	pub fn values(&self) -> &[Value] {
		&self.0
	}
}

impl From<Value> for DisabledValues {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => DisabledValues(Vec::new()),
			Value::Array(values) => DisabledValues(values),
			single => DisabledValues(vec![single]),
		}
	}
}

impl From<Vec<Value>> for DisabledValues {
	fn from(values: Vec<Value>) -> Self {
		DisabledValues(values)
	}
}

impl<'de> Deserialize<'de> for DisabledValues {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Value::deserialize(deserializer).map(DisabledValues::from)
	}
}

/// Selected and disabled values for one render
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
	selected: Vec<Value>,
	disabled: Option<DisabledValues>,
}

impl SelectionState {
	/// `disabled` is `None` when the option was not supplied at all
	pub fn new(bound: BoundValue, disabled: Option<DisabledValues>) -> Self {
		Self {
			selected: bound.into_values(),
			disabled,
		}
	}

	pub fn is_selected(&self, value: &Value) -> bool {
		self.selected.contains(value)
	}

	/// `None` when no disabled option was supplied, so the attribute is left unset
	pub fn is_disabled(&self, value: &Value) -> Option<bool> {
		self.disabled.as_ref().map(|disabled| disabled.contains(value))
	}
}
