//! Element attribute maps.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::collections::BTreeMap;
use std::fmt;

/// Value of a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
	/// Rendered as `name="value"`
	Text(String),
	/// `true` renders as `name="name"`, `false` omits the attribute
	Bool(bool),
	/// Never rendered
	Absent,
}

impl AttrValue {
	/// Whether the renderer should emit this attribute at all
	pub fn is_rendered(&self) -> bool {
		matches!(self, AttrValue::Text(_) | AttrValue::Bool(true))
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrValue::Text(text) => Some(text),
			_ => None,
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Absent, Into::into)
	}
}

struct AttrValueVisitor;

impl<'de> Visitor<'de> for AttrValueVisitor {
	type Value = AttrValue;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a string, number, boolean or null attribute value")
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttrValue, E> {
		Ok(AttrValue::Bool(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<AttrValue, E> {
		Ok(AttrValue::Text(v.to_string()))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<AttrValue, E> {
		Ok(AttrValue::Text(v.to_string()))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<AttrValue, E> {
		Ok(AttrValue::Text(v.to_string()))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<AttrValue, E> {
		Ok(AttrValue::Text(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<AttrValue, E> {
		Ok(AttrValue::Text(v))
	}

	fn visit_unit<E: de::Error>(self) -> Result<AttrValue, E> {
		Ok(AttrValue::Absent)
	}

	fn visit_none<E: de::Error>(self) -> Result<AttrValue, E> {
		Ok(AttrValue::Absent)
	}
}

impl<'de> Deserialize<'de> for AttrValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(AttrValueVisitor)
	}
}

/// Attribute map for one element
///
/// Keys are unique; writing an existing key replaces its value. Iteration is
/// ordered by attribute name, which keeps rendered output stable.
///
/// ## Example
///
/// ```
/// use formkit_tags::{AttrValue, Attributes};
///
/// let mut attrs = Attributes::new().with("name", "book[author_ids][]");
/// attrs.merge(Attributes::from([("name", "override"), ("class", "wide")]));
///
/// assert_eq!(attrs.get("name"), Some(&AttrValue::from("override")));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct Attributes {
	attrs: BTreeMap<String, AttrValue>,
}

impl Attributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`Attributes::set`]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Set an attribute, replacing any previous value for the same name
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Append a CSS class to the existing `class` attribute
	pub fn add_class(&mut self, class: &str) {
		match self.attrs.get_mut("class") {
			Some(AttrValue::Text(existing)) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(class);
			}
			_ => {
				self.attrs
					.insert("class".to_string(), AttrValue::Text(class.to_string()));
			}
		}
	}

	/// Merge `other` into this map; keys in `other` win
	pub fn merge(&mut self, other: Attributes) {
		self.attrs.extend(other.attrs);
	}

	/// Merge a sequence of maps left to right into a new map
	pub fn merged<I>(maps: I) -> Self
	where
		I: IntoIterator<Item = Attributes>,
	{
		let mut merged = Self::new();
		for map in maps {
			merged.merge(map);
		}
		merged
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.attrs.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.attrs.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_later_keys_override_earlier_ones() {
		let attrs = Attributes::merged([
			Attributes::from([("name", "a"), ("id", "x")]),
			Attributes::from([("name", "b")]),
		]);

		assert_eq!(attrs.get("name"), Some(&AttrValue::from("b")));
		assert_eq!(attrs.get("id"), Some(&AttrValue::from("x")));
	}

	#[rstest]
	fn test_merge_keeps_every_distinct_key() {
		let mut attrs = Attributes::from([("for", "book_author_1")]);
		attrs.merge(Attributes::from([("class", "choice")]));

		assert_eq!(attrs.len(), 2);
		assert!(attrs.contains("for"));
		assert!(attrs.contains("class"));
	}

	#[rstest]
	fn test_iteration_is_sorted_by_name() {
		let attrs = Attributes::new()
			.with("value", "1")
			.with("type", "checkbox")
			.with("id", "x");

		let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
		assert_eq!(names, vec!["id", "type", "value"]);
	}

	#[rstest]
	fn test_add_class_appends() {
		let mut attrs = Attributes::new();
		attrs.add_class("author");
		attrs.add_class("default");

		assert_eq!(attrs.get("class"), Some(&AttrValue::from("author default")));
	}

	#[rstest]
	#[case(AttrValue::from("x"), true)]
	#[case(AttrValue::Bool(true), true)]
	#[case(AttrValue::Bool(false), false)]
	#[case(AttrValue::Absent, false)]
	#[case(AttrValue::from(None::<&str>), false)]
	fn test_is_rendered(#[case] value: AttrValue, #[case] expected: bool) {
		assert_eq!(value.is_rendered(), expected);
	}

	#[rstest]
	#[case(AttrValue::from("book_title"), Some("book_title"))]
	#[case(AttrValue::Bool(true), None)]
	#[case(AttrValue::Absent, None)]
	fn test_as_text(#[case] value: AttrValue, #[case] expected: Option<&str>) {
		assert_eq!(value.as_text(), expected);
	}

	#[rstest]
	fn test_deserialize_mixed_values() {
		let attrs: Attributes = serde_json::from_value(json!({
			"class": "wide",
			"tabindex": 3,
			"required": true,
			"title": null
		}))
		.unwrap();

		assert_eq!(attrs.get("class"), Some(&AttrValue::from("wide")));
		assert_eq!(attrs.get("tabindex"), Some(&AttrValue::from("3")));
		assert_eq!(attrs.get("required"), Some(&AttrValue::Bool(true)));
		assert_eq!(attrs.get("title"), Some(&AttrValue::Absent));
	}

	#[rstest]
	fn test_deserialize_rejects_nested_values() {
		let result: Result<Attributes, _> = serde_json::from_value(json!({ "data": [1, 2] }));
		assert!(result.is_err());
	}
}
