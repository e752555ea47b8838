//! Single-value inputs: a label followed by one field

use crate::collection::{BoundValue, value_text};
use crate::error::{FormError, FormResult};
use crate::fields::{input_field, text_area};
use crate::naming::{field_name, generate_html_id};
use crate::object::FormObject;
use crate::options::{BasicInputOptions, LabelOption};
use formkit_tags::{AttrValue, Attributes, ElementRenderer, Markup, TagBuilder};
use serde::Deserialize;

/// Kind of single-value input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
	String,
	Password,
	/// Plain text field; the host never emitted `type="number"`
	Numeric,
	/// Multi-line `<textarea>`
	Text,
	/// Never carries a value
	File,
	Email,
	Phone,
	Url,
	Search,
}

impl InputKind {
	/// `type` attribute of the rendered `<input>`, or `None` for a `<textarea>`
	pub fn input_type(self) -> Option<&'static str> {
		match self {
			InputKind::String | InputKind::Numeric => Some("text"),
			InputKind::Password => Some("password"),
			InputKind::Text => None,
			InputKind::File => Some("file"),
			InputKind::Email => Some("email"),
			InputKind::Phone => Some("tel"),
			InputKind::Url => Some("url"),
			InputKind::Search => Some("search"),
		}
	}
}

/// Renders a label and a single field for one method
///
/// # Examples
///
/// ```
/// use formkit_forms::{BasicInput, BasicInputOptions, InMemoryObject, InputKind};
/// use formkit_tags::HtmlRenderer;
///
/// let renderer = HtmlRenderer::new();
/// let book = InMemoryObject::new("book").with_value("title", "Rust");
///
/// let html = BasicInput::new(&renderer)
///     .render(&book, "title", InputKind::String, &BasicInputOptions::new())
///     .unwrap();
///
/// assert_eq!(
///     html.as_str(),
///     r#"<label for="book_title">Title</label><input id="book_title" name="book[title]" type="text" value="Rust" />"#
/// );
/// ```
#[derive(Clone, Copy)]
pub struct BasicInput<'r> {
	renderer: &'r dyn ElementRenderer,
}

impl<'r> BasicInput<'r> {
	pub fn new(renderer: &'r dyn ElementRenderer) -> Self {
		Self { renderer }
	}

	/// Render the label and field for `method` of `object`
	///
	/// A multi-valued bound value is a [`FormError::Configuration`]; these
	/// inputs submit exactly one value.
	pub fn render(
		&self,
		object: &dyn FormObject,
		method: &str,
		kind: InputKind,
		options: &BasicInputOptions,
	) -> FormResult<Markup> {
		let object_name = object.object_name();
		let name = field_name(object_name, &object.input_name(method));
		let generated_id = generate_html_id(object_name, object.index().as_deref(), method, "");

		let field_attrs = Attributes::merged([
			Attributes::new().with("id", generated_id.as_str()),
			options.input_html.clone(),
		]);
		let field_id = field_attrs
			.get("id")
			.and_then(AttrValue::as_text)
			.map(str::to_string)
			.unwrap_or(generated_id);

		let value = match kind {
			InputKind::File => None,
			_ => single_value(method, object.resolve_bound_value(method)?)?,
		};

		tracing::debug!(method, ?kind, id = %field_id, "rendering input");

		let field = match kind.input_type() {
			Some(input_type) => input_field(
				self.renderer,
				input_type,
				&name,
				value.as_deref(),
				field_attrs,
			)?,
			None => text_area(self.renderer, &name, value.as_deref(), field_attrs)?,
		};

		let mut builder = TagBuilder::<FormError>::scoped(self.renderer);
		let label_text = match &options.label {
			LabelOption::Hidden => None,
			LabelOption::Text(text) => Some(text.clone()),
			LabelOption::Humanized => Some(object.humanized_label(method)),
		};
		if let Some(text) = label_text {
			builder.label_for(&field_id, options.label_html.clone(), text)?;
		}
		builder.append_content(&field);

		Ok(builder.into_markup())
	}
}

fn single_value(method: &str, bound: BoundValue) -> FormResult<Option<String>> {
	match bound {
		BoundValue::Nothing | BoundValue::One(serde_json::Value::Null) => Ok(None),
		BoundValue::One(value) => Ok(Some(value_text(&value).into_owned())),
		BoundValue::Many(_) => Err(FormError::Configuration(format!(
			"'{method}' holds several values and cannot be rendered as a single field"
		))),
	}
}
