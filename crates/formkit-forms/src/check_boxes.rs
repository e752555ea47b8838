//! Check box groups for multi-value methods
//!
//! A group renders as
//!
//! ```text
//! fieldset
//!   legend.label > label          (unless the label is hidden)
//!   input[type=hidden]            (unless hidden_fields is set)
//!   ol
//!     li > label[for] > input[type=checkbox] + text
//! ```
//!
//! Browsers submit nothing for a group whose boxes are all unchecked. The
//! hidden field shares the group's name so such a submission still carries a
//! value, and the bound method gets cleared instead of left untouched.

use crate::collection::{CollectionItem, SelectionState, value_text};
use crate::error::{FormError, FormResult};
use crate::fields::{check_box, hidden_field};
use crate::naming::{check_box_group_name, generate_html_id, sanitize_value};
use crate::object::FormObject;
use crate::options::{CheckBoxesOptions, LabelOption};
use formkit_tags::{Attributes, ElementRenderer, Markup, TagBuilder};
use std::collections::HashSet;

/// Renders a collection as a group of check boxes
///
/// # Examples
///
/// ```
/// use formkit_forms::{CheckBoxesInput, CheckBoxesOptions, InMemoryObject};
/// use formkit_tags::HtmlRenderer;
/// use serde_json::json;
///
/// let renderer = HtmlRenderer::new();
/// let book = InMemoryObject::new("book")
///     .with_value("author", json!([1]))
///     .with_collection("author", json!([["Justin French", 1], ["Kate French", 2]]));
///
/// let html = CheckBoxesInput::new(&renderer)
///     .render(&book, "author", &CheckBoxesOptions::new())
///     .unwrap();
///
/// assert!(html.as_str().starts_with(r#"<fieldset><legend class="label"><label>Author</label></legend>"#));
/// assert!(html.as_str().contains(r#"<input checked="checked" id="book_author_1""#));
/// ```
#[derive(Clone, Copy)]
pub struct CheckBoxesInput<'r> {
	renderer: &'r dyn ElementRenderer,
}

/// Everything resolved before any markup is produced
struct GroupContext<'a> {
	object_name: &'a str,
	index: Option<String>,
	input_name: String,
	group_name: String,
	singular: Option<String>,
	state: SelectionState,
	options: &'a CheckBoxesOptions,
}

impl<'r> CheckBoxesInput<'r> {
	pub fn new(renderer: &'r dyn ElementRenderer) -> Self {
		Self { renderer }
	}

	/// Render the check box group for `method` of `object`
	///
	/// Items come from `options.collection` when present, otherwise from
	/// [`FormObject::resolve_collection`]. Items are rendered in collection
	/// order. Nothing is returned unless the whole group rendered.
	///
	/// # Errors
	///
	/// - [`FormError::Configuration`] for a malformed collection override
	/// - [`FormError::CollectionResolution`] when the object cannot supply the
	///   items or the current value
	/// - [`FormError::RenderPrimitive`] when the renderer rejects an element
	pub fn render(
		&self,
		object: &dyn FormObject,
		method: &str,
		options: &CheckBoxesOptions,
	) -> FormResult<Markup> {
		let items = match &options.collection {
			Some(collection) => collection.resolve(
				options.label_method.as_deref(),
				options.value_method.as_deref(),
			)?,
			None => object.resolve_collection(method, options)?,
		};

		let input_name = object.input_name(method);
		let context = GroupContext {
			object_name: object.object_name(),
			index: object.index(),
			group_name: check_box_group_name(object.object_name(), &input_name),
			input_name,
			singular: options
				.value_as_class
				.then(|| object.singularize(method)),
			state: SelectionState::new(
				object.resolve_bound_value(method)?,
				options.disabled.clone(),
			),
			options,
		};

		let legend = match &options.label {
			LabelOption::Hidden => None,
			LabelOption::Text(text) => Some(text.clone()),
			LabelOption::Humanized => Some(object.humanized_label(method)),
		};

		tracing::debug!(
			method,
			input_name = %context.input_name,
			items = items.len(),
			hidden_field = !options.hidden_fields,
			"rendering check boxes"
		);

		let mut builder = TagBuilder::<FormError>::scoped(self.renderer);
		builder.fieldset_with(Attributes::new(), |fieldset| {
			if let Some(text) = &legend {
				fieldset.legend_with(Attributes::from([("class", "label")]), |legend| {
					legend.label(Attributes::new(), text.as_str())?;
					Ok(())
				})?;
			}

			if !options.hidden_fields {
				let hidden = self.render_hidden_field(&context)?;
				fieldset.append_content(&hidden);
			}

			fieldset.ol_with(Attributes::new(), |ol| {
				let mut seen_ids = HashSet::new();
				for item in &items {
					self.render_item(ol, &context, item, &mut seen_ids)?;
				}
				Ok(())
			})?;
			Ok(())
		})
	}

	fn render_hidden_field(&self, context: &GroupContext<'_>) -> FormResult<Markup> {
		let mut attrs = Attributes::new();
		if let Some(singular) = &context.singular {
			attrs.set("class", format!("{singular}_default"));
		}

		Ok(hidden_field(
			self.renderer,
			&context.group_name,
			&context.options.unchecked_value,
			attrs,
		)?)
	}

	fn render_item(
		&self,
		ol: &mut TagBuilder<'r, FormError>,
		context: &GroupContext<'_>,
		item: &CollectionItem,
		seen_ids: &mut HashSet<String>,
	) -> FormResult<()> {
		let value = item.value();
		let value_str = value_text(value);
		let id = generate_html_id(
			context.object_name,
			context.index.as_deref(),
			&context.input_name,
			&sanitize_value(&value_str),
		);

		if !seen_ids.insert(id.clone()) {
			tracing::warn!(id = %id, "check box group renders a duplicate id");
		}

		let checked = context.state.is_selected(value);
		let mut attrs = Attributes::merged([
			Attributes::new().with("name", context.group_name.as_str()),
			context.options.input_html.clone(),
		]);
		attrs.set("checked", checked);
		if let Some(disabled) = context.state.is_disabled(value) {
			attrs.set("disabled", disabled);
		}
		attrs.set("id", id.as_str());

		tracing::trace!(id = %id, checked, "rendering check box");

		let mut content = check_box(
			self.renderer,
			&context.group_name,
			&value_str,
			checked,
			attrs,
		)?;
		content.push_text(" ");
		content.push_text(&item.label());

		let mut li_attrs = Attributes::new();
		if let Some(singular) = &context.singular {
			li_attrs.set("class", format!("{singular}_{}", value_str.to_lowercase()));
		}

		ol.li_with(li_attrs, |li| {
			li.label_for(&id, Attributes::new(), content)?;
			Ok(())
		})?;
		Ok(())
	}
}
