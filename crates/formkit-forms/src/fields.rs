//! Single form fields, rendered the way the host's own field helpers do
//!
//! Each helper starts from generated attributes and merges the caller's
//! attributes over them, so callers can override anything, including `id`.

use crate::naming::sanitize_to_id;
use formkit_tags::{Attributes, ElementRenderer, Markup, RenderResult};

/// `<input type=... name=... id=... value=...>`
///
/// The id defaults to [`sanitize_to_id`] of the name. A `None` value omits
/// the attribute.
pub fn input_field(
	renderer: &dyn ElementRenderer,
	input_type: &str,
	name: &str,
	value: Option<&str>,
	attrs: Attributes,
) -> RenderResult<Markup> {
	let base = Attributes::new()
		.with("type", input_type)
		.with("name", name)
		.with("id", sanitize_to_id(name))
		.with("value", value);

	renderer.render_element("input", &Attributes::merged([base, attrs]), &Markup::new())
}

/// Hidden input
///
/// # Examples
///
/// ```
/// use formkit_forms::fields::hidden_field;
/// use formkit_tags::{Attributes, HtmlRenderer};
///
/// let html = hidden_field(&HtmlRenderer::new(), "book[author_ids][]", "", Attributes::new()).unwrap();
/// assert_eq!(
///     html.as_str(),
///     r#"<input id="book_author_ids_" name="book[author_ids][]" type="hidden" value="" />"#
/// );
/// ```
pub fn hidden_field(
	renderer: &dyn ElementRenderer,
	name: &str,
	value: &str,
	attrs: Attributes,
) -> RenderResult<Markup> {
	input_field(renderer, "hidden", name, Some(value), attrs)
}

/// Check box input
///
/// `checked` is written before `attrs` are merged, so an explicit `checked`
/// in `attrs` wins.
pub fn check_box(
	renderer: &dyn ElementRenderer,
	name: &str,
	value: &str,
	checked: bool,
	attrs: Attributes,
) -> RenderResult<Markup> {
	let attrs = Attributes::merged([Attributes::new().with("checked", checked), attrs]);
	input_field(renderer, "checkbox", name, Some(value), attrs)
}

/// `<textarea>` whose content is the escaped value
pub fn text_area(
	renderer: &dyn ElementRenderer,
	name: &str,
	value: Option<&str>,
	attrs: Attributes,
) -> RenderResult<Markup> {
	let base = Attributes::new()
		.with("name", name)
		.with("id", sanitize_to_id(name));
	let content = value.map(Markup::escape).unwrap_or_default();

	renderer.render_element("textarea", &Attributes::merged([base, attrs]), &content)
}

#[cfg(test)]
mod tests {
	use super::*;
	use formkit_tags::{HtmlRenderer, RenderError};
	use rstest::{fixture, rstest};

	#[fixture]
	fn renderer() -> HtmlRenderer {
		HtmlRenderer::new()
	}

	#[rstest]
	fn test_hidden_field_with_class(renderer: HtmlRenderer) {
		let html = hidden_field(
			&renderer,
			"book[author_ids][]",
			"none",
			Attributes::from([("class", "author_default")]),
		)
		.unwrap();

		assert_eq!(
			html.as_str(),
			r#"<input class="author_default" id="book_author_ids_" name="book[author_ids][]" type="hidden" value="none" />"#
		);
	}

	#[rstest]
	#[case(true, r#"<input checked="checked" id="book_author_ids_1" name="book[author_ids][]" type="checkbox" value="1" />"#)]
	#[case(false, r#"<input id="book_author_ids_1" name="book[author_ids][]" type="checkbox" value="1" />"#)]
	fn test_check_box(renderer: HtmlRenderer, #[case] checked: bool, #[case] expected: &str) {
		let attrs = Attributes::from([("id", "book_author_ids_1")]);
		let html = check_box(&renderer, "book[author_ids][]", "1", checked, attrs).unwrap();

		assert_eq!(html.as_str(), expected);
	}

	#[rstest]
	fn test_input_field_without_value(renderer: HtmlRenderer) {
		let html = input_field(&renderer, "file", "book[cover]", None, Attributes::new()).unwrap();
		assert_eq!(
			html.as_str(),
			r#"<input id="book_cover" name="book[cover]" type="file" />"#
		);
	}

	#[rstest]
	fn test_attribute_values_are_escaped(renderer: HtmlRenderer) {
		let html = hidden_field(&renderer, "q", r#""><script>"#, Attributes::new()).unwrap();
		assert!(html.as_str().contains(r#"value="&quot;&gt;&lt;script&gt;""#));
	}

	#[rstest]
	fn test_text_area_escapes_content(renderer: HtmlRenderer) {
		let html = text_area(&renderer, "book[body]", Some("a < b"), Attributes::new()).unwrap();
		assert_eq!(
			html.as_str(),
			r#"<textarea id="book_body" name="book[body]">a &lt; b</textarea>"#
		);
	}

	#[rstest]
	fn test_invalid_attribute_name_is_rejected(renderer: HtmlRenderer) {
		let result = hidden_field(&renderer, "q", "", Attributes::from([("bad name", "x")]));
		assert!(matches!(
			result,
			Err(RenderError::InvalidAttributeName { .. })
		));
	}
}
