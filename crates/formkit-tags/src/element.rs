//! Element serialization primitive
//!
//! [`ElementRenderer`] turns one tag name, its attributes and its finished
//! content into markup. The tag builder owns no serialization logic of its own;
//! every element it produces goes through this trait, so a host can swap in
//! its own renderer.

use crate::attributes::{AttrValue, Attributes};
use crate::error::{RenderError, RenderResult};
use crate::markup::{Markup, html_escape};

/// Elements that never have a closing tag when rendered without content
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Elements accepted by [`HtmlRenderer::strict`]
pub const FORM_ELEMENTS: &[&str] = &[
	"button", "div", "fieldset", "form", "input", "label", "legend", "li", "ol", "optgroup",
	"option", "p", "select", "span", "textarea", "ul",
];

/// Serializes a single element
pub trait ElementRenderer: Send + Sync {
	/// Render `<name attrs>content</name>`
	///
	/// `content` is inserted verbatim. Attribute values are escaped by the
	/// renderer, and attributes whose value is not rendered
	/// (see [`AttrValue::is_rendered`]) are omitted.
	fn render_element(&self, name: &str, attrs: &Attributes, content: &Markup)
	-> RenderResult<Markup>;
}

/// Default HTML serializer
///
/// Attributes are written in name order. Boolean attributes set to `true`
/// render as `checked="checked"`.
///
/// ## Example
///
/// ```
/// use formkit_tags::{Attributes, ElementRenderer, HtmlRenderer, Markup};
///
/// let renderer = HtmlRenderer::new();
/// let attrs = Attributes::new()
///     .with("type", "checkbox")
///     .with("value", "1")
///     .with("checked", true);
///
/// let html = renderer.render_element("input", &attrs, &Markup::new()).unwrap();
/// assert_eq!(html.as_str(), r#"<input checked="checked" type="checkbox" value="1" />"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
	allowed_tags: Option<&'static [&'static str]>,
}

impl HtmlRenderer {
	/// Create a renderer accepting any syntactically valid tag name
	pub fn new() -> Self {
		Self { allowed_tags: None }
	}

	/// Create a renderer that only accepts [`FORM_ELEMENTS`]
	pub fn strict() -> Self {
		Self {
			allowed_tags: Some(FORM_ELEMENTS),
		}
	}

	fn check_tag(&self, name: &str) -> RenderResult<()> {
		if !is_valid_tag_name(name) {
			return Err(RenderError::InvalidTagName(name.to_string()));
		}
		match self.allowed_tags {
			Some(allowed) if !allowed.contains(&name) => {
				Err(RenderError::UnknownTag(name.to_string()))
			}
			_ => Ok(()),
		}
	}
}

impl ElementRenderer for HtmlRenderer {
	fn render_element(
		&self,
		name: &str,
		attrs: &Attributes,
		content: &Markup,
	) -> RenderResult<Markup> {
		self.check_tag(name)?;

		let mut html = String::with_capacity(name.len() * 2 + content.len() + 16);
		html.push('<');
		html.push_str(name);

		for (key, value) in attrs.iter() {
			if !is_valid_attribute_name(key) {
				return Err(RenderError::InvalidAttributeName {
					tag: name.to_string(),
					attribute: key.to_string(),
				});
			}
			match value {
				AttrValue::Text(text) => {
					html.push_str(&format!(r#" {}="{}""#, key, html_escape(text)));
				}
				AttrValue::Bool(true) => {
					html.push_str(&format!(r#" {}="{}""#, key, key));
				}
				AttrValue::Bool(false) | AttrValue::Absent => {}
			}
		}

		if content.is_empty() && VOID_ELEMENTS.contains(&name) {
			html.push_str(" />");
		} else {
			html.push('>');
			html.push_str(content.as_str());
			html.push_str("</");
			html.push_str(name);
			html.push('>');
		}

		Ok(Markup::trusted(html))
	}
}

fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
		}
		_ => false,
	}
}

fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn render(renderer: &HtmlRenderer, name: &str, attrs: &Attributes, content: &str) -> String {
		renderer
			.render_element(name, attrs, &Markup::trusted(content))
			.unwrap()
			.into_string()
	}

	#[rstest]
	fn test_render_element_with_content() {
		let html = render(&HtmlRenderer::new(), "li", &Attributes::new(), "foo");
		assert_eq!(html, "<li>foo</li>");
	}

	#[rstest]
	fn test_empty_non_void_element_has_close_tag() {
		let html = render(&HtmlRenderer::new(), "ol", &Attributes::new(), "");
		assert_eq!(html, "<ol></ol>");
	}

	#[rstest]
	fn test_void_element_self_closes() {
		let attrs = Attributes::from([("type", "hidden"), ("value", "")]);
		let html = render(&HtmlRenderer::new(), "input", &attrs, "");
		assert_eq!(html, r#"<input type="hidden" value="" />"#);
	}

	#[rstest]
	fn test_attribute_values_are_escaped() {
		let attrs = Attributes::from([("title", r#"Tom & "Jerry""#)]);
		let html = render(&HtmlRenderer::new(), "span", &attrs, "");
		assert_eq!(html, r#"<span title="Tom &amp; &quot;Jerry&quot;"></span>"#);
	}

	#[rstest]
	fn test_content_is_not_escaped() {
		let html = render(&HtmlRenderer::new(), "label", &Attributes::new(), "<b>x</b>");
		assert_eq!(html, "<label><b>x</b></label>");
	}

	#[rstest]
	fn test_false_and_absent_attributes_are_omitted() {
		let attrs = Attributes::new()
			.with("checked", false)
			.with("disabled", AttrValue::Absent)
			.with("value", "2");
		let html = render(&HtmlRenderer::new(), "input", &attrs, "");
		assert_eq!(html, r#"<input value="2" />"#);
	}

	#[rstest]
	#[case("")]
	#[case("1li")]
	#[case("li class")]
	#[case("<li>")]
	fn test_invalid_tag_name_is_rejected(#[case] name: &str) {
		let result = HtmlRenderer::new().render_element(name, &Attributes::new(), &Markup::new());
		assert_eq!(result, Err(RenderError::InvalidTagName(name.to_string())));
	}

	#[rstest]
	fn test_strict_renderer_rejects_unknown_tag() {
		let result = HtmlRenderer::strict().render_element("blink", &Attributes::new(), &Markup::new());
		assert_eq!(result, Err(RenderError::UnknownTag("blink".to_string())));
	}

	#[rstest]
	fn test_strict_renderer_accepts_form_vocabulary() {
		for name in ["fieldset", "legend", "ol", "li", "label", "input"] {
			assert!(
				HtmlRenderer::strict()
					.render_element(name, &Attributes::new(), &Markup::new())
					.is_ok()
			);
		}
	}

	#[rstest]
	#[case("on click")]
	#[case("a\"b")]
	#[case("x=y")]
	fn test_invalid_attribute_name_is_rejected(#[case] attribute: &str) {
		let attrs = Attributes::new().with(attribute, "v");
		let result = HtmlRenderer::new().render_element("span", &attrs, &Markup::new());
		assert_eq!(
			result,
			Err(RenderError::InvalidAttributeName {
				tag: "span".to_string(),
				attribute: attribute.to_string(),
			})
		);
	}
}
