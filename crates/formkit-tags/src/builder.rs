//! Scoped tag builder
//!
//! [`TagBuilder`] accumulates rendered elements in its own buffer. Opening an
//! element with a callback hands the callback a fresh child builder; whatever
//! the callback renders into the child becomes the element's content, and the
//! element is flushed into the parent buffer once the callback returns.
//!
//! ## Design Pattern
//!
//! - **Explicit scopes**: the child builder is passed into the callback, never
//!   captured, so sibling scopes cannot see each other's buffers
//! - **Escape once**: plain text is escaped when its element is flushed; child
//!   output is already markup and is inserted verbatim
//! - **Error passthrough**: callbacks return `Result<(), E>`, and any error
//!   unwinds through every enclosing scope, dropping their partial buffers
//!
//! ## Example
//!
//! ```
//! use formkit_tags::{Attributes, HtmlRenderer, RenderError, TagBuilder};
//!
//! let renderer = HtmlRenderer::new();
//! let mut builder = TagBuilder::new(&renderer);
//!
//! let html = builder.fieldset_with(Attributes::new(), |fieldset| {
//!     fieldset.legend(Attributes::new(), "Authors")?;
//!     fieldset.ol_with(Attributes::new(), |ol| {
//!         ol.li(Attributes::new(), "Justin")?;
//!         ol.li(Attributes::new(), "Kate")?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     html.as_str(),
//!     "<fieldset><legend>Authors</legend><ol><li>Justin</li><li>Kate</li></ol></fieldset>"
//! );
//! # Ok::<(), RenderError>(())
//! ```

use crate::attributes::Attributes;
use crate::element::ElementRenderer;
use crate::error::RenderError;
use crate::markup::{Content, Markup};
use std::marker::PhantomData;

/// Buffered element builder for one scope
///
/// `E` is the error type callbacks may fail with. It defaults to
/// [`RenderError`]; callers with a richer error type create their root scope
/// with [`TagBuilder::scoped`].
pub struct TagBuilder<'r, E = RenderError> {
	renderer: &'r dyn ElementRenderer,
	buffer: Markup,
	_error: PhantomData<fn() -> E>,
}

impl<'r> TagBuilder<'r> {
	/// Create a root scope whose callbacks fail with [`RenderError`]
	pub fn new(renderer: &'r dyn ElementRenderer) -> Self {
		Self::scoped(renderer)
	}
}

impl<'r, E> TagBuilder<'r, E>
where
	E: From<RenderError>,
{
	/// Create a root scope whose callbacks fail with `E`
	pub fn scoped(renderer: &'r dyn ElementRenderer) -> Self {
		Self {
			renderer,
			buffer: Markup::new(),
			_error: PhantomData,
		}
	}

	/// The renderer every element in this scope is serialized with
	pub fn renderer(&self) -> &'r dyn ElementRenderer {
		self.renderer
	}

	/// Render one element and append it to this scope
	///
	/// Text content is escaped; [`Markup`] content is used as is. Returns the
	/// rendered element.
	pub fn open_element(
		&mut self,
		name: &str,
		attrs: Attributes,
		content: impl Into<Content>,
	) -> Result<Markup, E> {
		let content = content.into().into_markup();
		self.flush(name, &attrs, &content)
	}

	/// Render one element whose content is produced in a child scope
	///
	/// `children` runs synchronously against an empty child builder. The child
	/// buffer becomes the element's content, and the element is appended to this
	/// scope only after `children` has returned successfully.
	pub fn open_element_with<F>(
		&mut self,
		name: &str,
		attrs: Attributes,
		children: F,
	) -> Result<Markup, E>
	where
		F: FnOnce(&mut TagBuilder<'r, E>) -> Result<(), E>,
	{
		let mut child = TagBuilder::scoped(self.renderer);
		children(&mut child)?;
		let content = child.into_markup();
		self.flush(name, &attrs, &content)
	}

	/// Render a `<fieldset>` element with text or markup content
	#[inline]
	pub fn fieldset(&mut self, attrs: Attributes, content: impl Into<Content>) -> Result<Markup, E> {
		self.open_element("fieldset", attrs, content)
	}

	/// Render a `<fieldset>` element whose content is built by `children`
	#[inline]
	pub fn fieldset_with<F>(&mut self, attrs: Attributes, children: F) -> Result<Markup, E>
	where
		F: FnOnce(&mut TagBuilder<'r, E>) -> Result<(), E>,
	{
		self.open_element_with("fieldset", attrs, children)
	}

	/// Render a `<ol>` element with text or markup content
	#[inline]
	pub fn ol(&mut self, attrs: Attributes, content: impl Into<Content>) -> Result<Markup, E> {
		self.open_element("ol", attrs, content)
	}

	/// Render a `<ol>` element whose content is built by `children`
	#[inline]
	pub fn ol_with<F>(&mut self, attrs: Attributes, children: F) -> Result<Markup, E>
	where
		F: FnOnce(&mut TagBuilder<'r, E>) -> Result<(), E>,
	{
		self.open_element_with("ol", attrs, children)
	}

	/// Render a `<li>` element with text or markup content
	#[inline]
	pub fn li(&mut self, attrs: Attributes, content: impl Into<Content>) -> Result<Markup, E> {
		self.open_element("li", attrs, content)
	}

	/// Render a `<li>` element whose content is built by `children`
	#[inline]
	pub fn li_with<F>(&mut self, attrs: Attributes, children: F) -> Result<Markup, E>
	where
		F: FnOnce(&mut TagBuilder<'r, E>) -> Result<(), E>,
	{
		self.open_element_with("li", attrs, children)
	}

	/// Render a `<legend>` element with text or markup content
	#[inline]
	pub fn legend(&mut self, attrs: Attributes, content: impl Into<Content>) -> Result<Markup, E> {
		self.open_element("legend", attrs, content)
	}

	/// Render a `<legend>` element whose content is built by `children`
	#[inline]
	pub fn legend_with<F>(&mut self, attrs: Attributes, children: F) -> Result<Markup, E>
	where
		F: FnOnce(&mut TagBuilder<'r, E>) -> Result<(), E>,
	{
		self.open_element_with("legend", attrs, children)
	}

	/// Render a `<label>` element with text or markup content
	#[inline]
	pub fn label(&mut self, attrs: Attributes, content: impl Into<Content>) -> Result<Markup, E> {
		self.open_element("label", attrs, content)
	}

	/// Render a `<label>` element whose content is built by `children`
	#[inline]
	pub fn label_with<F>(&mut self, attrs: Attributes, children: F) -> Result<Markup, E>
	where
		F: FnOnce(&mut TagBuilder<'r, E>) -> Result<(), E>,
	{
		self.open_element_with("label", attrs, children)
	}

	/// Render a `<label>` pointing at `target_id`
	///
	/// `attrs` is merged after the generated `for` attribute, so a caller
	/// supplied `for` wins.
	pub fn label_for(
		&mut self,
		target_id: &str,
		attrs: Attributes,
		content: impl Into<Content>,
	) -> Result<Markup, E> {
		let attrs = Attributes::merged([Attributes::from([("for", target_id)]), attrs]);
		self.open_element("label", attrs, content)
	}

	/// Append already-escaped markup to this scope without wrapping it
	pub fn append_content(&mut self, markup: &Markup) {
		self.buffer.push_markup(markup);
	}

	/// Everything rendered into this scope so far
	pub fn markup(&self) -> &Markup {
		&self.buffer
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	/// Consume the scope and return its buffer
	pub fn into_markup(self) -> Markup {
		self.buffer
	}

	fn flush(&mut self, name: &str, attrs: &Attributes, content: &Markup) -> Result<Markup, E> {
		let element = self.renderer.render_element(name, attrs, content)?;
		tracing::trace!(tag = name, bytes = element.len(), "flushed element");
		self.buffer.push_markup(&element);
		Ok(element)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HtmlRenderer;
	use rstest::{fixture, rstest};

	#[fixture]
	fn renderer() -> HtmlRenderer {
		HtmlRenderer::new()
	}

	#[rstest]
	fn test_empty_fieldset(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder.fieldset(Attributes::new(), "").unwrap();
		assert_eq!(html.as_str(), "<fieldset></fieldset>");
	}

	#[rstest]
	fn test_fieldset_with_text(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder.fieldset(Attributes::new(), "foo").unwrap();
		assert_eq!(html.as_str(), "<fieldset>foo</fieldset>");
	}

	#[rstest]
	fn test_fieldset_with_nested_ol(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.fieldset_with(Attributes::new(), |fieldset| {
				fieldset.ol(Attributes::new(), "")?;
				Ok(())
			})
			.unwrap();
		assert_eq!(html.as_str(), "<fieldset><ol></ol></fieldset>");
	}

	#[rstest]
	fn test_legend_and_ol_in_fieldset(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.fieldset_with(Attributes::new(), |fieldset| {
				fieldset.legend(Attributes::new(), "foo")?;
				fieldset.ol(Attributes::new(), "")?;
				Ok(())
			})
			.unwrap();
		assert_eq!(
			html.as_str(),
			"<fieldset><legend>foo</legend><ol></ol></fieldset>"
		);
	}

	#[rstest]
	fn test_nested_ols_within_lis(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.ol_with(Attributes::new(), |ol| {
				ol.li(Attributes::new(), "foo top level")?;
				ol.li_with(Attributes::new(), |li| {
					li.ol_with(Attributes::new(), |ol_2| {
						ol_2.li(Attributes::new(), "foo second level")?;
						ol_2.li(Attributes::new(), "bar second level")?;
						Ok(())
					})?;
					Ok(())
				})?;
				ol.li(Attributes::new(), "bar top level")?;
				Ok(())
			})
			.unwrap();

		assert_eq!(
			html.as_str(),
			"<ol><li>foo top level</li>\
			 <li><ol><li>foo second level</li><li>bar second level</li></ol></li>\
			 <li>bar top level</li></ol>"
		);
	}

	#[rstest]
	fn test_return_value_is_appended_to_enclosing_scope(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let first = builder.li(Attributes::new(), "a").unwrap();
		let second = builder.li(Attributes::new(), "b").unwrap();

		assert_eq!(first.as_str(), "<li>a</li>");
		assert_eq!(second.as_str(), "<li>b</li>");
		assert_eq!(builder.markup().as_str(), "<li>a</li><li>b</li>");
	}

	#[rstest]
	fn test_text_escaped_but_child_markup_is_not(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.li_with(Attributes::new(), |li| {
				li.label(Attributes::new(), "Tom & Jerry")?;
				Ok(())
			})
			.unwrap();
		assert_eq!(html.as_str(), "<li><label>Tom &amp; Jerry</label></li>");
	}

	#[rstest]
	fn test_append_content_is_verbatim(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.fieldset_with(Attributes::new(), |fieldset| {
				fieldset.append_content(&Markup::trusted(r#"<input type="hidden" />"#));
				fieldset.ol(Attributes::new(), "")?;
				Ok(())
			})
			.unwrap();
		assert_eq!(
			html.as_str(),
			r#"<fieldset><input type="hidden" /><ol></ol></fieldset>"#
		);
	}

	#[rstest]
	fn test_callback_ignores_text_content(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.open_element_with("li", Attributes::new(), |_| Ok(()))
			.unwrap();
		assert_eq!(html.as_str(), "<li></li>");
	}

	#[rstest]
	fn test_label_for_merges_attributes(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::new(&renderer);
		let html = builder
			.label_for(
				"book_author_1",
				Attributes::from([("class", "choice")]),
				"Justin",
			)
			.unwrap();
		assert_eq!(
			html.as_str(),
			r#"<label class="choice" for="book_author_1">Justin</label>"#
		);
	}

	#[rstest]
	fn test_renderer_failure_propagates_and_discards_scope() {
		let renderer = HtmlRenderer::strict();
		let mut builder = TagBuilder::new(&renderer);

		let result = builder.ol_with(Attributes::new(), |ol| {
			ol.li(Attributes::new(), "kept?")?;
			ol.open_element("marquee", Attributes::new(), "boom")?;
			Ok(())
		});

		assert_eq!(result, Err(RenderError::UnknownTag("marquee".to_string())));
		assert!(builder.is_empty());
	}

	#[derive(Debug, PartialEq)]
	enum CallerError {
		Render(RenderError),
		Aborted,
	}

	impl From<RenderError> for CallerError {
		fn from(error: RenderError) -> Self {
			CallerError::Render(error)
		}
	}

	#[rstest]
	fn test_caller_error_unwinds_nested_scopes(renderer: HtmlRenderer) {
		let mut builder = TagBuilder::<CallerError>::scoped(&renderer);

		let result = builder.fieldset_with(Attributes::new(), |fieldset| {
			fieldset.ol_with(Attributes::new(), |ol| {
				ol.li(Attributes::new(), "first")?;
				Err(CallerError::Aborted)
			})?;
			Ok(())
		});

		assert_eq!(result, Err(CallerError::Aborted));
		assert!(builder.is_empty());
	}
}
