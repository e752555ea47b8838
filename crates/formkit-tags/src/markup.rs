//! Escaped markup and element content.
//!
//! [`Markup`] marks text that is already safe to concatenate into a document.
//! Plain strings only become markup through [`Markup::escape`], so text is
//! escaped exactly once and builder output is never escaped again.

use std::borrow::Cow;
use std::fmt;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use formkit_tags::html_escape;
///
/// assert_eq!(html_escape("Justin French"), "Justin French");
/// assert_eq!(html_escape("Tom & <Jerry>"), "Tom &amp; &lt;Jerry&gt;");
/// ```
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Already-escaped HTML text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
	/// Create empty markup
	pub fn new() -> Self {
		Self(String::new())
	}

	/// Escape plain text into markup
	///
	/// # Examples
	///
	/// ```
	/// use formkit_tags::Markup;
	///
	/// let markup = Markup::escape("<b>bold</b>");
	/// assert_eq!(markup.as_str(), "&lt;b&gt;bold&lt;/b&gt;");
	/// ```
	pub fn escape(text: &str) -> Self {
		Self(html_escape(text).into_owned())
	}

	/// Wrap a string that is already valid, escaped markup
	///
	/// Use this for output of an element renderer or another trusted source.
	/// The string is inserted verbatim wherever the markup is used.
	pub fn trusted(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Append other markup verbatim
	pub fn push_markup(&mut self, other: &Markup) {
		self.0.push_str(&other.0);
	}

	/// Append plain text, escaping it first
	pub fn push_text(&mut self, text: &str) {
		self.0.push_str(&html_escape(text));
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

/// Content of a single element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
	/// No content
	#[default]
	Empty,
	/// Plain text, escaped when the element is rendered
	Text(String),
	/// Markup inserted verbatim
	Markup(Markup),
}

impl Content {
	/// Resolve the content into markup, escaping text exactly once
	pub fn into_markup(self) -> Markup {
		match self {
			Content::Empty => Markup::new(),
			Content::Text(text) => Markup::escape(&text),
			Content::Markup(markup) => markup,
		}
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Content::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Content::Text(text)
	}
}

impl From<Markup> for Content {
	fn from(markup: Markup) -> Self {
		Content::Markup(markup)
	}
}
