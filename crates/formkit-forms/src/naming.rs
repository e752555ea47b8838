//! Field names and generated element ids
//!
//! These follow the host's conventions exactly, since submitted parameters and
//! existing stylesheets depend on them:
//! - check box group field: `book[author_ids][]`
//! - scalar field: `book[title]`
//! - generated id: `book_author_ids_1`

use regex::Regex;
use std::sync::OnceLock;

static NON_WORD: OnceLock<Regex> = OnceLock::new();
static OBJECT_NAME_SEPARATORS: OnceLock<Regex> = OnceLock::new();

fn non_word() -> &'static Regex {
	NON_WORD.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("static pattern"))
}

fn object_name_separators() -> &'static Regex {
	OBJECT_NAME_SEPARATORS
		.get_or_init(|| Regex::new(r"\]\[|[^-a-zA-Z0-9:.]").expect("static pattern"))
}

/// Reduce an option value to an id fragment
///
/// ASCII whitespace becomes `_`, every other non-word character (including
/// non-ASCII spaces) is dropped, and the result is lowercased. Distinct values
/// may collide.
///
/// # Examples
///
/// ```
/// use formkit_forms::naming::sanitize_value;
///
/// assert_eq!(sanitize_value("Gold Member"), "gold_member");
/// assert_eq!(sanitize_value("C++ & Rust!"), "c__rust");
/// ```
pub fn sanitize_value(value: &str) -> String {
	let underscored: String = value
		.chars()
		.map(|c| {
			if matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C') {
				'_'
			} else {
				c
			}
		})
		.collect();
	non_word().replace_all(&underscored, "").to_lowercase()
}

/// Id derived from a field name, as the host's own field helpers produce it
///
/// `]` is dropped and every character outside `[-A-Za-z0-9:.]` becomes `_`.
///
/// # Examples
///
/// ```
/// use formkit_forms::naming::sanitize_to_id;
///
/// assert_eq!(sanitize_to_id("book[author_ids][]"), "book_author_ids_");
/// ```
pub fn sanitize_to_id(name: &str) -> String {
	name.chars()
		.filter(|c| *c != ']')
		.map(|c| {
			if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
				c
			} else {
				'_'
			}
		})
		.collect()
}

/// Object name as used in ids: `book[authors][0]` becomes `book_authors_0`
pub fn sanitized_object_name(object_name: &str) -> String {
	let replaced = object_name_separators().replace_all(object_name, "_");
	match replaced.strip_suffix('_') {
		Some(trimmed) => trimmed.to_string(),
		None => replaced.into_owned(),
	}
}

/// Method name with one trailing `?`, `/` or `-` removed
pub fn sanitized_method_name(method: &str) -> &str {
	method
		.strip_suffix(['?', '/', '-'])
		.unwrap_or(method)
}

/// Generated element id: `object[_index]_method[_value]`, blank parts skipped
///
/// # Examples
///
/// ```
/// use formkit_forms::naming::generate_html_id;
///
/// assert_eq!(generate_html_id("book", None, "author_ids", "1"), "book_author_ids_1");
/// assert_eq!(generate_html_id("book", Some("2"), "title", ""), "book_2_title");
/// ```
pub fn generate_html_id(object_name: &str, index: Option<&str>, method: &str, value: &str) -> String {
	let object = sanitized_object_name(object_name);
	let parts = [
		object.as_str(),
		index.unwrap_or(""),
		sanitized_method_name(method),
		value,
	];

	parts
		.iter()
		.filter(|part| !part.trim().is_empty())
		.copied()
		.collect::<Vec<_>>()
		.join("_")
}

/// Name of a scalar field: `book[title]`
pub fn field_name(object_name: &str, method: &str) -> String {
	format!("{object_name}[{method}]")
}

/// Name shared by every check box of a group and its hidden field: `book[author_ids][]`
pub fn check_box_group_name(object_name: &str, input_name: &str) -> String {
	format!("{object_name}[{input_name}][]")
}
