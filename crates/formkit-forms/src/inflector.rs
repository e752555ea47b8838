//! English inflection defaults used for labels and CSS classes

use regex::Regex;
use std::sync::OnceLock;

const UNCOUNTABLE: &[&str] = &[
	"equipment",
	"information",
	"rice",
	"money",
	"species",
	"series",
	"fish",
	"sheep",
	"jeans",
	"police",
	"news",
];

const IRREGULAR: &[(&str, &str)] = &[
	("people", "person"),
	("men", "man"),
	("women", "woman"),
	("children", "child"),
	("sexes", "sex"),
	("moves", "move"),
	("mice", "mouse"),
	("geese", "goose"),
	("teeth", "tooth"),
	("feet", "foot"),
];

/// Ordered most specific first; the first matching rule wins
const SINGULAR_RULES: &[(&str, &str)] = &[
	(r"(?i)(quiz)zes$", "${1}"),
	(r"(?i)(matr)ices$", "${1}ix"),
	(r"(?i)(vert|ind)ices$", "${1}ex"),
	(r"(?i)^(ox)en$", "${1}"),
	(r"(?i)(alias|status)(es)?$", "${1}"),
	(r"(?i)(octop|vir)(us|i)$", "${1}us"),
	(r"(?i)(cris|ax|test)(is|es)$", "${1}is"),
	(r"(?i)(shoe)s$", "${1}"),
	(r"(?i)(bus)(es)?$", "${1}"),
	(r"(?i)(o)es$", "${1}"),
	(r"(?i)(x|ch|ss|sh)es$", "${1}"),
	(r"(?i)(m)ovies$", "${1}ovie"),
	(r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
	(r"(?i)([lr])ves$", "${1}f"),
	(r"(?i)(tive)s$", "${1}"),
	(r"(?i)(hive)s$", "${1}"),
	(r"(?i)([^f])ves$", "${1}fe"),
	(r"(?i)(analy|diagno|parenthe|progno|synop|the)(sis|ses)$", "${1}sis"),
	(r"(?i)([ti])a$", "${1}um"),
	(r"(?i)(ss)$", "${1}"),
	(r"(?i)s$", ""),
];

static COMPILED_RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn singular_rules() -> &'static [(Regex, &'static str)] {
	COMPILED_RULES.get_or_init(|| {
		SINGULAR_RULES
			.iter()
			.map(|(pattern, replacement)| {
				(Regex::new(pattern).expect("static pattern"), *replacement)
			})
			.collect()
	})
}

/// Last `_`-separated word of an identifier
fn last_word(word: &str) -> &str {
	word.rsplit('_').next().unwrap_or(word)
}

/// Singular form of an English word or snake_case identifier
///
/// Only the last word of an identifier is inflected.
///
/// # Examples
///
/// ```
/// use formkit_forms::inflector::singularize;
///
/// assert_eq!(singularize("authors"), "author");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("gold_members"), "gold_member");
/// assert_eq!(singularize("news"), "news");
/// ```
pub fn singularize(word: &str) -> String {
	let original_last = last_word(word);
	let last = original_last.to_lowercase();
	if UNCOUNTABLE.contains(&last.as_str()) {
		return word.to_string();
	}

	let stem_len = word.len() - original_last.len();
	if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == last) {
		return format!("{}{}", &word[..stem_len], singular);
	}

	singular_rules()
		.iter()
		.find(|(pattern, _)| pattern.is_match(word))
		.map(|(pattern, replacement)| pattern.replace(word, *replacement).into_owned())
		.unwrap_or_else(|| word.to_string())
}

/// Human readable label for a method name
///
/// A trailing `_id` is dropped, a trailing `_ids` becomes a plural word,
/// underscores become spaces and only the first letter is capitalized.
///
/// # Examples
///
/// ```
/// use formkit_forms::inflector::humanize;
///
/// assert_eq!(humanize("author_id"), "Author");
/// assert_eq!(humanize("author_ids"), "Authors");
/// assert_eq!(humanize("first_name"), "First name");
/// ```
pub fn humanize(method: &str) -> String {
	let base = if let Some(stem) = method.strip_suffix("_ids") {
		format!("{stem}s")
	} else if let Some(stem) = method.strip_suffix("_id") {
		stem.to_string()
	} else {
		method.to_string()
	};

	let spaced = base.replace('_', " ").trim().to_lowercase();
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
