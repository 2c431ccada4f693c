//! Parser for `.lang` translation files.
//!
//! One `key = value` entry per line. Outside double quotes, spaces and tabs
//! are dropped, so `menu.start = New Game` stores `NewGame`; quote the value
//! to keep whitespace. Quoted text may also contain `=`, `#` and raw line
//! breaks. A line starting with `#` is a comment. There are no trailing
//! comments: once a key has started, `#` is an ordinary character, so
//! `a = b # note` stores `b#note` under `a`.
//!
//! After unquoting, values decode `\n`, `\t` and `\\`; `\r` is dropped and any
//! other backslash is kept literally. Later entries overwrite earlier ones.

use crate::{LocaleError, LocaleStrings, Result};

/// Parses `.lang` source for `lang`. `lang` only labels errors.
pub fn parse(lang: &str, source: &str) -> Result<LocaleStrings> {
	let mut strings = LocaleStrings::new();
	let mut key = String::new();
	let mut value = String::new();
	let mut in_value = false;
	let mut in_quotes = false;
	let mut in_comment = false;
	let mut line = 1usize;
	let mut entry_line = 1usize;
	let mut quote_line = 1usize;

	let parse_error = |line: usize, message: &'static str| LocaleError::Parse {
		lang: lang.to_owned(),
		line,
		message,
	};

	for ch in source.chars() {
		if in_quotes {
			match ch {
				'"' => in_quotes = false,
				_ => {
					if ch == '\n' {
						line += 1;
					}
					if in_value { value.push(ch) } else { key.push(ch) }
				}
			}
			continue;
		}

		match ch {
			'\n' | '\r' => {
				if !in_comment && (in_value || !key.is_empty()) {
					if key.is_empty() {
						return Err(parse_error(entry_line, "entry has no key"));
					}
					strings.insert(std::mem::take(&mut key), decode(&value));
				}
				key.clear();
				value.clear();
				in_value = false;
				in_comment = false;
				if ch == '\n' {
					line += 1;
				}
				entry_line = line;
			}
			_ if in_comment => {}
			'#' if !in_value && key.is_empty() => in_comment = true,
			'"' => {
				in_quotes = true;
				quote_line = line;
			}
			'=' if !in_value => in_value = true,
			' ' | '\t' => {}
			_ => {
				if in_value { value.push(ch) } else { key.push(ch) }
			}
		}
	}

	if in_quotes {
		return Err(parse_error(quote_line, "unterminated quote"));
	}
	if !in_comment && (in_value || !key.is_empty()) {
		if key.is_empty() {
			return Err(parse_error(entry_line, "entry has no key"));
		}
		strings.insert(key, decode(&value));
	}
	Ok(strings)
}

/// Decodes the backslash escapes allowed in values.
pub fn decode(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut chars = raw.chars().peekable();
	while let Some(ch) = chars.next() {
		if ch != '\\' {
			out.push(ch);
			continue;
		}
		match chars.peek() {
			Some('n') => {
				out.push('\n');
				chars.next();
			}
			Some('t') => {
				out.push('\t');
				chars.next();
			}
			Some('r') => {
				chars.next();
			}
			Some('\\') => {
				out.push('\\');
				chars.next();
			}
			_ => out.push('\\'),
		}
	}
	out
}

/// Inverse of [`decode`] for writing values back out.
pub fn encode(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for ch in value.chars() {
		match ch {
			'\n' => out.push_str("\\n"),
			'\t' => out.push_str("\\t"),
			'\r' => {}
			'\\' => out.push_str("\\\\"),
			_ => out.push(ch),
		}
	}
	out
}

#[cfg(test)]
mod tests;
