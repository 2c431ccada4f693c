use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn parse_ok(source: &str) -> LocaleStrings {
	parse("en", source).expect("valid .lang source")
}

#[test]
fn parses_simple_entries() {
	let strings = parse_ok("example.title = \"test data\"\nmenu.quit=Quit\n");
	assert_eq!(strings.get("example.title"), Some("test data"));
	assert_eq!(strings.get("menu.quit"), Some("Quit"));
	assert_eq!(strings.len(), 2);
}

#[test]
fn unquoted_whitespace_is_dropped() {
	let strings = parse_ok("menu.start = New Game");
	assert_eq!(strings.get("menu.start"), Some("NewGame"));
}

#[test]
fn quotes_preserve_separators_and_newlines() {
	let strings = parse_ok("credits = \"a = b\n# not a comment\"\nnext = x");
	assert_eq!(strings.get("credits"), Some("a = b\n# not a comment"));
	assert_eq!(strings.get("next"), Some("x"));
}

#[test]
fn inline_hash_is_literal() {
	let strings = parse_ok("a = b # note\nc # d = e\nf = \"g # h\"\n");
	assert_eq!(strings.get("a"), Some("b#note"));
	assert_eq!(strings.get("c#d"), Some("e"));
	assert_eq!(strings.get("f"), Some("g # h"));
	assert_eq!(strings.len(), 3);
}

#[test]
fn later_duplicates_win() {
	let strings = parse_ok("k = first\nk = second\n");
	assert_eq!(strings.get("k"), Some("second"));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
	let strings = parse_ok("# header\n\n   # indented\r\nkey = value\r\n");
	assert_eq!(strings.keys().collect::<Vec<_>>(), vec!["key"]);
	assert_eq!(strings.get("key"), Some("value"));
}

#[test]
fn extra_equals_stay_in_value() {
	assert_eq!(parse_ok("expr = a=b").get("expr"), Some("a=b"));
}

#[test]
fn empty_value_is_stored() {
	assert_eq!(parse_ok("blank =\n").get("blank"), Some(""));
}

#[rstest]
#[case("\"open", 1)]
#[case("a = b\nc = \"open\n", 2)]
fn unterminated_quote_is_an_error(#[case] source: &str, #[case] expected_line: usize) {
	match parse("en", source) {
		Err(LocaleError::Parse { line, message, .. }) => {
			assert_eq!(line, expected_line);
			assert_eq!(message, "unterminated quote");
		}
		other => panic!("expected parse error, got {other:?}"),
	}
}

#[test]
fn missing_key_is_an_error() {
	assert!(matches!(
		parse("de", "ok = 1\n= orphan\n"),
		Err(LocaleError::Parse { line: 2, ref lang, .. }) if lang == "de"
	));
}

#[rstest]
#[case(r"line\nbreak", "line\nbreak")]
#[case(r"col\tumn", "col\tumn")]
#[case(r"cr\rgone", "crgone")]
#[case(r"back\\slash", "back\\slash")]
#[case(r"keep\q", "keep\\q")]
#[case("trailing\\", "trailing\\")]
fn decode_escapes(#[case] raw: &str, #[case] expected: &str) {
	assert_eq!(decode(raw), expected);
}

#[test]
fn escapes_decode_inside_files() {
	let strings = parse_ok(r#"help = "first\nsecond""#);
	assert_eq!(strings.get("help"), Some("first\nsecond"));
}

#[test]
fn encode_inverts_decode() {
	let original = "tab\there\nnew \\ line";
	assert_eq!(decode(&encode(original)), original);
}
