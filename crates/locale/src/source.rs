//! Where translation tables come from.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::{LocaleError, LocaleStrings, Result, lang_file};

/// File extension of translation files, without the dot.
pub const LANG_FILE_EXTENSION: &str = "lang";

/// Supplies translation tables by language tag.
pub trait LocaleSource: Send + Sync {
	/// Loads every translation for `lang`.
	fn load(&self, lang: &str) -> Result<LocaleStrings>;

	/// Languages this source can load, sorted.
	fn languages(&self) -> Result<Vec<String>>;
}

/// Rejects tags that could escape the source directory or name no file.
pub fn validate_lang(lang: &str) -> Result<()> {
	let valid = !lang.is_empty()
		&& lang != "."
		&& lang != ".."
		&& lang.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
	if valid { Ok(()) } else { Err(LocaleError::InvalidLang(lang.to_owned())) }
}

/// Directory of `<lang>.lang` files.
#[derive(Debug, Clone)]
pub struct DirSource {
	dir: PathBuf,
}

impl DirSource {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn path_for(&self, lang: &str) -> PathBuf {
		self.dir.join(format!("{lang}.{LANG_FILE_EXTENSION}"))
	}
}

impl LocaleSource for DirSource {
	fn load(&self, lang: &str) -> Result<LocaleStrings> {
		validate_lang(lang)?;
		let path = self.path_for(lang);
		let content = std::fs::read_to_string(&path).map_err(|error| match error.kind() {
			std::io::ErrorKind::NotFound => LocaleError::UnknownLang(lang.to_owned()),
			_ => LocaleError::Io { path: path.clone(), error },
		})?;
		let strings = lang_file::parse(lang, &content)?;
		tracing::debug!(lang, path = %path.display(), entries = strings.len(), "loaded translation file");
		Ok(strings)
	}

	fn languages(&self) -> Result<Vec<String>> {
		let entries = std::fs::read_dir(&self.dir).map_err(|error| LocaleError::Io {
			path: self.dir.clone(),
			error,
		})?;
		let mut langs: Vec<String> = entries
			.flatten()
			.map(|entry| entry.path())
			.filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == LANG_FILE_EXTENSION))
			.filter_map(|path| path.file_stem().and_then(|stem| stem.to_str()).map(str::to_owned))
			.filter(|lang| validate_lang(lang).is_ok())
			.collect();
		langs.sort_unstable();
		Ok(langs)
	}
}

/// In-memory `.lang` sources, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	files: FxHashMap<String, String>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds (or replaces) the `.lang` source text for `lang`.
	pub fn with_lang(mut self, lang: impl Into<String>, source: impl Into<String>) -> Self {
		self.insert(lang, source);
		self
	}

	pub fn insert(&mut self, lang: impl Into<String>, source: impl Into<String>) {
		self.files.insert(lang.into(), source.into());
	}
}

impl LocaleSource for MemorySource {
	fn load(&self, lang: &str) -> Result<LocaleStrings> {
		validate_lang(lang)?;
		let source = self.files.get(lang).ok_or_else(|| LocaleError::UnknownLang(lang.to_owned()))?;
		lang_file::parse(lang, source)
	}

	fn languages(&self) -> Result<Vec<String>> {
		let mut langs: Vec<String> = self.files.keys().cloned().collect();
		langs.sort_unstable();
		Ok(langs)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("en")]
	#[case("en-US")]
	#[case("zh_Hant")]
	fn accepts_language_tags(#[case] lang: &str) {
		assert!(validate_lang(lang).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("..")]
	#[case("../etc/passwd")]
	#[case("en us")]
	#[case("a/b")]
	fn rejects_path_like_tags(#[case] lang: &str) {
		assert!(matches!(validate_lang(lang), Err(LocaleError::InvalidLang(_))));
	}

	#[test]
	fn dir_source_loads_and_lists() {
		let dir = tempfile::tempdir().expect("tempdir");
		std::fs::write(dir.path().join("en.lang"), "greeting = Hello\n").expect("write");
		std::fs::write(dir.path().join("fr.lang"), "greeting = Bonjour\n").expect("write");
		std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

		let source = DirSource::new(dir.path());
		assert_eq!(source.languages().expect("list"), vec!["en".to_owned(), "fr".to_owned()]);
		assert_eq!(source.load("fr").expect("load").get("greeting"), Some("Bonjour"));
	}

	#[test]
	fn dir_source_missing_file_is_unknown_lang() {
		let dir = tempfile::tempdir().expect("tempdir");
		let source = DirSource::new(dir.path());
		assert!(matches!(source.load("de"), Err(LocaleError::UnknownLang(lang)) if lang == "de"));
	}

	#[test]
	fn dir_source_missing_dir_is_io_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let source = DirSource::new(dir.path().join("absent"));
		assert!(matches!(source.languages(), Err(LocaleError::Io { .. })));
	}

	#[test]
	fn memory_source_round_trips_through_parser() {
		let source = MemorySource::new().with_lang("en", "a = \"x y\"").with_lang("de", "a = b");
		assert_eq!(source.languages().expect("list"), vec!["de".to_owned(), "en".to_owned()]);
		assert_eq!(source.load("en").expect("load").get("a"), Some("x y"));
		assert!(matches!(source.load("fr"), Err(LocaleError::UnknownLang(_))));
	}
}
