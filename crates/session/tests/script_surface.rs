#![allow(unused_crate_dependencies)]

//! End-to-end checks of the operations scripts can call.

use std::path::Path;
use std::sync::Arc;
use std::thread;

use lumen_session::{Config, Document, Locale, MemorySource, MissingPolicy, NodeSpec, Session, SessionError, Value};
use pretty_assertions::assert_eq;

fn memory_session() -> Session {
	let locale = Locale::new(MemorySource::new().with_lang("en", "example.title = \"test data\"\nscore = \"Score: {points}\"\n"));
	locale.set_lang("en").expect("en");
	Session::with_parts(Document::new(), locale)
}

fn write_lang(dir: &Path, lang: &str, body: &str) {
	std::fs::write(dir.join(format!("{lang}.lang")), body).expect("write lang file");
}

#[test]
fn select_and_name_plain_node() {
	let session = memory_session();
	let created = session.document().create(NodeSpec::plain().id("main")).expect("create");
	let ctx = session.context();

	let node = ctx.select("main").expect("registered");
	assert_eq!(node, created);
	assert_eq!(ctx.get_name(&node), "main");
	assert!(ctx.select("not-created").is_none());
}

#[test]
fn host_label_is_the_name() {
	let session = memory_session();
	session
		.document()
		.create(NodeSpec::plain().id("hud").name("Heads-up display"))
		.expect("create");
	let ctx = session.context();
	let node = ctx.select("hud").expect("registered");
	assert_eq!(ctx.get_name(&node), "Heads-up display");
}

#[test]
fn set_property_overwrites() {
	let session = memory_session();
	session.document().create(NodeSpec::plain().id("main")).expect("create");
	let ctx = session.context();
	let node = ctx.select("main").expect("registered");

	ctx.set_property(&node, "visible", true);
	ctx.set_property(&node, "visible", false);
	assert_eq!(node.property("visible"), Some(Value::Bool(false)));

	ctx.set_property(&node, "layout", serde_json::json!({ "x": 4, "y": [1, 2] }));
	let layout = node.property("layout").expect("stored");
	assert_eq!(layout.as_map().and_then(|m| m.get("x")).and_then(Value::as_int), Some(4));
}

#[test]
fn window_narrowing_then_title() {
	let session = memory_session();
	session.document().create(NodeSpec::window().id("win")).expect("create");
	let ctx = session.context();
	let node = ctx.select("win").expect("registered");

	assert!(ctx.is_window(&node));
	let win = ctx.as_window(&node).expect("window capability");
	ctx.set_title(&win, "Settings");
	assert_eq!(win.title(), "Settings");

	// Plain operations still apply to the narrowed handle.
	ctx.set_property(&win, "modal", true);
	assert_eq!(ctx.get_name(&win), "win");
	assert_eq!(node.property("modal"), Some(Value::Bool(true)));
}

#[test]
fn plain_node_never_narrows() {
	let session = memory_session();
	session.document().create(NodeSpec::plain().id("p")).expect("create");
	let ctx = session.context();
	let node = ctx.select("p").expect("registered");

	assert!(!ctx.is_window(&node));
	assert!(ctx.as_window(&node).is_none());
}

#[test]
fn i18n_present_and_missing() {
	let session = memory_session();
	let ctx = session.context();
	assert_eq!(ctx.i18n("example.title"), "test data");
	assert_eq!(ctx.i18n("nonexistent.key"), "nonexistent.key");
	assert_eq!(ctx.i18n_format("score", &[("points", "42")]), "Score: 42");
}

#[test]
fn init_loads_languages_from_config_dir() {
	let dir = tempfile::tempdir().expect("tempdir");
	write_lang(dir.path(), "en", "menu.quit = Quit\nmenu.start = Start\n");
	write_lang(dir.path(), "de", "menu.quit = Beenden\n");

	let mut config = Config::default();
	config.locale.dir = dir.path().to_path_buf();
	config.locale.lang = "de".into();
	config.document.window_title = "Duskland".into();

	let session = Session::init(&config).expect("init");
	let ctx = session.context();
	assert_eq!(ctx.i18n("menu.quit"), "Beenden");
	assert_eq!(ctx.i18n("menu.start"), "Start");
	assert_eq!(session.locale().languages().expect("list"), vec!["de", "en"]);

	let win = session.document().create(NodeSpec::window()).expect("create");
	assert_eq!(win.as_window().map(|w| w.title()), Some("Duskland".to_owned()));
}

#[test]
fn init_honors_blank_policy() {
	let dir = tempfile::tempdir().expect("tempdir");
	write_lang(dir.path(), "en", "a = b\n");

	let mut config = Config::default();
	config.locale.dir = dir.path().to_path_buf();
	config.locale.missing = MissingPolicy::Blank;

	let session = Session::init(&config).expect("init");
	assert_eq!(session.context().i18n("missing"), "");
}

#[test]
fn init_fails_without_default_language() {
	let dir = tempfile::tempdir().expect("tempdir");
	let mut config = Config::default();
	config.locale.dir = dir.path().to_path_buf();

	assert!(matches!(Session::init(&config), Err(SessionError::Locale(_))));
}

#[test]
fn load_reads_config_file() {
	let dir = tempfile::tempdir().expect("tempdir");
	std::fs::create_dir(dir.path().join("lang")).expect("mkdir");
	write_lang(&dir.path().join("lang"), "en", "greeting = Hello\n");
	let path = dir.path().join("session.toml");
	std::fs::write(&path, "[document]\nwindow_title = \"Main\"\n").expect("write");

	let session = Session::load(&path).expect("load");
	assert_eq!(session.context().i18n("greeting"), "Hello");
	assert!(matches!(Session::load(dir.path().join("absent.toml")), Err(SessionError::Config(_))));
}

#[test]
fn teardown_releases_nodes() {
	let session = memory_session();
	session.document().create(NodeSpec::plain().id("a")).expect("create");
	session.document().create(NodeSpec::window().id("b")).expect("create");
	assert_eq!(session.teardown(), 2);
}

#[test]
fn concurrent_scripts_see_consistent_state() {
	let session = Arc::new(memory_session());
	session.document().create(NodeSpec::window().id("shared")).expect("create");

	let workers: Vec<_> = (0..4)
		.map(|worker| {
			let session = Arc::clone(&session);
			thread::spawn(move || {
				let ctx = session.context();
				let node = ctx.select("shared").expect("registered");
				for i in 0..100 {
					ctx.set_property(&node, format!("w{worker}").as_str(), i);
					if let Some(win) = ctx.as_window(&node) {
						ctx.set_title(&win, &format!("worker {worker}"));
					}
					assert_eq!(ctx.i18n("example.title"), "test data");
				}
			})
		})
		.collect();
	for worker in workers {
		worker.join().expect("worker panicked");
	}

	let node = session.context().select("shared").expect("registered");
	for worker in 0..4 {
		assert_eq!(node.property(&format!("w{worker}")), Some(Value::Int(99)));
	}
	let title = node.as_window().expect("window").title();
	assert!(title.starts_with("worker "));
}
