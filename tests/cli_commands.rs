// File: tests/cli_commands.rs
use ticklist::cli::{Command, execute};
use ticklist::config::Config;
use ticklist::context::TestContext;

fn run(ctx: &TestContext, command: Command) -> String {
    let mut out = Vec::new();
    execute(&command, ctx, &Config::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn first_id(ctx: &TestContext) -> String {
    let raw = run(ctx, Command::Export);
    let value: serde_json::Value = serde_json::from_str(raw.trim()).unwrap();
    value[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_add_toggle_edit_flow() {
    let ctx = TestContext::new();

    let out = run(&ctx, Command::Add("buy milk".into()));
    assert!(out.contains("[ ] "));
    assert!(out.contains("buy milk"));
    assert!(out.ends_with("All: 1  Done: 0  Open: 1\n"));

    let id = first_id(&ctx);
    let out = run(&ctx, Command::Toggle(id.clone()));
    assert!(out.contains(&format!("[x] {}  buy milk", id)));
    assert!(out.ends_with("All: 1  Done: 1  Open: 0\n"));

    let out = run(&ctx, Command::Edit(id.clone(), "  ".into()));
    assert!(out.contains("buy milk"));

    let out = run(&ctx, Command::Edit(id.clone(), "buy oat milk".into()));
    assert!(out.contains("buy oat milk"));

    assert_eq!(run(&ctx, Command::Stats), "All: 1  Done: 1  Open: 0\n");
}

#[test]
fn test_blank_add_and_unknown_ids_are_reported() {
    let ctx = TestContext::new();
    assert!(run(&ctx, Command::Add("   ".into())).starts_with("Nothing to add"));
    assert!(run(&ctx, Command::Toggle("404".into())).starts_with("No item with id 404."));
    assert_eq!(run(&ctx, Command::List), "All: 0  Done: 0  Open: 0\n");
}

#[test]
fn test_export_without_data_is_empty_array() {
    let ctx = TestContext::new();
    assert_eq!(run(&ctx, Command::Export), "[]\n");
}

#[test]
fn test_html_command_escapes_text() {
    let ctx = TestContext::new();
    run(&ctx, Command::Add("<b>bold</b> & co".into()));
    let html = run(&ctx, Command::Html);
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    assert!(html.contains("<span id=\"total-count\">1</span>"));
}

#[test]
fn test_custom_storage_file_name() {
    let ctx = TestContext::new();
    let cfg = Config {
        storage_file: "other.json".into(),
        ..Config::default()
    };
    let mut out = Vec::new();
    execute(&Command::Add("x".into()), &ctx, &cfg, &mut out).unwrap();

    assert!(ctx.root.join("data").join("other.json").exists());
    assert!(!ctx.root.join("data").join("storage.json").exists());
}
