// =====================================================
// FILE: tests/command_tests.rs - COMMAND SYSTEM
// =====================================================

use bilingual_page::{
    create_default_registry, open_page, Command, CommandHandler, Config, Page, Result,
};

#[derive(Debug)]
struct TitleCommand;

impl Command for TitleCommand {
    fn name(&self) -> &'static str {
        "title"
    }

    fn description(&self) -> &'static str {
        "Print the page title"
    }

    fn matches(&self, command: &str) -> bool {
        command.trim().eq_ignore_ascii_case("title")
    }

    fn execute(&self, page: &mut Page, _args: &[&str]) -> Result<String> {
        Ok(page.with_surface(|doc| doc.title().to_string()))
    }
}

async fn setup() -> (CommandHandler, Page) {
    let page = open_page(&Config::default(), None)
        .await
        .expect("demo page");
    (CommandHandler::new(), page)
}

#[test]
fn test_registry() {
    let registry = create_default_registry();
    assert_eq!(registry.len(), 8);
    assert!(registry.find_command("toggle").is_some());
    assert!(registry.find_command("switch").is_some());
    assert!(registry.find_command("text").is_some());
    assert!(registry.find_command("nope").is_none());

    // highest priority first
    assert_eq!(registry.list_commands().first().map(|c| c.0), Some("exit"));
}

#[tokio::test]
async fn test_toggle_and_lookup() {
    let (handler, mut page) = setup().await;

    let result = handler.handle_input(&mut page, "t login_success");
    assert!(result.success);
    assert_eq!(result.message, "登录成功！");

    let result = handler.handle_input(&mut page, "toggle");
    assert!(result.success);
    assert!(result.message.contains("EN"), "{}", result.message);

    let result = handler.handle_input(&mut page, "t login_success");
    assert_eq!(result.message, "Login successful!");

    let result = handler.handle_input(&mut page, "t unknown_key");
    assert_eq!(result.message, "unknown_key");
}

#[tokio::test]
async fn test_text_requires_key() {
    let (handler, mut page) = setup().await;
    let result = handler.handle_input(&mut page, "t");
    assert!(!result.success);
    assert!(result.message.contains("usage"));
}

#[tokio::test]
async fn test_lang_command() {
    let (handler, mut page) = setup().await;

    let result = handler.handle_input(&mut page, "lang");
    assert!(result.success);
    assert!(result.message.contains("Current language: ZH (zh-CN)"));
    assert!(result.message.contains("zh, en"));

    let result = handler.handle_input(&mut page, "lang zh");
    assert!(result.message.contains("Already"));

    let result = handler.handle_input(&mut page, "lang EN");
    assert!(result.success);
    assert_eq!(page.current_language(), bilingual_page::LanguageCode::En);

    let result = handler.handle_input(&mut page, "lang de");
    assert!(!result.success);
    assert!(result.message.contains("Invalid language"));
}

#[tokio::test]
async fn test_notify_command() {
    let (handler, mut page) = setup().await;

    let result = handler.handle_input(&mut page, "notify error error");
    assert!(result.success, "{}", result.message);
    assert!(result.message.contains("错误"));

    page.with_surface(|doc| {
        let container = doc.find_by_class("container").unwrap();
        let first = doc.children(container)[0];
        assert_eq!(doc.text(first), Some("错误"));
        assert!(doc.node(first).unwrap().has_class("error"));
    });

    let result = handler.handle_input(&mut page, "notify");
    assert!(!result.success);
}

#[tokio::test]
async fn test_show_and_keys() {
    let (handler, mut page) = setup().await;

    let result = handler.handle_input(&mut page, "show");
    assert!(result.success);
    assert!(result.message.contains("<html lang=\"zh-CN\">"));
    assert!(result.message.contains("Title: 课堂互动平台 - 登录"));

    let result = handler.handle_input(&mut page, "keys login");
    assert!(result.success);
    assert!(result.message.contains("login_success"));
    assert!(result.message.contains("login_failed"));
    assert!(!result.message.contains("logout"));

    let result = handler.handle_input(&mut page, "keys zzz");
    assert!(result.message.contains("No keys"));
}

#[tokio::test]
async fn test_help_unknown_and_exit() {
    let (handler, mut page) = setup().await;

    let result = handler.handle_input(&mut page, "help");
    assert!(result.success);
    for (name, _) in handler.list_commands() {
        assert!(result.message.contains(name), "help misses {}", name);
    }

    let result = handler.handle_input(&mut page, "totally_unknown_command_xyz");
    assert!(!result.success);
    assert!(!result.should_exit);

    let result = handler.handle_input(&mut page, "");
    assert!(!result.success);

    let result = handler.handle_input(&mut page, "exit");
    assert!(result.success);
    assert!(result.should_exit);
    assert_eq!(result.message, "Bye.");
}

#[tokio::test]
async fn test_added_command_runs_and_is_listed() {
    let (mut handler, mut page) = setup().await;
    handler.add_command(TitleCommand);

    let result = handler.handle_input(&mut page, "title");
    assert!(result.success);
    assert_eq!(result.message, "课堂互动平台 - 登录");

    let result = handler.handle_input(&mut page, "help");
    assert!(result.success);
    assert!(result.message.contains("Print the page title"), "{}", result.message);
    assert!(result.message.starts_with("Available commands:"));
}
