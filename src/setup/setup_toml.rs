// src/setup/setup_toml.rs
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "bilingual.toml";

pub const DEFAULT_CONFIG: &str = r#"[general]
# off | error | warn | info | debug | trace, or 0-5 (RUST_LOG overrides)
log_level = "info"

[page]
# id of the button whose label offers the other language
toggle_id = "languageToggle"
# first element with this class receives transient messages (body otherwise)
container_class = "container"

[messages]
# clamped to 100..=60000
dismiss_after_ms = 3000
default_kind = "success"

[catalog]
# directory with zh.json and en.json; empty uses the built-in catalog
dir = ""
"#;

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(".bilingual").join(CONFIG_FILE_NAME));
            paths.push(base_dir.join(CONFIG_FILE_NAME));
            paths.push(base_dir.join("config").join(CONFIG_FILE_NAME));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
    }
    paths
}
