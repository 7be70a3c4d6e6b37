// src/i18n/langs/mod.rs

use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

pub fn file_name(lang: &str) -> String {
    format!("{}.json", lang.to_lowercase())
}

pub fn get_language_file(lang: &str) -> Option<Cow<'static, [u8]>> {
    Langs::get(&file_name(lang)).map(|file| file.data)
}
