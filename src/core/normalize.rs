use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 將手寫的食譜名稱轉為標準格式 (例如 "meat-ball_" -> "Meat Ball")
///
/// Returns `None` when nothing but separators and symbols was written.
pub fn normalize_recipe_name(input: &str) -> Option<String> {
    let spaced = SEPARATORS.replace_all(input, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");
    let collapsed = WHITESPACE.replace_all(letters.trim(), " ");

    let name = collapsed
        .split(' ')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
