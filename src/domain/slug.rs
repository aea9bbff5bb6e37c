use regex::Regex;
use std::sync::OnceLock;

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-z0-9]+").expect("static slug pattern is valid"))
}

/// Turn free text into a branch-safe slug.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and trims hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    separator_runs()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
