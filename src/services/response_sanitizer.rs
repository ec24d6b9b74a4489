//! Clean-up of raw model output before it is parsed or shown to a user.
//!
//! Both sanitizers are total and idempotent: running one twice gives the same
//! text as running it once.

use std::sync::LazyLock;

use regex::Regex;

// Fence marker plus an optional language tag, spaced or not ("```json", "``` json", "```")
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[ \t]*[A-Za-z0-9_+-]*").expect("valid fence pattern"));

// A line break, then one or more whitespace-only lines
static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t\r\f\v]*\n(?:[ \t\r\f\v]*\n)*").expect("valid blank line pattern")
});

static CHAT_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid chat blank line pattern"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"•[ \t]*").expect("valid bullet pattern"));

/// Prepares model output for structured parsing.
pub fn sanitize_itinerary_text(raw: &str) -> String {
    let mut text = raw.to_string();
    // Repeat until no marker is left
    while CODE_FENCE.is_match(&text) {
        text = CODE_FENCE.replace_all(&text, "").into_owned();
    }

    let text = straighten_quotes(&text);
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// Prepares an assistant reply for display: no markdown emphasis, one space after
/// each bullet, at most one blank line between paragraphs.
pub fn sanitize_chat_reply(raw: &str) -> String {
    let text = raw.replace('*', "");
    let text = BULLET.replace_all(&text, "• ");
    let text = CHAT_BLANK_LINES.replace_all(&text, "\n\n");

    text.trim().to_string()
}

fn straighten_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect()
}
