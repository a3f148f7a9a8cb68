//! Accessibility notes and usage snippets from `<Name>.examples.md` files.
//!
//! Both extractors are heuristics over markdown text and never fail; a
//! document without matches simply yields nothing.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum accessibility notes kept per component.
pub const MAX_ACCESSIBILITY_NOTES: usize = 10;
/// Maximum `jsx` blocks considered per component.
pub const MAX_CODE_EXAMPLES: usize = 3;
/// Examples of this many characters or more are dropped.
pub const MAX_EXAMPLE_CHARS: usize = 500;

static INLINE_FENCE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```[^`]*```").ok());

static TAG_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]+>").ok());

static JSX_BLOCK_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```jsx\s*\n(.*?)```").ok());

fn opens_accessibility_window(line: &str) -> bool {
    line.contains("Accessibility") || line.to_lowercase().contains("aria-")
}

fn strip_once(line: &str) -> String {
    let mut out = line.to_string();
    if let Some(re) = INLINE_FENCE_RE.as_ref() {
        out = re.replace_all(&out, "").into_owned();
    }
    if let Some(re) = TAG_RE.as_ref() {
        out = re.replace_all(&out, "").into_owned();
    }
    out.trim().to_string()
}

/// Strip inline fenced spans and markup tags from a line, then trim.
///
/// Stripping repeats until the line stops changing, so cleaning an already
/// cleaned line is a no-op.
pub fn clean_line(line: &str) -> String {
    let mut current = strip_once(line);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Collect lines from accessibility sections of an examples document.
///
/// Documents that never mention `Accessibility` yield no notes.
/// A line mentioning `Accessibility` or `aria-` (any case) opens a window,
/// and that line is itself collected. Every following line is cleaned and
/// kept unless it is an `import` or `//` comment. The first line that
/// cleans to nothing closes the window, so a blank line inside a section
/// ends it early.
pub fn extract_accessibility_notes(text: &str) -> Vec<String> {
    if !text.contains("Accessibility") {
        return Vec::new();
    }

    let mut notes = Vec::new();
    let mut active = false;

    for line in text.lines() {
        if opens_accessibility_window(line) {
            active = true;
        }
        if !active {
            continue;
        }

        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            active = false;
            continue;
        }
        if !cleaned.starts_with("import") && !cleaned.starts_with("//") {
            notes.push(cleaned);
        }
    }

    notes.truncate(MAX_ACCESSIBILITY_NOTES);
    notes
}

/// Pull short ```` ```jsx ```` blocks out of an examples document.
///
/// Only the first three blocks are considered; of those, blocks whose
/// trimmed body is [`MAX_EXAMPLE_CHARS`] characters or longer are dropped.
pub fn extract_code_examples(text: &str) -> Vec<String> {
    let Some(re) = JSX_BLOCK_RE.as_ref() else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .take(MAX_CODE_EXAMPLES)
        .map(|m| m.as_str().trim())
        .filter(|body| body.chars().count() < MAX_EXAMPLE_CHARS)
        .map(str::to_string)
        .collect()
}
