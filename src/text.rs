//! Helpers for multi-line text, used by the text-grid constructor and
//! by tests that embed shape literals.
//!
//! All helpers treat `\r\n`, `\r`, and `\n` as the same line break.

/// Split `text` into lines on any line-ending style.
///
/// Unlike [`str::lines`], a lone `\r` also terminates a line, so text
/// copied from any platform parses the same way.
pub fn lines_any(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\r' => {
                lines.push(&text[start..i]);
                start = i + 1;
                if let Some(&(j, '\n')) = chars.peek() {
                    chars.next();
                    start = j + 1;
                }
            }
            '\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Rewrite every line ending in `text` to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    lines_any(text).join("\n")
}

/// Strip the common leading indentation from every line of `text`.
///
/// The trim width is the smallest column of a non-whitespace character
/// over all lines that have one; blank lines do not contribute. With
/// `trim_empty_lines`, leading and trailing line breaks of the result
/// are removed as well. Lines are re-joined with `\n`.
pub fn trim_common_indentation(text: &str, trim_empty_lines: bool) -> String {
    let lines = lines_any(text);

    let trim_width = lines
        .iter()
        .filter_map(|line| line.find(|c: char| !c.is_whitespace()))
        .min()
        .unwrap_or(0);

    let trimmed: Vec<&str> = lines
        .iter()
        .map(|line| &line[trim_width.min(line.len())..])
        .collect();

    let result = trimmed.join("\n");

    if trim_empty_lines {
        result.trim_matches(|c| c == '\n' || c == '\r').to_string()
    } else {
        result
    }
}
