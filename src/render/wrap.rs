//! Greedy word-break text wrapping.
//!
//! Splits one logical line into chunks of at most `avail` display cells,
//! preferring to break at whitespace or after a hyphen. Single pass,
//! leftmost-fit: it never looks ahead past the current window and never
//! reflows chunks it already emitted.
//!
//! Width is measured in terminal cells (`unicode-width`) over grapheme
//! clusters (`unicode-segmentation`), so a wrap never splits a grapheme
//! and CJK/emoji are counted at their real cell width.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    s.width()
}

fn grapheme_width(g: &str) -> usize {
    g.width()
}

fn is_space(g: &str) -> bool {
    !g.is_empty() && g.chars().all(char::is_whitespace)
}

/// Wrap one logical line (no `\n` inside) to at most `avail` cells per
/// chunk, in original order.
///
/// `avail == 0` is the degenerate case: exactly one chunk equal to the
/// input. A grapheme wider than the whole window is emitted as its own
/// over-wide chunk rather than being split.
pub fn wrap(line: &str, avail: usize) -> Vec<String> {
    if avail == 0 || line.is_empty() {
        return vec![line.to_string()];
    }

    let graphemes: Vec<&str> = line.graphemes(true).collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < graphemes.len() {
        // Fill the window: the longest prefix that fits in `avail` cells.
        let mut end = start;
        let mut used = 0;
        while end < graphemes.len() {
            let gw = grapheme_width(graphemes[end]);
            if used + gw > avail {
                break;
            }
            used += gw;
            end += 1;
        }

        if end >= graphemes.len() {
            chunks.push(graphemes[start..].concat());
            break;
        }

        if end == start {
            // Single grapheme wider than the window.
            chunks.push(graphemes[start].to_string());
            start += 1;
            continue;
        }

        match find_break(&graphemes, start, end) {
            Some(Break::Space(at)) => {
                chunks.push(trim_trailing_space(&graphemes[start..at]));
                start = skip_leading_space(&graphemes, at);
            }
            Some(Break::AfterHyphen(at)) => {
                chunks.push(graphemes[start..at].concat());
                start = at;
            }
            None => {
                // Hard wrap at exactly `avail` cells; swallow a single
                // leading space in the remainder as a readability nicety.
                chunks.push(graphemes[start..end].concat());
                start = end;
                if start < graphemes.len() && graphemes[start] == " " {
                    start += 1;
                }
            }
        }
    }

    chunks
}

enum Break {
    /// Break at this whitespace grapheme (excluded from the chunk).
    Space(usize),
    /// Break after a hyphen; the chunk ends at this index.
    AfterHyphen(usize),
}

/// Search backward from the cut point for the nearest soft break inside
/// the window. The grapheme just past the window counts: if it is
/// whitespace, the window boundary itself is a perfect break.
fn find_break(graphemes: &[&str], start: usize, end: usize) -> Option<Break> {
    if is_space(graphemes[end]) {
        return Some(Break::Space(end));
    }
    let mut i = end;
    while i > start {
        let g = graphemes[i - 1];
        if is_space(g) {
            return Some(Break::Space(i - 1));
        }
        if g == "-" && i > start + 1 {
            return Some(Break::AfterHyphen(i));
        }
        i -= 1;
    }
    None
}

fn trim_trailing_space(graphemes: &[&str]) -> String {
    let mut end = graphemes.len();
    while end > 0 && is_space(graphemes[end - 1]) {
        end -= 1;
    }
    graphemes[..end].concat()
}

fn skip_leading_space(graphemes: &[&str], mut at: usize) -> usize {
    while at < graphemes.len() && is_space(graphemes[at]) {
        at += 1;
    }
    at
}
