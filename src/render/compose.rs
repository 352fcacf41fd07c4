//! Box, rule and spacer line composition.
//!
//! Takes one wrapped chunk and frames it:
//! `edge + margin + [pad] + chunk + [pad] + margin + edge`. No terminator
//! is appended here - the facade decides between CR+LF and the configured
//! end-of-message terminator.

use super::options::{Align, Interior, RenderOptions};
use super::wrap::string_width;

fn pad(out: &mut String, c: char, n: usize) {
    for _ in 0..n {
        out.push(c);
    }
}

/// Compose a single framed visual line from one wrapped chunk.
///
/// When width-constrained, the alignment gap is
/// `avail - width(chunk)`: Left puts it all on the right, Right puts it
/// all on the left, Center splits it with any odd cell going right.
pub fn compose_line(chunk: &str, options: &RenderOptions) -> String {
    let margin_left = usize::from(options.margin_left);
    let margin_right = usize::from(options.margin_right);
    let mut out = String::with_capacity(usize::from(options.width).max(chunk.len() + 4));

    match options.interior() {
        Interior::Degenerate => {
            // No room for margins or padding: edge-only framing.
            out.push(options.edge);
            out.push_str(chunk);
            out.push(options.edge);
        }
        Interior::Unconstrained => {
            out.push(options.edge);
            pad(&mut out, ' ', margin_left);
            out.push_str(chunk);
            pad(&mut out, ' ', margin_right);
            out.push(options.edge);
        }
        Interior::Cells(avail) => {
            let gap = avail.saturating_sub(string_width(chunk));
            let (left, right) = match options.align {
                Align::Left => (0, gap),
                Align::Right => (gap, 0),
                Align::Center => (gap / 2, gap - gap / 2),
            };
            out.push(options.edge);
            pad(&mut out, ' ', margin_left + left);
            out.push_str(chunk);
            pad(&mut out, ' ', right + margin_right);
            out.push(options.edge);
        }
    }

    out
}

/// A separator rule: `corner + fill×(width-2) + corner`.
/// Widths below 2 are clamped to 2.
pub fn rule_line(width: u16, fill: char, corner: char) -> String {
    let width = usize::from(width).max(2);
    let mut out = String::with_capacity(width);
    out.push(corner);
    pad(&mut out, fill, width - 2);
    out.push(corner);
    out
}

/// A blank spacer: `edge + space×(width-2) + edge`.
/// Widths below 2 are clamped to 2.
pub fn spacer_line(width: u16, edge: char) -> String {
    let width = usize::from(width).max(2);
    let mut out = String::with_capacity(width);
    out.push(edge);
    pad(&mut out, ' ', width - 2);
    out.push(edge);
    out
}
