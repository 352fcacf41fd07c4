//! Frame geometry and alignment options.

use crate::channel::CRLF;

/// Horizontal alignment of a chunk inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// How a message is framed, aligned and wrapped.
///
/// Built with struct-update syntax:
///
/// ```
/// use boxline::{Align, RenderOptions};
///
/// let opts = RenderOptions {
///     align: Align::Center,
///     width: 40,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Single character framing each visual line on both sides.
    pub edge: char,
    pub align: Align,
    /// Total line width in display cells. 0 = unconstrained: no wrap,
    /// no padding.
    pub width: u16,
    /// Minimum blank columns inside the left edge.
    pub margin_left: u16,
    /// Minimum blank columns inside the right edge.
    pub margin_right: u16,
    /// Appended after the last emitted visual line. Intermediate wrapped
    /// lines always end with CR+LF.
    pub terminator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            edge: '|',
            align: Align::Left,
            width: 0,
            margin_left: 0,
            margin_right: 0,
            terminator: CRLF.to_string(),
        }
    }
}

/// Interior space left for text once edges and margins are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interior {
    /// `width == 0`: chunks pass through unwrapped and unpadded, margins
    /// still apply.
    Unconstrained,
    /// Nonzero width with no room left between edges and margins:
    /// rendering degrades to edge-only output.
    Degenerate,
    /// Usable cells between the margins.
    Cells(usize),
}

impl RenderOptions {
    /// Classify the interior. A nonzero `width` must exceed
    /// `2 + margin_left + margin_right` to leave any room for text.
    pub fn interior(&self) -> Interior {
        if self.width == 0 {
            return Interior::Unconstrained;
        }
        let overhead = 2 + usize::from(self.margin_left) + usize::from(self.margin_right);
        let width = usize::from(self.width);
        if width > overhead {
            Interior::Cells(width - overhead)
        } else {
            Interior::Degenerate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_unconstrained() {
        let opts = RenderOptions::default();
        assert_eq!(opts.interior(), Interior::Unconstrained);
    }

    #[test]
    fn interior_subtracts_edges_and_margins() {
        let opts = RenderOptions {
            width: 10,
            margin_left: 1,
            margin_right: 2,
            ..Default::default()
        };
        assert_eq!(opts.interior(), Interior::Cells(5));
    }

    #[test]
    fn too_narrow_degrades() {
        // width must *exceed* the overhead, so equal is degenerate too.
        let opts = RenderOptions {
            width: 4,
            margin_left: 1,
            margin_right: 1,
            ..Default::default()
        };
        assert_eq!(opts.interior(), Interior::Degenerate);

        let opts = RenderOptions {
            width: 2,
            ..Default::default()
        };
        assert_eq!(opts.interior(), Interior::Degenerate);
    }
}
