//! Structured text rendering: wrapping and box composition.
//!
//! Output flows one way: a message is split into logical lines, each line
//! is wrapped to the interior width, and each wrapped chunk is framed
//! with edge characters, margins and alignment padding.

mod compose;
mod options;
mod wrap;

pub use compose::{compose_line, rule_line, spacer_line};
pub use options::{Align, Interior, RenderOptions};
pub use wrap::{string_width, wrap};
