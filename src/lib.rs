//! # boxline
//!
//! Interactive text I/O for device consoles: boxed, aligned, word-wrapped
//! output and validated line-oriented input over a plain byte stream.
//!
//! The crate is split along the data flow:
//! ```text
//! Output: message → wrap → compose → Channel
//! Input:  Channel → LineBuffer → prompt engine → typed value
//! ```
//!
//! ## Modules
//!
//! - [`channel`] - The byte-stream collaborator trait (duplex bytes + clock)
//! - [`line_buffer`] - Single-slot byte → line assembler
//! - [`render`] - Text wrapping and box/rule/spacer composition
//! - [`console`] - The facade: `print*` output and `get_*` typed prompts
//! - [`error`] - Prompt rejection taxonomy (operator-facing messages)
//! - [`term`] - crossterm-backed [`Channel`] over the local terminal
//!
//! Everything is single-threaded and cooperative: the prompt engine
//! busy-polls the channel and yields between iterations, it never parks
//! on a blocking primitive.

pub mod channel;
pub mod console;
pub mod error;
pub mod line_buffer;
pub mod render;
pub mod term;

// Re-export commonly used items
pub use channel::{CRLF, Channel};
pub use console::{Console, ConsoleConfig, SEP_TOKEN};
pub use error::{Error, NumberKind};
pub use line_buffer::LineBuffer;
pub use render::{
    Align, Interior, RenderOptions, compose_line, rule_line, spacer_line, string_width, wrap,
};
pub use term::TermChannel;
