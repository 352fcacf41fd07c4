//! The formatting facade: structured output and validated input.
//!
//! [`Console`] owns the [`Channel`] and the [`LineBuffer`] and composes
//! the rendering and prompt engines into the public surface:
//! `print` / `print_separator` / `print_spacer` / `print_header` out,
//! `get_int` / `get_u8` / `get_u16` / `get_u32` / `get_float` /
//! `get_string` / `get_yn` back in.
//!
//! All dependencies are passed explicitly - there is no ambient global
//! console state.

mod prompt;
mod validate;

use std::io;

use crate::channel::{CRLF, Channel};
use crate::line_buffer::LineBuffer;
use crate::render::{Align, Interior, RenderOptions, compose_line, rule_line, spacer_line, wrap};

/// Literal token delimiting header segments inside one message string.
/// A two-character escape, not a real newline.
pub const SEP_TOKEN: &str = "\\sep";

/// Facade configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Echo each ingested byte back to the stream so the operator sees
    /// their keystrokes. Facade policy, not a buffer behavior.
    pub echo: bool,
    /// Line buffer capacity in bytes; lines hold at most `capacity - 1`.
    pub line_capacity: usize,
    /// Input marker printed before each prompt attempt.
    pub marker: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            echo: true,
            line_capacity: LineBuffer::DEFAULT_CAPACITY,
            marker: "> ".to_string(),
        }
    }
}

/// Interactive text console over a byte channel.
pub struct Console<C: Channel> {
    channel: C,
    line: LineBuffer,
    config: ConsoleConfig,
}

impl<C: Channel> Console<C> {
    pub fn new(channel: C) -> Self {
        Self::with_config(channel, ConsoleConfig::default())
    }

    pub fn with_config(channel: C, config: ConsoleConfig) -> Self {
        let line = LineBuffer::with_capacity(config.line_capacity);
        Self {
            channel,
            line,
            config,
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Tear down the facade and hand the channel back.
    pub fn into_channel(self) -> C {
        self.channel
    }

    // =========================================================================
    // Raw output
    // =========================================================================

    /// Write a string verbatim, no terminator.
    pub fn write_raw(&mut self, s: &str) -> io::Result<()> {
        self.channel.write(s.as_bytes())
    }

    /// Write a string followed by CR+LF.
    pub fn write_line(&mut self, s: &str) -> io::Result<()> {
        self.channel.write(s.as_bytes())?;
        self.channel.write(CRLF.as_bytes())
    }

    // =========================================================================
    // Boxed output
    // =========================================================================

    /// Render a message as framed visual lines.
    ///
    /// The message is split on `\n` (a trailing `\r` per line is
    /// dropped), each logical line is wrapped to the interior width, and
    /// every chunk is composed into a box line. Intermediate lines end
    /// with CR+LF; the very last uses `options.terminator`.
    pub fn print(&mut self, message: &str, options: &RenderOptions) -> io::Result<()> {
        let lines: Vec<&str> = message.split('\n').collect();
        for (i, raw) in lines.iter().enumerate() {
            let base = raw.strip_suffix('\r').unwrap_or(raw);
            let chunks = match options.interior() {
                Interior::Cells(avail) => wrap(base, avail),
                Interior::Unconstrained | Interior::Degenerate => vec![base.to_string()],
            };
            for (j, chunk) in chunks.iter().enumerate() {
                let out = compose_line(chunk, options);
                self.channel.write(out.as_bytes())?;
                let is_last = i == lines.len() - 1 && j == chunks.len() - 1;
                if is_last {
                    self.channel.write(options.terminator.as_bytes())?;
                } else {
                    self.channel.write(CRLF.as_bytes())?;
                }
            }
        }
        Ok(())
    }

    /// Print a separator rule: `corner + fill×(width-2) + corner`.
    pub fn print_separator(&mut self, width: u16, fill: char, corner: char) -> io::Result<()> {
        let line = rule_line(width, fill, corner);
        self.write_line(&line)
    }

    /// Print a blank spacer: `edge + space×(width-2) + edge`.
    pub fn print_spacer(&mut self, width: u16, edge: char) -> io::Result<()> {
        let line = spacer_line(width, edge);
        self.write_line(&line)
    }

    /// Print a header block: a top rule, then one centered margin-1 box
    /// line per `\sep`-delimited segment, each followed by a rule (the
    /// last of which is the bottom rule).
    pub fn print_header(
        &mut self,
        message: &str,
        width: u16,
        edge: char,
        corner: char,
        fill: char,
    ) -> io::Result<()> {
        self.print_separator(width, fill, corner)?;
        let options = RenderOptions {
            edge,
            align: Align::Center,
            width,
            margin_left: 1,
            margin_right: 1,
            ..Default::default()
        };
        for segment in message.split(SEP_TOKEN) {
            self.print(segment, &options)?;
            self.print_separator(width, fill, corner)?;
        }
        Ok(())
    }

    // =========================================================================
    // Input plumbing
    // =========================================================================

    /// Service the stream: ingest (and echo) every pending byte.
    ///
    /// This is the cooperative I/O step; the prompt engine calls it on
    /// every wait iteration, and embedding loops should call it whenever
    /// they are otherwise idle.
    pub fn service(&mut self) -> io::Result<()> {
        while self.channel.bytes_available() {
            let Some(byte) = self.channel.read_byte() else {
                break;
            };
            if self.config.echo {
                self.channel.write(&[byte])?;
            }
            self.line.ingest(byte);
            self.channel.yield_now();
        }
        Ok(())
    }

    /// Whether a complete input line is waiting.
    pub fn has_line(&self) -> bool {
        self.line.has_line()
    }

    /// Take the pending input line, or an empty string if none is ready.
    pub fn read_line(&mut self) -> String {
        self.line.take_line()
    }

    /// Discard all buffered and pending input. Call before a fresh
    /// prompt to drop stale keystrokes.
    pub fn flush_input(&mut self) {
        while self.channel.bytes_available() {
            let _ = self.channel.read_byte();
            self.channel.yield_now();
        }
        self.line.flush();
    }

    /// Busy-poll until a complete line arrives or `timeout_ms` elapses
    /// (0 = wait forever). Yields to the cooperative scheduler on every
    /// iteration; never parks.
    pub(crate) fn read_line_timeout(&mut self, timeout_ms: u32) -> io::Result<Option<String>> {
        let start = self.channel.now_ms();
        loop {
            self.service()?;
            if self.line.has_line() {
                return Ok(Some(self.line.take_line()));
            }
            if timeout_ms != 0 && self.channel.now_ms().wrapping_sub(start) >= timeout_ms {
                return Ok(None);
            }
            self.channel.yield_now();
        }
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    /// Prompt for a signed 32-bit integer in `[min, max]`.
    ///
    /// Returns `(value, true)` on a successful parse, `(default, false)`
    /// once retries or the timeout are exhausted. `retry_count == 0`
    /// means unlimited attempts, `timeout_ms == 0` unlimited wait.
    pub fn get_int(
        &mut self,
        prompt: &str,
        min: i32,
        max: i32,
        retry_count: u16,
        timeout_ms: u32,
        default: i32,
    ) -> io::Result<(i32, bool)> {
        let marker = self.config.marker.clone();
        prompt::run(self, prompt, &marker, default, retry_count, timeout_ms, |line| {
            validate::integer(line, min, max)
        })
    }

    /// Prompt for an unsigned 8-bit integer in `[min, max]`.
    pub fn get_u8(
        &mut self,
        prompt: &str,
        min: u8,
        max: u8,
        retry_count: u16,
        timeout_ms: u32,
        default: u8,
    ) -> io::Result<(u8, bool)> {
        let marker = self.config.marker.clone();
        prompt::run(self, prompt, &marker, default, retry_count, timeout_ms, |line| {
            validate::integer(line, min, max)
        })
    }

    /// Prompt for an unsigned 16-bit integer in `[min, max]`.
    pub fn get_u16(
        &mut self,
        prompt: &str,
        min: u16,
        max: u16,
        retry_count: u16,
        timeout_ms: u32,
        default: u16,
    ) -> io::Result<(u16, bool)> {
        let marker = self.config.marker.clone();
        prompt::run(self, prompt, &marker, default, retry_count, timeout_ms, |line| {
            validate::integer(line, min, max)
        })
    }

    /// Prompt for an unsigned 32-bit integer in `[min, max]`.
    pub fn get_u32(
        &mut self,
        prompt: &str,
        min: u32,
        max: u32,
        retry_count: u16,
        timeout_ms: u32,
        default: u32,
    ) -> io::Result<(u32, bool)> {
        let marker = self.config.marker.clone();
        prompt::run(self, prompt, &marker, default, retry_count, timeout_ms, |line| {
            validate::integer(line, min, max)
        })
    }

    /// Prompt for a base-10 decimal in `[min, max]`. NaN and trailing
    /// garbage are rejected.
    pub fn get_float(
        &mut self,
        prompt: &str,
        min: f64,
        max: f64,
        retry_count: u16,
        timeout_ms: u32,
        default: f64,
    ) -> io::Result<(f64, bool)> {
        let marker = self.config.marker.clone();
        prompt::run(self, prompt, &marker, default, retry_count, timeout_ms, |line| {
            validate::decimal(line, min, max)
        })
    }

    /// Prompt for a string whose length lies in `[min_len, max_len]`.
    /// `max_len == 0` defaults to the line buffer capacity minus one.
    pub fn get_string(
        &mut self,
        prompt: &str,
        min_len: u16,
        max_len: u16,
        retry_count: u16,
        timeout_ms: u32,
        default: &str,
    ) -> io::Result<(String, bool)> {
        let marker = self.config.marker.clone();
        let min_len = usize::from(min_len);
        let max_len = if max_len == 0 {
            self.line.capacity() - 1
        } else {
            usize::from(max_len)
        };
        prompt::run(
            self,
            prompt,
            &marker,
            default.to_string(),
            retry_count,
            timeout_ms,
            |line| validate::string_length(line, min_len, max_len),
        )
    }

    /// Prompt for a yes/no answer. Accepts `y`/`yes`/`1`/`true` and
    /// `n`/`no`/`0`/`false`, case-insensitively.
    pub fn get_yn(
        &mut self,
        prompt: &str,
        retry_count: u16,
        timeout_ms: u32,
        default: bool,
    ) -> io::Result<(bool, bool)> {
        let marker = format!("(y/n) {}", self.config.marker);
        prompt::run(self, prompt, &marker, default, retry_count, timeout_ms, |line| {
            validate::yes_no(line)
        })
    }
}
