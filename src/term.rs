//! Local-terminal [`Channel`] backed by crossterm.
//!
//! Lets the console run against the developer's own terminal instead of
//! a device UART: raw mode is enabled on construction, key events are
//! polled without blocking and mapped down to the byte vocabulary the
//! line buffer understands, and the terminal is restored on drop.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

use crate::channel::Channel;

/// Raw-mode terminal channel.
pub struct TermChannel {
    out: io::Stdout,
    pending: VecDeque<u8>,
    epoch: Instant,
}

impl TermChannel {
    /// Enable raw mode and wrap stdin/stdout as a byte channel.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self {
            out: io::stdout(),
            pending: VecDeque::new(),
            epoch: Instant::now(),
        })
    }

    /// Drain every ready crossterm event into the byte queue.
    fn pump(&mut self) {
        while event::poll(Duration::ZERO).unwrap_or(false) {
            let Ok(ev) = event::read() else {
                break;
            };
            let Event::Key(key) = ev else {
                continue;
            };
            if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                continue;
            }
            match key.code {
                KeyCode::Char(c) => {
                    let mut buf = [0u8; 4];
                    self.pending.extend(c.encode_utf8(&mut buf).bytes());
                }
                KeyCode::Enter => self.pending.push_back(b'\n'),
                KeyCode::Tab => self.pending.push_back(b'\t'),
                KeyCode::Backspace => self.pending.push_back(0x08),
                KeyCode::Esc => self.pending.push_back(0x1b),
                _ => {}
            }
        }
    }
}

impl Channel for TermChannel {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.pending.is_empty() {
            self.pump();
        }
        self.pending.pop_front()
    }

    fn bytes_available(&self) -> bool {
        !self.pending.is_empty() || event::poll(Duration::ZERO).unwrap_or(false)
    }

    fn now_ms(&self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }

    fn yield_now(&mut self) {
        thread::yield_now();
    }
}

impl Drop for TermChannel {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
