//! Single-slot byte → line assembler.
//!
//! Accumulates raw bytes into one logical line at a time. `\r` is
//! discarded (so CR+LF input degrades to LF), `\n` commits the line, and
//! filling the buffer force-terminates the line early - truncation, not
//! growth, and not an error.
//!
//! There is exactly one slot: if a second line completes before the first
//! is consumed, the first is overwritten. Callers that poll fast enough
//! never notice; callers that don't get natural backpressure. This is
//! deliberate - do not "fix" it into a queue.

/// Fixed-capacity line assembler.
#[derive(Debug)]
pub struct LineBuffer {
    buf: Vec<u8>,
    pos: usize,
    len: usize,
    ready: bool,
}

impl LineBuffer {
    /// Default capacity in bytes, matching a typical UART receive buffer.
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a buffer holding at most `capacity - 1` bytes per line.
    /// Capacities below 2 are clamped to 2.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            buf: vec![0; capacity],
            pos: 0,
            len: 0,
            ready: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Consume one incoming byte.
    ///
    /// `\r` is dropped. `\n`, or the cursor reaching one byte short of
    /// capacity, commits the accumulated bytes as the ready line (the
    /// overflowing byte itself is discarded). Anything else is appended.
    pub fn ingest(&mut self, byte: u8) {
        if byte == b'\r' {
            return;
        }
        if byte == b'\n' || self.pos >= self.capacity() - 1 {
            self.len = self.pos;
            self.pos = 0;
            self.ready = true;
        } else {
            self.buf[self.pos] = byte;
            self.pos += 1;
        }
    }

    /// Whether a committed line is waiting to be taken.
    pub fn has_line(&self) -> bool {
        self.ready
    }

    /// Return the committed line and clear the slot.
    ///
    /// Returns an empty string if no line is ready - that is "no data
    /// yet", not an error. Bytes are decoded as UTF-8, lossily.
    pub fn take_line(&mut self) -> String {
        if !self.ready {
            return String::new();
        }
        let line = String::from_utf8_lossy(&self.buf[..self.len]).into_owned();
        self.ready = false;
        self.len = 0;
        self.pos = 0;
        line
    }

    /// Discard everything buffered and reset to the initial state.
    pub fn flush(&mut self) {
        self.pos = 0;
        self.len = 0;
        self.ready = false;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(buf: &mut LineBuffer, s: &str) {
        for b in s.bytes() {
            buf.ingest(b);
        }
    }

    #[test]
    fn crlf_line() {
        let mut buf = LineBuffer::new();
        feed(&mut buf, "ab\r\n");
        assert!(buf.has_line());
        assert_eq!(buf.take_line(), "ab");
        assert!(!buf.has_line());
    }

    #[test]
    fn lf_only_line() {
        let mut buf = LineBuffer::new();
        feed(&mut buf, "hello\n");
        assert_eq!(buf.take_line(), "hello");
    }

    #[test]
    fn take_before_ready_is_empty() {
        let mut buf = LineBuffer::new();
        feed(&mut buf, "partial");
        assert!(!buf.has_line());
        assert_eq!(buf.take_line(), "");
        // The partial bytes are still pending.
        feed(&mut buf, "\n");
        assert_eq!(buf.take_line(), "partial");
    }

    #[test]
    fn empty_line_commits() {
        let mut buf = LineBuffer::new();
        feed(&mut buf, "\n");
        assert!(buf.has_line());
        assert_eq!(buf.take_line(), "");
    }

    #[test]
    fn overflow_truncates_and_commits() {
        let mut buf = LineBuffer::with_capacity(5);
        feed(&mut buf, "abcdefgh");
        // Cursor hits capacity - 1 after "abcd"; 'e' forces the commit
        // and is itself discarded.
        assert!(buf.has_line());
        assert_eq!(buf.take_line(), "abcd");
    }

    #[test]
    fn second_line_overwrites_first() {
        let mut buf = LineBuffer::new();
        feed(&mut buf, "first\nsecond\n");
        // Single slot: only the most recent commit survives.
        assert!(buf.has_line());
        assert_eq!(buf.take_line(), "second");
        assert!(!buf.has_line());
    }

    #[test]
    fn flush_discards_pending() {
        let mut buf = LineBuffer::new();
        feed(&mut buf, "stale\n");
        buf.flush();
        assert!(!buf.has_line());
        assert_eq!(buf.take_line(), "");
        feed(&mut buf, "fresh\n");
        assert_eq!(buf.take_line(), "fresh");
    }

    #[test]
    fn cursor_stays_below_capacity() {
        let mut buf = LineBuffer::with_capacity(4);
        for _ in 0..64 {
            buf.ingest(b'x');
            assert!(buf.pos < buf.capacity());
        }
    }

    #[test]
    fn lossy_utf8() {
        let mut buf = LineBuffer::new();
        buf.ingest(0xFF);
        buf.ingest(b'\n');
        assert_eq!(buf.take_line(), "\u{FFFD}");
    }
}
