//! Byte-stream collaborator.
//!
//! The console core never owns a device: it talks to an opaque duplex
//! channel that can write bytes, hand back one received byte at a time,
//! and report monotonic time. Opening, configuring and closing the
//! underlying device is the caller's business.

use std::io;

/// Line terminator used on output. Input lines end with `\n`; a leading
/// `\r` is dropped by the line buffer, so CR+LF input works too.
pub const CRLF: &str = "\r\n";

/// A duplex byte channel with a monotonic millisecond clock.
///
/// The model is single-threaded and cooperative: [`yield_now`] is called
/// between busy-poll iterations so an embedding scheduler (or watchdog)
/// gets a chance to run. The clock wraps at `u32::MAX`; elapsed time is
/// measured with `wrapping_sub`.
///
/// [`yield_now`]: Channel::yield_now
pub trait Channel {
    /// Write raw bytes to the stream.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Take one received byte, if any is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Whether at least one received byte is pending.
    fn bytes_available(&self) -> bool;

    /// Monotonic milliseconds since an arbitrary epoch, wrapping.
    fn now_ms(&self) -> u32;

    /// Hand control back to the cooperative scheduler.
    fn yield_now(&mut self);
}
