//! End-to-end console flow over a scripted channel: banner out, typed
//! values back in, framed exactly as a serial console would see them.

use std::collections::VecDeque;
use std::io;

use pretty_assertions::assert_eq;

use boxline::{Align, Channel, Console, ConsoleConfig, RenderOptions};

/// Loopback channel with queued input and a clock that ticks once per
/// cooperative yield.
struct Loopback {
    input: VecDeque<u8>,
    output: Vec<u8>,
    clock_ms: u32,
}

impl Loopback {
    fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            clock_ms: 0,
        }
    }

    fn type_line(&mut self, s: &str) {
        self.input.extend(s.bytes());
        self.input.extend(b"\r\n");
    }
}

impl Channel for Loopback {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn bytes_available(&self) -> bool {
        !self.input.is_empty()
    }

    fn now_ms(&self) -> u32 {
        self.clock_ms
    }

    fn yield_now(&mut self) {
        self.clock_ms = self.clock_ms.wrapping_add(1);
    }
}

#[test]
fn banner_then_setup_dialog() {
    let config = ConsoleConfig {
        echo: false,
        ..Default::default()
    };
    let mut console = Console::with_config(Loopback::new(), config);

    console
        .print_header("Device Setup", 20, '|', '+', '-')
        .unwrap();

    console.channel_mut().type_line("42");
    let (brightness, ok) = console
        .get_u8("Brightness (0..100)?", 0, 100, 3, 1000, 50)
        .unwrap();
    assert!(ok);
    assert_eq!(brightness, 42);

    console.channel_mut().type_line("yes");
    let (enabled, ok) = console.get_yn("Enable radio?", 3, 1000, false).unwrap();
    assert!(ok);
    assert!(enabled);

    let transcript = String::from_utf8(std::mem::take(&mut console.channel_mut().output)).unwrap();
    assert!(transcript.starts_with(concat!(
        "+------------------+\r\n",
        "|   Device Setup   |\r\n",
        "+------------------+\r\n",
    )));
    assert!(transcript.contains("Brightness (0..100)?\r\n> \r\n"));
    assert!(transcript.contains("Enable radio?\r\n(y/n) > \r\n"));
}

#[test]
fn wrapped_status_report() {
    let mut console = Console::new(Loopback::new());
    let opts = RenderOptions {
        align: Align::Left,
        width: 16,
        margin_left: 1,
        margin_right: 1,
        ..Default::default()
    };
    console
        .print("link up, signal strong, queue empty", &opts)
        .unwrap();

    let transcript = String::from_utf8_lossy(&console.channel().output).into_owned();
    // avail = 12; every visual line is exactly 16 cells wide.
    for line in transcript.split("\r\n").filter(|l| !l.is_empty()) {
        assert_eq!(line.chars().count(), 16, "line {line:?}");
        assert!(line.starts_with('|') && line.ends_with('|'));
    }
}

#[test]
fn retries_then_default_under_timeout() {
    let config = ConsoleConfig {
        echo: false,
        ..Default::default()
    };
    let mut console = Console::with_config(Loopback::new(), config);

    // One malformed answer, then silence. Two attempts are allowed:
    // the first rejects the parse, the second times out.
    console.channel_mut().type_line("fast");
    let (value, ok) = console
        .get_int("Poll interval (ms)?", 10, 10_000, 2, 200, 1000)
        .unwrap();
    assert!(!ok);
    assert_eq!(value, 1000);

    let transcript = String::from_utf8_lossy(&console.channel().output).into_owned();
    assert_eq!(transcript.matches("! Invalid number").count(), 1);
    assert_eq!(transcript.matches("! Timeout.").count(), 1);
    assert!(console.channel().clock_ms >= 200);
}
