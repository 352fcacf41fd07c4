//! Retry/timeout/validate state machine.
//!
//! One generic loop drives every typed getter:
//! `Prompting → AwaitingLine → Validating → {Accepted | Retrying |
//! Exhausted}`. Rejections are reported on the stream and recovered
//! locally; the caller always gets a value, plus a flag saying whether it
//! was parsed or is the fallback default.

use std::io;

use tracing::{debug, trace};

use super::Console;
use crate::channel::Channel;
use crate::error::Error;

/// Run one validated prompt.
///
/// `retry_count == 0` means unbounded attempts, with one exception: a
/// timeout under unbounded retries terminates immediately with the
/// default. Timeout is the only cancellation mechanism, so "retry
/// forever" must still be escapable when a timeout is configured. With
/// `retry_count == 0` *and* `timeout_ms == 0`, only a successful parse
/// exits the loop - the default is never silently returned.
pub(crate) fn run<C, T, V>(
    console: &mut Console<C>,
    prompt: &str,
    marker: &str,
    default: T,
    retry_count: u16,
    timeout_ms: u32,
    mut validate: V,
) -> io::Result<(T, bool)>
where
    C: Channel,
    V: FnMut(&str) -> Result<T, Error>,
{
    if !prompt.is_empty() {
        console.write_line(prompt)?;
    }

    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        console.write_line(marker)?;

        let outcome = match console.read_line_timeout(timeout_ms)? {
            Some(line) => validate(&line),
            None => Err(Error::Timeout),
        };

        match outcome {
            Ok(value) => {
                trace!(attempt, "prompt accepted");
                return Ok((value, true));
            }
            Err(err) => {
                let timed_out = matches!(err, Error::Timeout);
                console.write_line(&err.to_string())?;
                debug!(%err, attempt, "prompt attempt rejected");

                let exhausted = if retry_count == 0 {
                    timed_out
                } else {
                    attempt >= u32::from(retry_count)
                };
                if exhausted {
                    debug!(attempt, "prompt exhausted, falling back to default");
                    return Ok((default, false));
                }
            }
        }
    }
}
