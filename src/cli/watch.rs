//! Channel watching.
//!
//! Polls a text channel until its contents change, for the copy/paste
//! workflow where the ciphertext arrives after the command starts.

use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::channel::TextChannel;
use crate::error::Result;

/// Wait for the channel to hold new, non-blank content.
///
/// The contents at call time are the baseline. Returns the first differing
/// non-blank contents, or `None` once `timeout` elapses. A `None` timeout
/// waits forever.
///
/// # Errors
///
/// Returns any error the channel reports while reading.
pub fn wait_for_change(
    channel: &impl TextChannel,
    interval: Duration,
    timeout: Option<Duration>,
) -> Result<Option<String>> {
    let baseline = channel.read()?;
    let started = Instant::now();
    debug!(?interval, ?timeout, "waiting for channel change");

    loop {
        if let Some(limit) = timeout {
            let elapsed = started.elapsed();
            if elapsed >= limit {
                debug!("channel watch timed out");
                return Ok(None);
            }
            thread::sleep(interval.min(limit - elapsed));
        } else {
            thread::sleep(interval);
        }

        let current = channel.read()?;
        if current != baseline && !current.trim().is_empty() {
            debug!(len = current.len(), "channel changed");
            return Ok(Some(current));
        }
    }
}
