use std::thread::sleep;
use std::time::Duration;

use log::debug;

use crate::{Error, Reading, Sensor};

/// How hard [`read_retry`] tries before giving up.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts. Zero is treated as one.
    pub retries: u32,
    /// Pause between a failed attempt and the next one.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    // DHT22s need ~2 seconds between measurements.
    fn default() -> Self {
        RetryPolicy {
            retries: 15,
            delay: Duration::from_secs(2),
        }
    }
}

/// Poll `sensor` until it returns a reading, up to `policy.retries` times.
///
/// On exhaustion the error from the final attempt is returned. There is no pause after the
/// final attempt.
pub fn read_retry<S>(sensor: &mut S, policy: &RetryPolicy) -> Result<Reading, Error>
where
    S: Sensor + ?Sized,
{
    let attempts = policy.retries.max(1);
    let mut attempt = 1;

    loop {
        match sensor.read() {
            Ok(reading) => return Ok(reading),
            Err(e) if attempt >= attempts => return Err(e),
            Err(e) => {
                debug!("sensor read {}/{} failed: {}", attempt, attempts, e);
                sleep(policy.delay);
                attempt += 1;
            }
        }
    }
}
