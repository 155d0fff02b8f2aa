use std::io::{self, Write};
use std::thread::sleep;
use std::time::{Duration, SystemTime};

use comfort::Metrics;
use dht22::{read_retry, RetryPolicy, Sensor};
use log::warn;
use serde::Serialize;

pub const FAILED_READ: &str = "Failed to retrieve data from DHT22 sensor";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Text,
    /// One JSON object per line. Failed cycles print nothing.
    Json,
}

#[derive(Serialize)]
struct Sample {
    timestamp: u64,
    temperature_c: f64,
    feels_like_c: f64,
    humidity: f64,
    dew_point_c: f64,
}

/// Polls a sensor and turns each good reading into [`Metrics`].
pub struct Sampler<S> {
    sensor: S,
    policy: RetryPolicy,
}

impl<S> Sampler<S>
where
    S: Sensor,
{
    pub fn new(sensor: S, policy: RetryPolicy) -> Self {
        Sampler { sensor, policy }
    }

    /// One poll. `None` means every attempt allowed by the retry policy failed.
    pub fn cycle(&mut self) -> Option<Metrics> {
        match read_retry(&mut self.sensor, &self.policy) {
            Ok(r) => Some(Metrics::compute(r.temperature_c, r.relative_humidity)),
            Err(e) => {
                warn!(
                    "giving up on this cycle after {} attempt(s): {}",
                    self.policy.retries.max(1),
                    e
                );
                None
            }
        }
    }

    /** Sample forever, or until `count` successful samples have been printed.

    Each success is followed by a pause of `interval`. A failed cycle is reported and polled
    again straight away, since the retry policy has already spent its own delays. Returns the
    number of successful samples. */
    pub fn run<W: Write>(
        &mut self,
        out: &mut W,
        format: Format,
        interval: Duration,
        count: Option<u32>,
    ) -> io::Result<u32> {
        let mut samples = 0;

        loop {
            let metrics = self.cycle();
            render(out, format, metrics.as_ref(), SystemTime::now())?;
            out.flush()?;

            if metrics.is_some() {
                samples += 1;

                if count.map_or(false, |n| samples >= n) {
                    return Ok(samples);
                }

                sleep(interval);
            }
        }
    }
}

pub fn render<W: Write>(
    out: &mut W,
    format: Format,
    metrics: Option<&Metrics>,
    now: SystemTime,
) -> io::Result<()> {
    match (format, metrics) {
        (Format::Text, Some(m)) => writeln!(
            out,
            "Temp={:.1}C  (Feels Like:{:.1}C)  Humidity={:.1}%  Dew Point={:.1}C",
            m.temperature_c, m.apparent_temperature_c, m.relative_humidity, m.dew_point_c
        ),
        (Format::Text, None) => writeln!(out, "{}", FAILED_READ),
        (Format::Json, Some(m)) => {
            let sample = Sample {
                timestamp: now
                    .duration_since(SystemTime::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0),
                temperature_c: m.temperature_c,
                feels_like_c: m.apparent_temperature_c,
                humidity: m.relative_humidity,
                dew_point_c: m.dew_point_c,
            };

            serde_json::to_writer(&mut *out, &sample)?;
            writeln!(out)
        }
        (Format::Json, None) => Ok(()),
    }
}
