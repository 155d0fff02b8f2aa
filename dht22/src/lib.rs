/*! `dht22` reads DHT22 (AM2302) temperature and humidity sensors.

The single-wire protocol spoken by these sensors has tight timing requirements, so rather than
bit-banging a GPIO from userspace this crate relies on the Linux `dht11` IIO driver (which
handles DHT11, DHT22 and AM2302 parts) and reads its sysfs attributes. See [`IioSensor`].

Reads from these sensors fail routinely: the kernel gives up on a garbled or late frame and
returns `EIO` or `ETIMEDOUT`. [`read_retry`] polls a [`Sensor`] until it gets a reading or runs
out of attempts. */

use std::path::PathBuf;

mod iio;
mod retry;

pub use iio::{IioSensor, DEFAULT_DEVICE};
pub use retry::{read_retry, RetryPolicy};

/// A successful sensor poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature_c: f64,
    /// Relative humidity, 0-100.
    pub relative_humidity: f64,
}

#[derive(Debug, thiserror::Error)]
/// Reasons a sensor poll can fail.
pub enum Error {
    /// Reading a sysfs attribute failed. Timeouts and checksum failures show up here.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A sysfs attribute did not contain an integer.
    #[error("unexpected contents in {}: {value:?}", .path.display())]
    Parse { path: PathBuf, value: String },
    /// No sensor backend exists for this platform.
    #[error("sensor access is not supported on this platform")]
    Unsupported,
}

/// Something that can be polled for a temperature/humidity pair.
pub trait Sensor {
    fn read(&mut self) -> Result<Reading, Error>;
}

impl<S> Sensor for &mut S
where
    S: Sensor + ?Sized,
{
    fn read(&mut self) -> Result<Reading, Error> {
        (**self).read()
    }
}

/// A [`Sensor`] for platforms without IIO. Every read fails with [`Error::Unsupported`].
pub struct UnimplementedSensor;

impl Sensor for UnimplementedSensor {
    fn read(&mut self) -> Result<Reading, Error> {
        Err(Error::Unsupported)
    }
}
