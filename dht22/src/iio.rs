use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Reading, Sensor};

/// Where the first IIO device shows up when the `dht11` driver is the only one loaded.
pub const DEFAULT_DEVICE: &str = "/sys/bus/iio/devices/iio:device0";

const TEMPERATURE_ATTR: &str = "in_temp_input";
const HUMIDITY_ATTR: &str = "in_humidityrelative_input";

/** A DHT22 exposed by the Linux `dht11` IIO driver.

The driver is normally bound through a device tree overlay, e.g. `dtoverlay=dht11,gpiopin=16`
on a Raspberry Pi. It publishes the temperature in millidegrees Celsius and the humidity in
thousandths of a percent; each read of either attribute may trigger a fresh measurement. */
#[derive(Debug, Clone)]
pub struct IioSensor {
    device: PathBuf,
}

impl IioSensor {
    pub fn new<P: Into<PathBuf>>(device: P) -> Self {
        IioSensor {
            device: device.into(),
        }
    }

    pub fn device(&self) -> &Path {
        &self.device
    }

    fn read_milli(&self, attr: &str) -> Result<f64, Error> {
        let path = self.device.join(attr);
        let contents = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        match contents.trim().parse::<i32>() {
            Ok(milli) => Ok(f64::from(milli) / 1000.0),
            Err(_) => Err(Error::Parse {
                path,
                value: contents,
            }),
        }
    }
}

impl Default for IioSensor {
    fn default() -> Self {
        IioSensor::new(DEFAULT_DEVICE)
    }
}

impl Sensor for IioSensor {
    fn read(&mut self) -> Result<Reading, Error> {
        let temperature_c = self.read_milli(TEMPERATURE_ATTR)?;
        let relative_humidity = self.read_milli(HUMIDITY_ATTR)?;

        Ok(Reading {
            temperature_c,
            relative_humidity,
        })
    }
}
