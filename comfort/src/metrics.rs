use crate::{celsius_to_fahrenheit, dew_point, fahrenheit_to_celsius, heat_index};

/// Apparent ("feels like") temperature in Celsius.
///
/// Converts `temperature_c` to Fahrenheit, runs [`heat_index`] with the humidity untouched, and
/// converts the result back.
pub fn apparent_temperature(temperature_c: f64, relative_humidity: f64) -> f64 {
    fahrenheit_to_celsius(heat_index(
        celsius_to_fahrenheit(temperature_c),
        relative_humidity,
    ))
}

/// Everything derived from one sensor reading. All temperatures are Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub temperature_c: f64,
    /// Relative humidity as reported, 0-100.
    pub relative_humidity: f64,
    pub dew_point_c: f64,
    pub apparent_temperature_c: f64,
}

impl Metrics {
    pub fn compute(temperature_c: f64, relative_humidity: f64) -> Self {
        Metrics {
            temperature_c,
            relative_humidity,
            dew_point_c: dew_point(temperature_c, relative_humidity),
            apparent_temperature_c: apparent_temperature(temperature_c, relative_humidity),
        }
    }
}
