/*! `comfort` derives two comfort metrics from a single temperature/humidity reading, such as
the ones produced by a DHT22 (AM2302) sensor:

* Heat index, the apparent ("feels like") temperature, via [`heat_index`].
* Dew point, the temperature at which the air would saturate, via [`dew_point`].

Every function is a pure `f64` computation with no internal state, so they can be called as
often as desired from any thread.

The two formulas are _unit specific_. [`heat_index`] takes and returns Fahrenheit while
[`dew_point`] takes and returns Celsius. Nothing in the signatures stops you from mixing them up,
so keep track of which scale a value is in. [`apparent_temperature`] and [`Metrics::compute`]
wrap the usual Celsius-in, Celsius-out pipeline.

Humidity is passed through exactly as the sensor reports it (a 0-100 percentage). No input
validation is done: out of range inputs yield physically meaningless numbers, and a humidity of
zero or less makes [`dew_point`] return a non-finite value rather than panic. */
#![no_std]
#![doc(html_root_url = "https://docs.rs/comfort/0.1.0")]

mod dew;
mod heat;
mod metrics;
mod units;

pub use dew::dew_point;
pub use heat::{heat_index, simple_heat_index, uses_regression, REGRESSION_THRESHOLD};
pub use metrics::{apparent_temperature, Metrics};
pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
