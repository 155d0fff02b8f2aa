const B: f64 = 17.625;
const C: f64 = 243.04;

/** Compute the dew point, in Celsius, from an air temperature in Celsius and a relative
humidity given as a 0-100 percentage.

Uses the Magnus coefficients `b = 17.625`, `c = 243.04` with
`gamma = ln(rh / 100) + b * t / (c + t)`, and returns `c * gamma / b - gamma`. Note this closed
form differs from the textbook `c * gamma / (b - gamma)` and reads a few degrees low.

A humidity of zero or below has no logarithm, and the result is non-finite (`-inf` or `NaN`). */
pub fn dew_point(temperature_c: f64, relative_humidity: f64) -> f64 {
    let gamma = libm::log(relative_humidity / 100.0) + (B * temperature_c) / (C + temperature_c);

    (C * gamma) / B - gamma
}
