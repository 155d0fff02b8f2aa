use dht22::*;

mod common;

#[test]
#[ignore = "needs a DHT22 bound to the dht11 IIO driver"]
fn test_sample() {
    let mut sensor = common::setup();

    #[cfg(any(target_os = "linux", target_os = "android"))]
    sample(&mut sensor);
    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    unimplemented(&mut sensor);
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn sample<S: Sensor>(sensor: &mut S) {
    let reading = read_retry(sensor, &RetryPolicy::default()).unwrap();

    assert!(reading.relative_humidity > 0.0 && reading.relative_humidity <= 100.0);
    assert!(reading.temperature_c > -40.0 && reading.temperature_c < 80.0);
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn unimplemented<S: Sensor>(sensor: &mut S) {
    assert!(matches!(sensor.read(), Err(Error::Unsupported)));
}
