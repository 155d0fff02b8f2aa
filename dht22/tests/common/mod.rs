#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use dht22::*;

/// A directory laid out like an IIO device, filled with whatever attribute contents a test
/// wants the "driver" to report.
pub struct FakeDevice {
    pub path: PathBuf,
}

impl FakeDevice {
    pub fn new(name: &str) -> Self {
        let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
            .join("dht22")
            .join(name);

        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();

        FakeDevice { path }
    }

    pub fn set(&self, attr: &str, contents: &str) -> &Self {
        fs::write(self.path.join(attr), contents).unwrap();
        self
    }

    pub fn sensor(&self) -> IioSensor {
        IioSensor::new(&self.path)
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        pub type SensorImpl = IioSensor;
    } else {
        pub type SensorImpl = UnimplementedSensor;
    }
}

pub fn setup() -> SensorImpl {
    cfg_if::cfg_if! {
        if #[cfg(any(target_os = "linux", target_os = "android"))] {
            IioSensor::new(std::env::var("DHT22_DEVICE").unwrap_or_else(|_| DEFAULT_DEVICE.into()))
        } else {
            UnimplementedSensor {}
        }
    }
}
