use std::io::stdout;
use std::time::Duration;

use argh::FromArgs;
use cfg_if::cfg_if;
use dht22::RetryPolicy;
use eyre::Result;
use log::info;

mod sampler;
use sampler::{Format, Sampler};

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use dht22::IioSensor;
        type SensorImpl = IioSensor;

        fn open_sensor(device: &str) -> SensorImpl {
            IioSensor::new(device)
        }
    } else {
        use dht22::UnimplementedSensor;
        type SensorImpl = UnimplementedSensor;

        fn open_sensor(_device: &str) -> SensorImpl {
            UnimplementedSensor {}
        }
    }
}

#[derive(FromArgs)]
#[argh(description = "print temperature, humidity, feels-like temperature and dew point from a DHT22")]
struct InputArgs {
    #[argh(option, short = 'd', default = "default_device()", description = "IIO device directory of the sensor")]
    device: String,
    #[argh(option, short = 'i', default = "30", description = "seconds to wait after each sample")]
    interval: u64,
    #[argh(option, short = 'r', default = "15", description = "read attempts per sample")]
    retries: u32,
    #[argh(option, default = "2", description = "seconds between failed read attempts")]
    retry_delay: u64,
    #[argh(option, short = 'n', description = "stop after this many samples")]
    count: Option<u32>,
    #[argh(switch, description = "print JSON lines instead of text")]
    json: bool,
}

fn default_device() -> String {
    dht22::DEFAULT_DEVICE.into()
}

fn main() -> Result<()> {
    env_logger::init();
    let args: InputArgs = argh::from_env();

    let policy = RetryPolicy {
        retries: args.retries,
        delay: Duration::from_secs(args.retry_delay),
    };
    let format = if args.json { Format::Json } else { Format::Text };

    info!(
        "sampling {} every {}s ({} attempts, {}s apart)",
        args.device, args.interval, policy.retries, args.retry_delay
    );

    let mut sampler = Sampler::new(open_sensor(&args.device), policy);
    let stdout = stdout();
    let samples = sampler.run(
        &mut stdout.lock(),
        format,
        Duration::from_secs(args.interval),
        args.count,
    )?;

    info!("done after {} samples", samples);
    Ok(())
}
