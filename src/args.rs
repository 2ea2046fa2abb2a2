//! Argument parsing for running from the command line

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Sensor ID byte, transmitted as the first two nibbles
    #[clap(short, long, default_value_t = 244)]
    pub id: u8,
    /// Channel switch position on the sensor
    #[clap(short, long, default_value_t = 1)]
    #[clap(value_parser = clap::value_parser!(u8).range(1..=3))]
    pub channel: u8,
    /// Temperature in degrees C, one decimal of precision
    #[clap(short, long, default_value_t = 26.3, value_parser = valid_temperature)]
    #[clap(allow_hyphen_values = true)]
    pub temperature: f32,
    /// Relative humidity in percent
    #[clap(short = 'u', long, default_value_t = 20)]
    #[clap(value_parser = clap::value_parser!(u8).range(..=100))]
    pub humidity: u8,
    /// Write samples to <STEM>.cu8 and <STEM>.cs8 instead of transmitting
    #[clap(short, long)]
    pub output: Option<String>,
    /// Carrier frequency in Hz
    #[clap(short, long, default_value_t = 433_968_400)]
    pub frequency: u64,
    /// TX VGA gain in dB
    #[clap(short = 'x', long, default_value_t = 0)]
    #[clap(value_parser = clap::value_parser!(u32).range(..=47))]
    pub gain: u32,
    /// SoapySDR device arguments for the transmitter
    #[clap(short, long, default_value = "driver=hackrf")]
    pub device: String,
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/// Match verbosity filter with tracing subscriber log levels
pub fn convert_filter(filter: log::LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    match filter {
        log::LevelFilter::Off => tracing_subscriber::filter::LevelFilter::OFF,
        log::LevelFilter::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        log::LevelFilter::Warn => tracing_subscriber::filter::LevelFilter::WARN,
        log::LevelFilter::Info => tracing_subscriber::filter::LevelFilter::INFO,
        log::LevelFilter::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
        log::LevelFilter::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
    }
}

fn valid_temperature(s: &str) -> Result<f32, String> {
    let temperature: f32 = s
        .parse()
        .map_err(|_| "not a valid temperature".to_string())?;
    if !(-204.7..=204.7).contains(&temperature) {
        return Err("temperature must be in [-204.7, 204.7]".to_string());
    }
    Ok(temperature)
}
