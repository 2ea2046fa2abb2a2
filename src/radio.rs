//! SoapySDR transmit path: device lifecycle plus the buffer refill loop

use crossbeam_channel::Receiver;
use num_complex::Complex;
use soapysdr::Direction::Tx;
use tracing::{debug, info};

use crate::render::SampleBuffer;
use crate::stream::StreamProducer;
use crate::SAMPLE_RATE;

// Widest HackRF baseband filter below the sample rate
const BASEBAND_FILTER_BW: f64 = 1.75e6;
const WRITE_TIMEOUT_US: i64 = 1_000_000;

/// Transmit the signed sample encoding on a loop until `stop` fires.
///
/// Owns the whole device lifecycle: open, configure, stream, tear down.
/// The core pipeline never sees the device; it only hands over the sample
/// buffer and the producer keeps the replay position between refills.
pub fn transmit(
    samples: &SampleBuffer,
    device_args: &str,
    frequency: u64,
    gain: u32,
    stop: &Receiver<()>,
) -> Result<(), soapysdr::Error> {
    let device = soapysdr::Device::new(device_args)?;
    device.set_sample_rate(Tx, 0, SAMPLE_RATE as f64)?;
    device.set_bandwidth(Tx, 0, BASEBAND_FILTER_BW)?;
    device.set_frequency(Tx, 0, frequency as f64, ())?;
    device.set_gain(Tx, 0, gain as f64)?;

    let mut stream = device.tx_stream::<Complex<i8>>(&[0])?;
    let mtu = stream.mtu()?;
    debug!("tx stream mtu is {} samples", mtu);

    let mut producer = StreamProducer::new(samples.signed());
    // Scratch buffers sized once, refilled on every pass
    let mut flat = vec![0i8; mtu * 2];
    let mut pairs = vec![Complex::new(0i8, 0); mtu];

    stream.activate(None)?;
    info!(
        "transmitting at {} Hz with {} dB tx gain, ctrl-c to stop",
        frequency, gain
    );
    while stop.try_recv().is_err() {
        producer.fill(&mut flat);
        for (pair, iq) in pairs.iter_mut().zip(flat.chunks_exact(2)) {
            *pair = Complex::new(iq[0], iq[1]);
        }
        stream.write_all(&[&pairs[..]], None, false, WRITE_TIMEOUT_US)?;
    }
    info!("stopping transmission");
    stream.deactivate(None)?;
    Ok(())
}
