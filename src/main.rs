use clap::Parser;
use pulse_pusher::args::{convert_filter, Args};
use pulse_pusher::exfil;
use pulse_pusher::frame::{Frame, NibbleFrame, SensorReading};
use pulse_pusher::render::SampleBuffer;
use tracing::info;

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(convert_filter(args.verbose.log_level_filter()))
        .init();

    info!(
        "id: {}, channel: {}, temperature: {:.1}, humidity: {}",
        args.id, args.channel, args.temperature, args.humidity
    );

    // The whole transmission is rendered once up front, everything after
    // this point just replays the buffer
    let reading = SensorReading::new(args.id, args.channel, args.temperature, args.humidity);
    let frame = Frame::encode(&NibbleFrame::from_reading(&reading));
    let samples = SampleBuffer::render(&frame);

    if let Some(stem) = args.output {
        return exfil::write_iq_files(&stem, &samples);
    }

    run_tx(&args, &samples);
    Ok(())
}

#[cfg(feature = "radio")]
fn run_tx(args: &Args, samples: &SampleBuffer) {
    // The handler only pokes a channel, the transmit loop polls it between
    // buffer refills
    let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })
    .expect("failed to install the ctrl-c handler");
    pulse_pusher::radio::transmit(samples, &args.device, args.frequency, args.gain, &stop_rx)
        .expect("transmission failed");
}

#[cfg(not(feature = "radio"))]
fn run_tx(_args: &Args, _samples: &SampleBuffer) {
    tracing::error!("built without the radio feature, use --output to write sample files");
    std::process::exit(1);
}
