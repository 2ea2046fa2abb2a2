//! This module is responsible for exfilling rendered samples to raw IQ files

use std::{fs::File, io::Write};

use byte_slice_cast::AsByteSlice;
use tracing::info;

use crate::render::SampleBuffer;

/// Dump both sample encodings next to each other as `<stem>.cu8` and
/// `<stem>.cs8`.
///
/// Bare interleaved I/Q bytes in transmission order, no header. The files
/// replay through any SDR tool that understands the HackRF byte formats.
pub fn write_iq_files(stem: &str, samples: &SampleBuffer) -> std::io::Result<()> {
    let unsigned_path = format!("{}.cu8", stem);
    info!("writing {}", unsigned_path);
    File::create(&unsigned_path)?.write_all(samples.unsigned())?;

    let signed_path = format!("{}.cs8", stem);
    info!("writing {}", signed_path);
    File::create(&signed_path)?.write_all(samples.signed().as_byte_slice())?;
    Ok(())
}
