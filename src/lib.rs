pub mod args;
pub mod exfil;
pub mod frame;
#[cfg(feature = "radio")]
pub mod radio;
pub mod render;
pub mod stream;

/// IQ sample rate the buffers are rendered at
pub const SAMPLE_RATE: usize = 2_000_000;
/// Pulse slots per second on the air
pub const SYMBOL_RATE: usize = 2_000;
/// IQ sample pairs emitted per pulse slot
pub const OVERSAMPLE: usize = SAMPLE_RATE / SYMBOL_RATE;
