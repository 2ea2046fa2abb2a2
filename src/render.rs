//! Expansion of pulse slots into oversampled IQ sample buffers

use crate::frame::Frame;
use crate::OVERSAMPLE;

// Carrier-on / carrier-off / quadrature levels for the two numeric
// conventions downstream consumers expect
const CU8_HIGH: u8 = 255;
const CU8_LOW: u8 = 127;
const CU8_MID: u8 = 127;
const CS8_HIGH: i8 = 127;
const CS8_LOW: i8 = 0;
const CS8_MID: i8 = 0;

/// The rendered transmission, held in both byte conventions.
///
/// Both buffers are interleaved I,Q in transmission order and carry the
/// same modulation pattern: the unsigned-offset form feeds file dumps, the
/// signed form feeds the transmit stream. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    cu8: Vec<u8>,
    cs8: Vec<i8>,
}

impl SampleBuffer {
    /// Render a frame at the fixed 2 MS/s / 2 kBd oversampling ratio.
    pub fn render(frame: &Frame) -> Self {
        Self::render_with_oversample(frame, OVERSAMPLE)
    }

    /// Render with an explicit samples-per-slot ratio.
    pub fn render_with_oversample(frame: &Frame, oversample: usize) -> Self {
        let cu8 = expand(frame.slots(), oversample, CU8_HIGH, CU8_LOW, CU8_MID);
        let cs8 = expand(frame.slots(), oversample, CS8_HIGH, CS8_LOW, CS8_MID);
        assert_eq!(cu8.len(), frame.len() * oversample * 2);
        assert_eq!(cu8.len(), cs8.len());
        Self { cu8, cs8 }
    }

    /// Unsigned-offset interleaved samples (`.cu8` convention)
    pub fn unsigned(&self) -> &[u8] {
        &self.cu8
    }

    /// Signed interleaved samples (`.cs8` convention)
    pub fn signed(&self) -> &[i8] {
        &self.cs8
    }

    /// Interleaved I and Q values per encoding
    pub fn len(&self) -> usize {
        self.cu8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cu8.is_empty()
    }
}

// Purely combinational: each slot becomes `oversample` identical IQ pairs
fn expand<T: Copy>(slots: &[u8], oversample: usize, high: T, low: T, mid: T) -> Vec<T> {
    let mut out = Vec::with_capacity(slots.len() * oversample * 2);
    for &slot in slots {
        let level = if slot != 0 { high } else { low };
        for _ in 0..oversample {
            out.push(level);
            out.push(mid);
        }
    }
    out
}
