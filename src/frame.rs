//! Bit-level framing for the 433 MHz temperature/humidity sensor protocol

/// Nibbles in one payload
pub const FRAME_NIBBLES: usize = 9;
/// Times the payload is repeated on the air
pub const FRAME_REPEATS: usize = 12;
/// Slots in the sync gap
pub const SYNC_SLOTS: usize = 9;

/// One sensor reading, fixed at startup from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReading {
    id: u8,
    channel: u8,
    temp_tenths: i16,
    humidity: u8,
}

impl SensorReading {
    /// Build a reading from validated configuration values.
    ///
    /// Temperature is truncated toward zero to tenths of a degree. Range
    /// checks live in the argument parser, not here.
    pub fn new(id: u8, channel: u8, temperature_c: f32, humidity: u8) -> Self {
        Self {
            id,
            channel,
            temp_tenths: (temperature_c * 10.0) as i16,
            humidity,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn temp_tenths(&self) -> i16 {
        self.temp_tenths
    }

    pub fn humidity(&self) -> u8 {
        self.humidity
    }
}

/// The nine protocol nibbles derived from a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NibbleFrame([u8; FRAME_NIBBLES]);

impl NibbleFrame {
    /// Pack a reading into its wire nibbles.
    ///
    /// Layout: id high/low, 7 + channel, the low 12 bits of the tenths
    /// temperature high-to-low, a constant 0xF marker, humidity high/low.
    /// Negative temperatures rely on the arithmetic shift of `i16`, so the
    /// three temperature nibbles carry the two's-complement bits.
    pub fn from_reading(reading: &SensorReading) -> Self {
        let temp = reading.temp_tenths;
        Self([
            (reading.id >> 4) & 0x0f,
            reading.id & 0x0f,
            7 + reading.channel,
            ((temp >> 8) & 0x0f) as u8,
            ((temp >> 4) & 0x0f) as u8,
            (temp & 0x0f) as u8,
            0x0f,
            (reading.humidity >> 4) & 0x0f,
            reading.humidity & 0x0f,
        ])
    }

    pub fn nibbles(&self) -> &[u8; FRAME_NIBBLES] {
        &self.0
    }
}

/// One full transmission: 12 repetitions of sync + payload, flattened to
/// pulse slots. Slots are 0/1 carrier states at the symbol rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(Vec<u8>);

impl Frame {
    /// Encode the pulse-width bitstream for a nibble frame.
    ///
    /// Each repetition is the sync gap followed by the 36 payload bits,
    /// MSB first within each nibble. Total over any nibble input.
    pub fn encode(nibbles: &NibbleFrame) -> Self {
        // Worst case is every bit a one (5 slots each)
        let mut slots = Vec::with_capacity(FRAME_REPEATS * (SYNC_SLOTS + FRAME_NIBBLES * 4 * 5));
        for _ in 0..FRAME_REPEATS {
            push_sync(&mut slots);
            for &nibble in nibbles.nibbles() {
                let mut mask = 0x08u8;
                for _ in 0..4 {
                    if nibble & mask != 0 {
                        push_one(&mut slots);
                    } else {
                        push_zero(&mut slots);
                    }
                    mask >>= 1;
                }
            }
        }
        Frame(slots)
    }

    pub fn slots(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Receivers find frame starts by the wide idle gap
fn push_sync(slots: &mut Vec<u8>) {
    slots.push(1);
    slots.extend_from_slice(&[0; SYNC_SLOTS - 1]);
}

// Pulse width carries the bit value, not polarity
fn push_zero(slots: &mut Vec<u8>) {
    slots.extend_from_slice(&[1, 0, 0]);
}

fn push_one(slots: &mut Vec<u8>) {
    slots.extend_from_slice(&[1, 0, 0, 0, 0]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_reading() -> SensorReading {
        SensorReading::new(244, 1, 26.3, 20)
    }

    #[test]
    fn test_reference_nibbles() {
        let nibbles = NibbleFrame::from_reading(&reference_reading());
        assert_eq!(nibbles.nibbles(), &[15, 4, 8, 1, 0, 7, 15, 1, 4]);
    }

    #[test]
    fn test_temperature_truncates_toward_zero() {
        assert_eq!(SensorReading::new(0, 1, 26.3, 0).temp_tenths(), 263);
        assert_eq!(SensorReading::new(0, 1, -26.3, 0).temp_tenths(), -263);
        assert_eq!(SensorReading::new(0, 1, 0.09, 0).temp_tenths(), 0);
    }

    #[test]
    fn test_negative_temperature_nibbles() {
        // -50 tenths is 0xFCE in the low 12 bits of an i16
        let nibbles = NibbleFrame::from_reading(&SensorReading::new(0, 1, -5.0, 0));
        assert_eq!(&nibbles.nibbles()[3..6], &[15, 12, 14]);
    }

    #[test]
    fn test_channel_nibble() {
        for (channel, expected) in [(1u8, 8u8), (2, 9), (3, 10)] {
            let nibbles = NibbleFrame::from_reading(&SensorReading::new(0, channel, 0.0, 0));
            assert_eq!(nibbles.nibbles()[2], expected);
        }
    }

    #[test]
    fn test_marker_nibble_fixed() {
        let nibbles = NibbleFrame::from_reading(&SensorReading::new(0xab, 3, -100.5, 99));
        assert_eq!(nibbles.nibbles()[6], 0x0f);
    }

    #[test]
    fn test_sync_pattern() {
        let frame = Frame::encode(&NibbleFrame::from_reading(&reference_reading()));
        assert_eq!(&frame.slots()[..SYNC_SLOTS], &[1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_bit_symbol_widths() {
        // All-zero nibbles: every bit is 3 slots
        let zeros = Frame::encode(&NibbleFrame::from_reading(&SensorReading::new(0, 1, 0.0, 0)));
        // but nibble 2 is 8 and nibble 6 is 15, contributing 1 and 4 one-bits
        let ones = 1 + 4;
        let zero_bits = FRAME_NIBBLES * 4 - ones;
        assert_eq!(
            zeros.len(),
            FRAME_REPEATS * (SYNC_SLOTS + ones * 5 + zero_bits * 3)
        );
        // Each pulse starts with a single high slot
        let high_slots: usize = zeros.slots().iter().map(|&s| s as usize).sum();
        assert_eq!(high_slots, FRAME_REPEATS * (1 + FRAME_NIBBLES * 4));
    }

    #[test]
    fn test_reference_frame_length() {
        // 16 one-bits and 20 zero-bits per repetition for the reference reading
        let frame = Frame::encode(&NibbleFrame::from_reading(&reference_reading()));
        assert_eq!(frame.len(), FRAME_REPEATS * (SYNC_SLOTS + 16 * 5 + 20 * 3));
        assert_eq!(frame.len(), 1788);
    }

    #[test]
    fn test_repetitions_identical() {
        let frame = Frame::encode(&NibbleFrame::from_reading(&reference_reading()));
        let rep_len = frame.len() / FRAME_REPEATS;
        let first = &frame.slots()[..rep_len];
        for rep in frame.slots().chunks_exact(rep_len) {
            assert_eq!(rep, first);
        }
    }

    #[test]
    fn test_encode_deterministic() {
        let nibbles = NibbleFrame::from_reading(&reference_reading());
        assert_eq!(Frame::encode(&nibbles), Frame::encode(&nibbles));
    }
}
