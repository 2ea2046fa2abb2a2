//! Cyclic replay of a rendered sample buffer

/// Replays an immutable sample buffer into caller-supplied slices, keeping
/// its read position across calls.
///
/// This is the contract the transmit loop drives on every buffer refill, so
/// `fill` stays a plain synchronous copy: no allocation, no locking, no
/// I/O. The cursor is the only mutable state and belongs to whoever holds
/// the producer.
#[derive(Debug)]
pub struct StreamProducer<'a, T> {
    samples: &'a [T],
    cursor: usize,
}

impl<'a, T: Copy> StreamProducer<'a, T> {
    /// Start replaying `samples` from the beginning.
    ///
    /// Panics on an empty buffer. That can only happen if the encode and
    /// render stages were bypassed, so it is a contract violation rather
    /// than a runtime error.
    pub fn new(samples: &'a [T]) -> Self {
        assert!(!samples.is_empty(), "refusing to stream an empty buffer");
        Self { samples, cursor: 0 }
    }

    /// Copy the next `dest.len()` values into `dest`, wrapping around the
    /// buffer end as often as needed, and advance the cursor past them.
    pub fn fill(&mut self, dest: &mut [T]) {
        let len = self.samples.len();
        let mut written = 0;
        while written < dest.len() {
            let take = (dest.len() - written).min(len - self.cursor);
            dest[written..written + take]
                .copy_from_slice(&self.samples[self.cursor..self.cursor + take]);
            written += take;
            self.cursor = (self.cursor + take) % len;
        }
    }

    /// Current read offset into the buffer
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
