//! Seeded pseudo-random stream used by all star generation.
//!
//! Mulberry32: a 32-bit additive counter pushed through a multiply/xor-shift
//! avalanche. Every step is wrapping `u32` arithmetic, so a seed yields the same
//! stream on every platform.

/// Golden-ratio-ish increment added to the state on every draw.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, the width of the output range.
const U32_RANGE: f64 = 4_294_967_296.0;

/// Deterministic float stream from a 32-bit seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }

    /// Next value in `[min, min + span)`.
    #[inline]
    pub fn next_range(&mut self, min: f64, span: f64) -> f64 {
        min + self.next_f64() * span
    }
}
