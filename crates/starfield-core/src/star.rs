//! Star descriptors and the twinkle function shared by both render modes.

/// Lowest base opacity a generated star can have.
pub const MIN_BASE_OPACITY: f64 = 0.3;
/// Width of the base opacity range, giving `[0.3, 0.8)`.
pub const BASE_OPACITY_SPAN: f64 = 0.5;
/// Slowest twinkle rate.
pub const MIN_TWINKLE_RATE: f64 = 0.5;
/// Width of the twinkle rate range, giving `[0.5, 2.0)`.
pub const TWINKLE_RATE_SPAN: f64 = 1.5;

/// A single star. A plain value: two stars with equal fields are the same star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// World x in world-space mode, screen x in fixed mode.
    pub x: f64,
    /// World y in world-space mode, screen y in fixed mode.
    pub y: f64,
    /// Draw radius.
    pub size: f64,
    /// Peak opacity, in `[0.3, 0.8)`.
    pub base_opacity: f64,
    /// Multiplier on the phase, in `[0.5, 2.0)`.
    pub twinkle_rate: f64,
    /// Phase offset in world mode, running phase in fixed mode. Starts in `[0, 2π)`.
    pub phase: f64,
}

/// A fixed-mode star with its per-frame drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftingStar {
    pub star: Star,
    pub dx: f64,
    pub dy: f64,
}

/// Brightness factor in `[0, 1]` for a phase angle.
#[inline]
pub fn twinkle(phase: f64) -> f64 {
    0.5 + 0.5 * phase.sin()
}

/// Draw opacity for a star: base opacity scaled by the twinkle factor, clamped to `[0, 1]`.
#[inline]
pub fn star_opacity(base_opacity: f64, phase: f64) -> f64 {
    (base_opacity * twinkle(phase)).clamp(0.0, 1.0)
}

/// Star size from a unit draw. An inverted range collapses to `min_size`.
#[inline]
pub(crate) fn size_in_range(unit: f64, min_size: f64, max_size: f64) -> f64 {
    min_size + unit * (max_size - min_size).max(0.0)
}
