//! Screen-space renderer: a persistent set of stars drifting across the canvas.

use std::f64::consts::TAU;

use starfield_config::StarfieldConfig;

use crate::rng::Mulberry32;
use crate::star::{
    BASE_OPACITY_SPAN, DriftingStar, MIN_BASE_OPACITY, MIN_TWINKLE_RATE, Star, TWINKLE_RATE_SPAN,
    size_in_range, star_opacity,
};
use crate::surface::{DrawSurface, fill_circle};

/// Owns `star_density` stars in screen coordinates, each with its own phase
/// and drift. Stars leaving the canvas re-enter on the opposite edge.
#[derive(Debug, Default)]
pub struct FixedFieldRenderer {
    stars: Vec<DriftingStar>,
    width: f64,
    height: f64,
    initialized: bool,
}

impl FixedFieldRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn stars(&self) -> &[DriftingStar] {
        &self.stars
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Replace the star array with a fresh one for a `width` x `height` canvas.
    ///
    /// Draw order per star: x, y, size, phase, twinkle rate, base opacity, dx, dy.
    pub fn initialize(&mut self, config: &StarfieldConfig, width: f64, height: f64) {
        let mut rng = Mulberry32::new(config.seed);
        let drift = config.drift_speed;

        self.stars = (0..config.star_density)
            .map(|_| {
                let x = rng.next_f64() * width;
                let y = rng.next_f64() * height;
                let size = size_in_range(rng.next_f64(), config.min_size, config.max_size);
                let phase = rng.next_f64() * TAU;
                let twinkle_rate = rng.next_range(MIN_TWINKLE_RATE, TWINKLE_RATE_SPAN);
                let base_opacity = rng.next_range(MIN_BASE_OPACITY, BASE_OPACITY_SPAN);
                let dx = (rng.next_f64() - 0.5) * drift;
                let dy = (rng.next_f64() - 0.5) * drift;
                DriftingStar {
                    star: Star {
                        x,
                        y,
                        size,
                        base_opacity,
                        twinkle_rate,
                        phase,
                    },
                    dx,
                    dy,
                }
            })
            .collect();
        self.width = width;
        self.height = height;
        self.initialized = true;

        log::debug!(
            "Fixed starfield initialized: {} stars on {width}x{height}",
            self.stars.len()
        );
    }

    /// Adapt to a new canvas size.
    ///
    /// With a previous nonzero size, star positions are scaled so the layout is
    /// preserved. Otherwise the field is generated from scratch.
    pub fn resize(&mut self, config: &StarfieldConfig, width: f64, height: f64) {
        if !self.initialized || self.width <= 0.0 || self.height <= 0.0 {
            self.initialize(config, width, height);
            return;
        }

        let scale_x = width / self.width;
        let scale_y = height / self.height;
        for drifting in &mut self.stars {
            drifting.star.x *= scale_x;
            drifting.star.y *= scale_y;
        }
        self.width = width;
        self.height = height;
    }

    /// Rebuild with the stored dimensions after the star count or seed changed.
    /// Does nothing before the first [`initialize`](Self::initialize).
    pub fn reinitialize(&mut self, config: &StarfieldConfig) {
        if self.initialized {
            self.initialize(config, self.width, self.height);
        }
    }

    /// Advance one frame and draw. No-op while disabled or uninitialized.
    ///
    /// Returns the number of stars drawn.
    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &StarfieldConfig,
    ) -> usize {
        if !config.enabled || !self.initialized {
            return 0;
        }

        let (width, height) = (self.width, self.height);
        for drifting in &mut self.stars {
            let star = &mut drifting.star;
            star.phase += config.twinkle_speed * star.twinkle_rate;
            star.x = wrap(star.x + drifting.dx, width);
            star.y = wrap(star.y + drifting.dy, height);

            let opacity = star_opacity(star.base_opacity, star.phase);
            fill_circle(surface, star.x, star.y, star.size, config.color, opacity);
        }
        self.stars.len()
    }
}

/// Past either edge, jump to the opposite one.
fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
