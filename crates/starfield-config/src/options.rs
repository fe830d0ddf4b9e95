//! Partial runtime overrides for [`StarfieldConfig`].

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::StarfieldConfig;

/// A partial set of starfield parameters. Only `Some` fields are applied.
///
/// Deserializable so a host can forward RON or JSON fragments such as
/// `(star_density: Some(400), color: Some("#ffeecc"))` without naming every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldOptions {
    pub enabled: Option<bool>,
    pub star_density: Option<u32>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub twinkle_speed: Option<f64>,
    pub drift_speed: Option<f64>,
    /// Hex color string; malformed values are ignored.
    pub color: Option<String>,
    pub seed: Option<u32>,
}

/// What a [`StarfieldConfig::apply`] call invalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigChange {
    /// Star count or seed changed: the fixed-mode star array must be rebuilt.
    pub regenerate: bool,
    /// Per-tile output changed: any cached tile stars are stale.
    pub tiles_invalidated: bool,
}

impl StarfieldConfig {
    /// Apply the present fields of `options` and report what they invalidated.
    pub fn apply(&mut self, options: &StarfieldOptions) -> ConfigChange {
        let mut change = ConfigChange::default();

        if let Some(enabled) = options.enabled {
            self.enabled = enabled;
        }
        if let Some(density) = options.star_density
            && density != self.star_density
        {
            self.star_density = density;
            change.regenerate = true;
            change.tiles_invalidated = true;
        }
        if let Some(seed) = options.seed
            && seed != self.seed
        {
            self.seed = seed;
            change.regenerate = true;
            change.tiles_invalidated = true;
        }
        if let Some(min_size) = options.min_size
            && min_size != self.min_size
        {
            self.min_size = min_size;
            change.tiles_invalidated = true;
        }
        if let Some(max_size) = options.max_size
            && max_size != self.max_size
        {
            self.max_size = max_size;
            change.tiles_invalidated = true;
        }
        if let Some(speed) = options.twinkle_speed {
            self.twinkle_speed = speed;
        }
        if let Some(speed) = options.drift_speed {
            self.drift_speed = speed;
        }
        if let Some(ref hex) = options.color {
            self.set_color(hex);
        }

        change
    }

    /// Best-effort color update; returns whether `hex` parsed.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Rgb::from_hex(hex) {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(err) => {
                log::debug!("Ignoring color update: {err}");
                false
            }
        }
    }
}
