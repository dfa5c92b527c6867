//! SimulationConfig - every externally tunable parameter in one value
//!
//! Updates are validated as a whole before the engine applies any of them,
//! which is what makes `configure` atomic. Field names serialize in
//! camelCase so the JSON matches what the JS host persists.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::force_matrix::ForceMatrix;
use super::forces::DEFAULT_MAX_VELOCITY;
use super::palette::{parse_hex_color, DEFAULT_COLORS, MAX_COLORS};

pub const DEFAULT_WORLD_SIZE: f32 = 512.0;
pub const DEFAULT_CAPACITY: usize = 4096;
pub const DEFAULT_PARTICLE_COUNT: usize = 1024;
pub const DEFAULT_MIN_DIST: f32 = 8.0;
pub const DEFAULT_MAX_DIST: f32 = 32.0;
pub const MAX_RENDER_SIZE: u32 = 16;

const DEFAULT_FORCES: [[f32; 3]; 3] = [[1.0, -1.0, 1.0], [1.0, 1.0, 0.2], [-1.0, 1.0, -1.0]];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub min_dist: f32,
    pub max_dist: f32,
    /// Active colors, `#rgb` / `#rrggbb`. Index = color index.
    pub colors: Vec<String>,
    pub forces: ForceMatrix,
    /// Side of the square drawn per particle by `render_frame`.
    pub render_size: u32,
    pub max_velocity: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let mut forces = ForceMatrix::default();
        for (a, row) in DEFAULT_FORCES.iter().enumerate() {
            for (b, &value) in row.iter().enumerate() {
                forces.set(a, b, value);
            }
        }

        SimulationConfig {
            particle_count: DEFAULT_PARTICLE_COUNT,
            min_dist: DEFAULT_MIN_DIST,
            max_dist: DEFAULT_MAX_DIST,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            forces,
            render_size: 1,
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }
}

impl SimulationConfig {
    #[inline]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Check every invariant against a store of `capacity` particles in a
    /// world whose shorter side is `world_extent`.
    pub fn validate(&self, capacity: usize, world_extent: f32) -> Result<(), ConfigError> {
        if self.colors.is_empty() || self.colors.len() > MAX_COLORS {
            return Err(ConfigError::out_of_range(
                "colors",
                format!("{} colors, expected 1..={}", self.colors.len(), MAX_COLORS),
            ));
        }
        if let Some(bad) = self.colors.iter().find(|c| parse_hex_color(c).is_none()) {
            return Err(ConfigError::InvalidColor(bad.clone()));
        }

        if !self.min_dist.is_finite() || self.min_dist <= 0.0 {
            return Err(ConfigError::out_of_range(
                "minDist",
                format!("{} must be positive", self.min_dist),
            ));
        }
        if !self.max_dist.is_finite() || self.min_dist >= self.max_dist {
            return Err(ConfigError::out_of_range(
                "minDist",
                format!("{} must be less than maxDist {}", self.min_dist, self.max_dist),
            ));
        }
        if self.max_dist > world_extent {
            return Err(ConfigError::out_of_range(
                "maxDist",
                format!("{} exceeds the world extent {}", self.max_dist, world_extent),
            ));
        }

        if self.particle_count > capacity {
            return Err(ConfigError::CapacityExceeded {
                requested: self.particle_count,
                capacity,
            });
        }

        self.forces.validate()?;

        if !(1..=MAX_RENDER_SIZE).contains(&self.render_size) {
            return Err(ConfigError::out_of_range(
                "renderSize",
                format!("{}, expected 1..={}", self.render_size, MAX_RENDER_SIZE),
            ));
        }

        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(ConfigError::out_of_range(
                "maxVelocity",
                format!("{} must be positive", self.max_velocity),
            ));
        }

        Ok(())
    }

    /// ABGR pixel value per active color. Invalid entries map to opaque
    /// white; `validate` rejects those before the engine ever calls this.
    pub fn palette_abgr(&self) -> Vec<u32> {
        self.colors
            .iter()
            .map(|c| parse_hex_color(c).unwrap_or(0xFFFF_FFFF))
            .collect()
    }

    pub fn to_json(&self) -> String {
        // A struct of numbers, strings and nested Vecs always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a (possibly partial) settings blob; missing fields take their
    /// defaults. The result is not validated yet.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay the top-level fields of a JSON object onto `self`; fields
    /// the blob leaves out keep their current values. Not validated yet.
    pub fn merged_with_json(&self, json: &str) -> Result<Self, ConfigError> {
        let patch: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(patch) = patch else {
            return Err(ConfigError::Malformed(
                "settings update must be a JSON object".to_string(),
            ));
        };

        let mut merged = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(patch);
        }
        Ok(serde_json::from_value(merged)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(cfg: &SimulationConfig) -> Result<(), ConfigError> {
        cfg.validate(DEFAULT_CAPACITY, DEFAULT_WORLD_SIZE)
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = SimulationConfig::default();
        assert!(check(&cfg).is_ok());
        assert_eq!(cfg.color_count(), 3);
        assert_eq!(cfg.forces.get(1, 2), 0.2);
    }

    #[test]
    fn rejects_inverted_distances() {
        let cfg = SimulationConfig {
            min_dist: 10.0,
            max_dist: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            check(&cfg),
            Err(ConfigError::OutOfRange { field: "minDist", .. })
        ));
    }

    #[test]
    fn rejects_zero_and_nan_min_dist() {
        for min_dist in [0.0, -1.0, f32::NAN] {
            let cfg = SimulationConfig {
                min_dist,
                ..Default::default()
            };
            assert!(check(&cfg).is_err(), "{min_dist}");
        }
    }

    #[test]
    fn rejects_max_dist_larger_than_world() {
        let cfg = SimulationConfig {
            max_dist: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            check(&cfg),
            Err(ConfigError::OutOfRange { field: "maxDist", .. })
        ));
    }

    #[test]
    fn rejects_count_past_capacity() {
        let cfg = SimulationConfig {
            particle_count: DEFAULT_CAPACITY + 1,
            ..Default::default()
        };
        assert_eq!(
            check(&cfg),
            Err(ConfigError::CapacityExceeded {
                requested: DEFAULT_CAPACITY + 1,
                capacity: DEFAULT_CAPACITY,
            })
        );
    }

    #[test]
    fn rejects_bad_colors() {
        let mut cfg = SimulationConfig::default();
        cfg.colors.push("red".to_string());
        assert_eq!(check(&cfg), Err(ConfigError::InvalidColor("red".to_string())));

        cfg.colors.clear();
        assert!(check(&cfg).is_err());
    }

    #[test]
    fn rejects_render_size_and_velocity_out_of_range() {
        let cfg = SimulationConfig {
            render_size: 0,
            ..Default::default()
        };
        assert!(check(&cfg).is_err());

        let cfg = SimulationConfig {
            max_velocity: 0.0,
            ..Default::default()
        };
        assert!(check(&cfg).is_err());
    }

    #[test]
    fn json_uses_camel_case_and_fills_defaults() {
        let cfg = SimulationConfig::default();
        let json = cfg.to_json();
        assert!(json.contains("\"particleCount\":1024"));
        assert!(json.contains("\"maxDist\":32.0"));
        assert_eq!(SimulationConfig::from_json(&json).unwrap(), cfg);

        let partial = SimulationConfig::from_json(r#"{"particleCount":64}"#).unwrap();
        assert_eq!(partial.particle_count, 64);
        assert_eq!(partial.min_dist, DEFAULT_MIN_DIST);
    }

    #[test]
    fn merge_keeps_fields_the_blob_omits() {
        let mut current = SimulationConfig::default();
        current.min_dist = 4.0;
        current.forces.set(0, 1, 0.5);
        current.colors.push("#FFC312".to_string());

        let merged = current.merged_with_json(r#"{"particleCount":200}"#).unwrap();
        assert_eq!(merged.particle_count, 200);
        assert_eq!(merged.min_dist, 4.0);
        assert_eq!(merged.forces.get(0, 1), 0.5);
        assert_eq!(merged.colors, current.colors);

        assert!(matches!(
            current.merged_with_json("[1, 2]"),
            Err(ConfigError::Malformed(_))
        ));
        assert!(matches!(
            current.merged_with_json(r#"{"minDist":"far"}"#),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            SimulationConfig::from_json("{\"minDist\":"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
