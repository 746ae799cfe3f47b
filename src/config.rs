// config.rs - Per-scene tunables
//
// Every field has a default, so the host can pass a partial JSON document
// (or nothing at all) to Stage::new.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const VIEWER_MODEL_URL: &str =
    "https://raw.githubusercontent.com/andrsydor/laptop_model/main/scene.gltf";
/// Upper bound on the particle cloud size
pub const MAX_PARTICLES: usize = 100_000;

pub const PLANET_MODEL_URL: &str =
    "https://raw.githubusercontent.com/andrsydor/planet_model/main/scene.gltf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Model fetched once at start by the viewer scene
    pub viewer_model_url: String,
    /// Model fetched on every placement in the planets scene
    pub planet_model_url: String,

    /// Uniform scale of freshly spawned gems
    pub gem_scale: f32,
    /// Uniform scale of placed planet models
    pub planet_scale: f32,
    /// Per-frame y rotation of placed objects (radians)
    pub placed_spin: f32,

    /// Number of points in the shapes scene particle cloud
    pub particle_count: usize,

    /// Directional light intensity for the planets scene
    pub light_intensity: f32,
    pub light_intensity_step: f32,
    pub light_intensity_max: f32,

    /// Initial model light intensity for the viewer scene
    pub model_light_intensity: f32,

    /// RNG seed (xorshift32, must be non-zero)
    pub seed: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewer_model_url: VIEWER_MODEL_URL.to_string(),
            planet_model_url: PLANET_MODEL_URL.to_string(),
            gem_scale: 1.0,
            planet_scale: 0.01,
            placed_spin: 0.02,
            particle_count: 150,
            light_intensity: 3.0,
            light_intensity_step: 0.5,
            light_intensity_max: 5.0,
            model_light_intensity: 5.0,
            seed: 0xDEADBEEF,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        if config.seed == 0 {
            config.seed = Self::default().seed;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scenes cannot run with
    pub fn validate(&self) -> Result<()> {
        positive("gem_scale", self.gem_scale)?;
        positive("planet_scale", self.planet_scale)?;
        finite("placed_spin", self.placed_spin)?;
        non_negative("light_intensity", self.light_intensity)?;
        non_negative("light_intensity_step", self.light_intensity_step)?;
        non_negative("light_intensity_max", self.light_intensity_max)?;
        non_negative("model_light_intensity", self.model_light_intensity)?;
        if self.particle_count > MAX_PARTICLES {
            return Err(invalid("particle_count", format!("{} exceeds {MAX_PARTICLES}", self.particle_count)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> Error {
    Error::InvalidConfig { field, reason }
}

fn finite(field: &'static str, v: f32) -> Result<()> {
    if v.is_finite() { Ok(()) } else { Err(invalid(field, format!("{v} is not finite"))) }
}

fn non_negative(field: &'static str, v: f32) -> Result<()> {
    finite(field, v)?;
    if v >= 0.0 { Ok(()) } else { Err(invalid(field, format!("{v} is negative"))) }
}

fn positive(field: &'static str, v: f32) -> Result<()> {
    finite(field, v)?;
    if v > 0.0 { Ok(()) } else { Err(invalid(field, format!("{v} must be positive"))) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(r#"{ "gem_scale": 0.75 }"#).unwrap();
        assert_eq!(config.gem_scale, 0.75);
        assert_eq!(config.planet_model_url, PLANET_MODEL_URL);
        assert_eq!(config.particle_count, 150);
    }

    #[test]
    fn zero_seed_is_replaced() {
        let config = SceneConfig::from_json(r#"{ "seed": 0 }"#).unwrap();
        assert_ne!(config.seed, 0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for json in [
            r#"{ "light_intensity_max": -1.0 }"#,
            r#"{ "light_intensity_step": -0.5 }"#,
            r#"{ "gem_scale": 0.0 }"#,
            r#"{ "particle_count": 1000000000 }"#,
        ] {
            let err = SceneConfig::from_json(json).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { .. }), "{json}");
        }
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SceneConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
