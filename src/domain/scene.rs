use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Earth gravity (m/s²)
pub const GRAVITY: f64 = 9.807;
/// Metres to canvas pixels
pub const PIXELS_PER_METER: f64 = 100.0;
/// Fixed frame step (seconds), one physics step per display refresh
pub const TIME_STEP: f64 = 1.0 / 60.0;
/// Velocity kept on a vertical boundary bounce
pub const RESTITUTION: f64 = 0.8;
/// Streak count at which an overlapping pair merges
pub const MERGE_THRESHOLD: u32 = 5;
/// Delay between a merge and the split that undoes it
pub const SPLIT_DELAY_MS: f64 = 3000.0;

pub const DEFAULT_SEED: u32 = 12345;

/// How a colliding pair is keyed in the streak counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairKeyMode {
    /// `(active, other)` in scan order. The same pair can build two streaks,
    /// one per direction.
    #[default]
    Ordered,
    /// `(min, max)`; both directions share one streak.
    Canonical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f64,
    pub pixels_per_meter: f64,
    pub time_step: f64,
    pub restitution: f64,
    pub merge_threshold: u32,
    pub split_delay_ms: f64,
    pub pair_key_mode: PairKeyMode,
    /// Seed for the initial horizontal velocities left unspecified in the scene
    pub seed: u32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            pixels_per_meter: PIXELS_PER_METER,
            time_step: TIME_STEP,
            restitution: RESTITUTION,
            merge_threshold: MERGE_THRESHOLD,
            split_delay_ms: SPLIT_DELAY_MS,
            pair_key_mode: PairKeyMode::Ordered,
            seed: DEFAULT_SEED,
        }
    }
}

/// One body as written in a scene file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub mass: f64,
    /// Initial horizontal speed (pixels/frame). Random in [-2, 2) when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vx: Option<f64>,
}

impl BodySpec {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, mass: f64) -> Self {
        Self { x, y, radius, color, mass, vx: None }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub physics: PhysicsSettings,
    pub bodies: Vec<BodySpec>,
}

impl Default for SceneConfig {
    /// The five built-in balls
    fn default() -> Self {
        Self {
            physics: PhysicsSettings::default(),
            bodies: vec![
                BodySpec::new(100.0, 100.0, 30.0, Rgb::from_packed(0x1c3240), 0.2),
                BodySpec::new(200.0, 150.0, 40.0, Rgb::from_packed(0x378c4b), 0.3),
                BodySpec::new(300.0, 200.0, 20.0, Rgb::from_packed(0x50bf61), 0.1),
                BodySpec::new(400.0, 250.0, 50.0, Rgb::from_packed(0xf2ca50), 0.45),
                BodySpec::new(500.0, 300.0, 35.0, Rgb::from_packed(0xf23839), 0.25),
            ],
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let scene: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let p = &self.physics;
        if p.merge_threshold == 0 {
            return Err("merge_threshold must be at least 1".to_string());
        }
        if !(p.pixels_per_meter > 0.0) || !(p.time_step > 0.0) {
            return Err("pixels_per_meter and time_step must be positive".to_string());
        }
        if !p.split_delay_ms.is_finite() || p.split_delay_ms < 0.0 {
            return Err("split_delay_ms must be a non-negative number".to_string());
        }

        for (i, body) in self.bodies.iter().enumerate() {
            if !(body.radius > 0.0) {
                return Err(format!("body {}: radius must be positive", i));
            }
            if !(body.mass > 0.0) {
                return Err(format!("body {}: mass must be positive", i));
            }
            if !body.x.is_finite() || !body.y.is_finite() {
                return Err(format!("body {}: position must be finite", i));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_five_balls() {
        let scene = SceneConfig::default();
        assert_eq!(scene.bodies.len(), 5);
        assert_eq!(scene.bodies[3].radius, 50.0);
        assert_eq!(scene.bodies[3].color.to_hex(), "#f2ca50");
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r##"{
            "physics": { "merge_threshold": 3, "pair_key_mode": "canonical" },
            "bodies": [ { "x": 10, "y": 20, "radius": 5, "color": "#ff0000", "mass": 1.5, "vx": 0.5 } ]
        }"##;
        let scene = SceneConfig::from_json(json).unwrap();
        assert_eq!(scene.physics.merge_threshold, 3);
        assert_eq!(scene.physics.pair_key_mode, PairKeyMode::Canonical);
        assert_eq!(scene.physics.gravity, GRAVITY);
        assert_eq!(scene.bodies[0].color, Rgb::new(255, 0, 0));
        assert_eq!(scene.bodies[0].vx, Some(0.5));
    }

    #[test]
    fn rejects_bad_bodies() {
        let bad_radius = r##"{ "bodies": [ { "x": 0, "y": 0, "radius": 0, "color": "#000000", "mass": 1 } ] }"##;
        assert!(SceneConfig::from_json(bad_radius).is_err());

        let bad_mass = r##"{ "bodies": [ { "x": 0, "y": 0, "radius": 1, "color": "#000000", "mass": -1 } ] }"##;
        assert!(SceneConfig::from_json(bad_mass).is_err());

        let bad_color = r##"{ "bodies": [ { "x": 0, "y": 0, "radius": 1, "color": "black", "mass": 1 } ] }"##;
        assert!(SceneConfig::from_json(bad_color).is_err());

        assert!(SceneConfig::from_json(r#"{ "physics": { "merge_threshold": 0 } }"#).is_err());
    }

    #[test]
    fn json_round_trip_keeps_scene() {
        let scene = SceneConfig::default();
        let back = SceneConfig::from_json(&scene.to_json().unwrap()).unwrap();
        assert_eq!(back, scene);
    }
}
