//! Game configuration resource.
//!
//! Manages the scene's tunable constants loaded from an INI configuration
//! file. Provides built-in defaults for safe startup and methods to load
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! speed = 250
//! world_width = 800
//! world_height = 720
//!
//! [joystick]
//! radius = 50
//! dead_zone = 0.1
//!
//! [proximity]
//! pickup_radius = 30
//! encounter_radius = 40
//! dialogue_radius = 10
//!
//! [dialogue]
//! cooldown = 5.0
//! bubble_duration = 3.0
//!
//! [resonance]
//! target = 3
//! prompt_min = 1
//! prompt_max = 5
//! cost = 1
//! reward = 3
//! flash_duration = 0.5
//!
//! [depth]
//! bush_thresholds = 228,324,453,675
//! front_thresholds = 261,357,485,698
//!
//! [scene]
//! spores = 20
//! twinkles = 50
//! seed = 0
//! layout_path = ./assets/scene.json
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::{info, warn};
use smallvec::SmallVec;
use std::path::PathBuf;

/// Default safe values for startup.
const DEFAULT_SPEED: f32 = 250.0;
const DEFAULT_WORLD_WIDTH: f32 = 800.0;
const DEFAULT_WORLD_HEIGHT: f32 = 720.0;
const DEFAULT_JOYSTICK_RADIUS: f32 = 50.0;
const DEFAULT_JOYSTICK_DEAD_ZONE: f32 = 0.1;
const DEFAULT_PICKUP_RADIUS: f32 = 30.0;
const DEFAULT_ENCOUNTER_RADIUS: f32 = 40.0;
const DEFAULT_DIALOGUE_RADIUS: f32 = 10.0;
const DEFAULT_DIALOGUE_COOLDOWN: f32 = 5.0;
const DEFAULT_BUBBLE_DURATION: f32 = 3.0;
const DEFAULT_RESONANCE_TARGET: i64 = 3;
const DEFAULT_RESONANCE_PROMPT_MIN: i64 = 1;
const DEFAULT_RESONANCE_PROMPT_MAX: i64 = 5;
const DEFAULT_RESONANCE_COST: u32 = 1;
const DEFAULT_RESONANCE_REWARD: u32 = 3;
const DEFAULT_FLASH_DURATION: f32 = 0.5;
const DEFAULT_BUSH_THRESHOLDS: [f32; 4] = [228.0, 324.0, 453.0, 675.0];
const DEFAULT_FRONT_THRESHOLDS: [f32; 4] = [261.0, 357.0, 485.0, 698.0];
const DEFAULT_SPORES: u32 = 20;
const DEFAULT_TWINKLES: u32 = 50;
const DEFAULT_LAYOUT_PATH: &str = "./assets/scene.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Threshold band storage; four bands in the default scene, inline.
pub type ThresholdBands = SmallVec<[f32; 4]>;

/// Scene configuration resource.
///
/// Every numeric constant the interaction core uses lives here, so scene
/// variants (different resonance targets, different bush layouts) are a
/// config edit rather than a code change.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Actor speed in world units per second.
    pub move_speed: f32,
    /// World width in units; movement is clamped to it.
    pub world_width: f32,
    /// World height in units; movement is clamped to it.
    pub world_height: f32,
    /// Virtual joystick radius in screen units.
    pub joystick_radius: f32,
    /// Minimum per-axis joystick magnitude that counts as movement.
    pub joystick_dead_zone: f32,
    /// Spore pickup distance threshold.
    pub pickup_radius: f32,
    /// Amanita encounter distance threshold.
    pub encounter_radius: f32,
    /// Dialogue trigger distance threshold.
    pub dialogue_radius: f32,
    /// Seconds a dialogue trigger stays silent after firing.
    pub dialogue_cooldown: f32,
    /// Seconds a speech bubble stays up.
    pub bubble_duration: f32,
    /// The tuning value that resolves the resonance successfully.
    pub resonance_target: i64,
    /// Lower bound shown in the tuning prompt.
    pub resonance_prompt_min: i64,
    /// Upper bound shown in the tuning prompt.
    pub resonance_prompt_max: i64,
    /// Spores paid up front to start a resonance exchange.
    pub resonance_cost: u32,
    /// Spores credited on a successful resonance.
    pub resonance_reward: u32,
    /// Seconds the failure tint pulse stays on the camera.
    pub resonance_flash_duration: f32,
    /// Lower edges of the bush bands, strictly increasing.
    pub bush_thresholds: ThresholdBands,
    /// Lower edges of the front-bush bands, strictly increasing and
    /// pairwise above `bush_thresholds`.
    pub front_thresholds: ThresholdBands,
    /// Number of spores scattered at scene start.
    pub spore_count: u32,
    /// Number of decorative twinkles.
    pub twinkle_count: u32,
    /// RNG seed for spawn placement; 0 means unseeded.
    pub seed: u64,
    /// Path to the scene layout JSON.
    pub layout_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            move_speed: DEFAULT_SPEED,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            joystick_radius: DEFAULT_JOYSTICK_RADIUS,
            joystick_dead_zone: DEFAULT_JOYSTICK_DEAD_ZONE,
            pickup_radius: DEFAULT_PICKUP_RADIUS,
            encounter_radius: DEFAULT_ENCOUNTER_RADIUS,
            dialogue_radius: DEFAULT_DIALOGUE_RADIUS,
            dialogue_cooldown: DEFAULT_DIALOGUE_COOLDOWN,
            bubble_duration: DEFAULT_BUBBLE_DURATION,
            resonance_target: DEFAULT_RESONANCE_TARGET,
            resonance_prompt_min: DEFAULT_RESONANCE_PROMPT_MIN,
            resonance_prompt_max: DEFAULT_RESONANCE_PROMPT_MAX,
            resonance_cost: DEFAULT_RESONANCE_COST,
            resonance_reward: DEFAULT_RESONANCE_REWARD,
            resonance_flash_duration: DEFAULT_FLASH_DURATION,
            bush_thresholds: SmallVec::from_slice(&DEFAULT_BUSH_THRESHOLDS),
            front_thresholds: SmallVec::from_slice(&DEFAULT_FRONT_THRESHOLDS),
            spore_count: DEFAULT_SPORES,
            twinkle_count: DEFAULT_TWINKLES,
            seed: 0,
            layout_path: PathBuf::from(DEFAULT_LAYOUT_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: speed={}, world={}x{}, resonance target={} ({}-{}), {} bands",
            self.move_speed,
            self.world_width,
            self.world_height,
            self.resonance_target,
            self.resonance_prompt_min,
            self.resonance_prompt_max,
            self.bush_thresholds.len()
        );

        Ok(())
    }

    /// Load configuration from an INI string. Used by tests and embedding
    /// hosts that manage their own files.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [movement] section
        if let Some(speed) = config.getfloat("movement", "speed").ok().flatten() {
            self.move_speed = speed as f32;
        }
        if let Some(width) = config.getfloat("movement", "world_width").ok().flatten() {
            self.world_width = width as f32;
        }
        if let Some(height) = config.getfloat("movement", "world_height").ok().flatten() {
            self.world_height = height as f32;
        }

        // [joystick] section
        if let Some(radius) = config.getfloat("joystick", "radius").ok().flatten() {
            if radius > 0.0 {
                self.joystick_radius = radius as f32;
            } else {
                warn!("Ignoring non-positive joystick radius {}", radius);
            }
        }
        if let Some(dead_zone) = config.getfloat("joystick", "dead_zone").ok().flatten() {
            self.joystick_dead_zone = dead_zone as f32;
        }

        // [proximity] section
        if let Some(radius) = config.getfloat("proximity", "pickup_radius").ok().flatten() {
            self.pickup_radius = radius as f32;
        }
        if let Some(radius) = config
            .getfloat("proximity", "encounter_radius")
            .ok()
            .flatten()
        {
            self.encounter_radius = radius as f32;
        }
        if let Some(radius) = config
            .getfloat("proximity", "dialogue_radius")
            .ok()
            .flatten()
        {
            self.dialogue_radius = radius as f32;
        }

        // [dialogue] section
        if let Some(cooldown) = config.getfloat("dialogue", "cooldown").ok().flatten() {
            self.dialogue_cooldown = cooldown as f32;
        }
        if let Some(duration) = config.getfloat("dialogue", "bubble_duration").ok().flatten() {
            self.bubble_duration = duration as f32;
        }

        // [resonance] section
        if let Some(target) = config.getint("resonance", "target").ok().flatten() {
            self.resonance_target = target;
        }
        if let Some(min) = config.getint("resonance", "prompt_min").ok().flatten() {
            self.resonance_prompt_min = min;
        }
        if let Some(max) = config.getint("resonance", "prompt_max").ok().flatten() {
            self.resonance_prompt_max = max;
        }
        if let Some(cost) = config.getuint("resonance", "cost").ok().flatten() {
            self.resonance_cost = cost as u32;
        }
        if let Some(reward) = config.getuint("resonance", "reward").ok().flatten() {
            self.resonance_reward = reward as u32;
        }
        if let Some(duration) = config
            .getfloat("resonance", "flash_duration")
            .ok()
            .flatten()
        {
            self.resonance_flash_duration = duration as f32;
        }

        // [depth] section: the bands are only replaced as a validated pair.
        let bush = config
            .get("depth", "bush_thresholds")
            .and_then(|s| parse_threshold_list(&s));
        let front = config
            .get("depth", "front_thresholds")
            .and_then(|s| parse_threshold_list(&s));
        match (bush, front) {
            (Some(bush), Some(front)) => {
                if bands_are_valid(&bush, &front) {
                    self.bush_thresholds = bush;
                    self.front_thresholds = front;
                } else {
                    warn!("Ignoring malformed depth bands in config; keeping defaults");
                }
            }
            (None, None) => {}
            _ => warn!("Depth bands must be configured together; keeping defaults"),
        }

        // [scene] section
        if let Some(count) = config.getuint("scene", "spores").ok().flatten() {
            self.spore_count = count as u32;
        }
        if let Some(count) = config.getuint("scene", "twinkles").ok().flatten() {
            self.twinkle_count = count as u32;
        }
        if let Some(seed) = config.getuint("scene", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(path) = config.get("scene", "layout_path") {
            self.layout_path = PathBuf::from(path);
        }
    }
}

/// Parse a comma-separated list of numbers ("228,324,453,675").
fn parse_threshold_list(text: &str) -> Option<ThresholdBands> {
    let mut out = ThresholdBands::new();
    for part in text.split(',') {
        out.push(part.trim().parse::<f32>().ok()?);
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Bands are valid when both sequences are strictly increasing, pairwise
/// ordered (bush below front), and of equal length.
fn bands_are_valid(bush: &[f32], front: &[f32]) -> bool {
    if bush.len() != front.len() {
        return false;
    }
    let increasing = |s: &[f32]| s.windows(2).all(|w| w[0] < w[1]);
    increasing(bush) && increasing(front) && bush.iter().zip(front).all(|(b, f)| b < f)
}
