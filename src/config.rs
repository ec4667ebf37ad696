use log::LevelFilter;
use serde::Deserialize;
use std::{env, fs::read_to_string, path::Path, time::Duration};

/// The simulator version extracted from the Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable key to load the config from
const CONFIG_ENV_KEY: &str = "LB_SIM_CONFIG_JSON";

/// Attempts to load the config from the environment and then from
/// the config.json file in the working directory. Failures are
/// reported to stderr and the defaults are used instead
pub fn load_config() -> Option<Config> {
    // Attempt to load the config from the env
    if let Ok(env) = env::var(CONFIG_ENV_KEY) {
        let config: Config = match serde_json::from_str(&env) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("Failed to load env config (Using default): {:?}", err);
                return None;
            }
        };
        return Some(config.validated());
    }

    // Attempt to load the config from disk
    let file = Path::new("config.json");
    if !file.exists() {
        return None;
    }

    let data = match read_to_string(file) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using defaults): {:?}", err);
            return None;
        }
    };

    let config: Config = match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to load config file (Using default): {:?}", err);
            return None;
        }
    };

    Some(config.validated())
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the leaderboard API, endpoint paths are
    /// appended to this
    pub base_url: String,
    pub logging: LevelFilter,
    /// Optional timeout applied to every request, requests wait
    /// forever when this is not set
    pub request_timeout_secs: Option<u64>,
    pub user_ids: RangeConfig,
    pub scores: RangeConfig,
    pub pause: PauseConfig,
    /// Number of top player entries to log each iteration
    pub top_display: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/leaderboard".to_string(),
            logging: LevelFilter::Info,
            request_timeout_secs: None,
            user_ids: RangeConfig::USER_IDS,
            scores: RangeConfig::SCORES,
            pause: PauseConfig::default(),
            top_display: 3,
        }
    }
}

impl Config {
    /// Replaces any invalid ranges with their defaults
    fn validated(mut self) -> Self {
        if !self.user_ids.is_valid() {
            eprintln!("Invalid user_ids range {:?} (Using default)", self.user_ids);
            self.user_ids = RangeConfig::USER_IDS;
        }
        if !self.scores.is_valid() {
            eprintln!("Invalid scores range {:?} (Using default)", self.scores);
            self.scores = RangeConfig::SCORES;
        }
        if !self.pause.is_valid() {
            eprintln!("Invalid pause range {:?} (Using default)", self.pause);
            self.pause = PauseConfig::default();
        }
        self
    }

    /// Request timeout as a duration if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Inclusive range of integers to draw values from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeConfig {
    pub min: u32,
    pub max: u32,
}

impl RangeConfig {
    /// Range that user IDs are drawn from
    pub const USER_IDS: RangeConfig = RangeConfig {
        min: 1,
        max: 1_000_000,
    };

    /// Range that submitted scores are drawn from
    pub const SCORES: RangeConfig = RangeConfig {
        min: 100,
        max: 10_000,
    };

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Half-open range in milliseconds for the pause between iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PauseConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 2000,
        }
    }
}

impl PauseConfig {
    pub fn is_valid(&self) -> bool {
        self.min_ms < self.max_ms
    }
}
