//! Configuration file support for Caltrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/caltrack/config.toml`.

use crate::suggestion::ExerciseRate;
use crate::{Biometrics, Error, Gender, Goals, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub goals: GoalsConfig,

    #[serde(default)]
    pub exercise: ExerciseConfig,
}

/// Biometrics a new session starts with
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_age")]
    pub age: u8,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_height_cm")]
    pub height_cm: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            age: default_age(),
            gender: Gender::default(),
            weight_kg: default_weight_kg(),
            height_cm: default_height_cm(),
        }
    }
}

/// Daily goals a new session starts with
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_calories")]
    pub calories: u32,

    #[serde(default = "default_carbs_g")]
    pub carbs_g: u32,

    #[serde(default = "default_protein_g")]
    pub protein_g: u32,

    #[serde(default = "default_fat_g")]
    pub fat_g: u32,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            carbs_g: default_carbs_g(),
            protein_g: default_protein_g(),
            fat_g: default_fat_g(),
        }
    }
}

/// Exercise suggestion parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseConfig {
    #[serde(default = "default_kcal_per_block")]
    pub kcal_per_block: f64,

    #[serde(default = "default_minutes_per_block")]
    pub minutes_per_block: u32,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            kcal_per_block: default_kcal_per_block(),
            minutes_per_block: default_minutes_per_block(),
        }
    }
}

// Default value functions
fn default_age() -> u8 {
    25
}

fn default_weight_kg() -> f64 {
    70.0
}

fn default_height_cm() -> f64 {
    170.0
}

fn default_calories() -> u32 {
    2000
}

fn default_carbs_g() -> u32 {
    250
}

fn default_protein_g() -> u32 {
    50
}

fn default_fat_g() -> u32 {
    70
}

fn default_kcal_per_block() -> f64 {
    500.0
}

fn default_minutes_per_block() -> u32 {
    10
}

impl ProfileConfig {
    pub fn biometrics(&self) -> Biometrics {
        Biometrics {
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
        }
    }
}

impl GoalsConfig {
    pub fn goals(&self) -> Goals {
        Goals {
            calories: self.calories,
            carbs_g: self.carbs_g,
            protein_g: self.protein_g,
            fat_g: self.fat_g,
        }
    }
}

impl ExerciseConfig {
    pub fn rate(&self) -> ExerciseRate {
        ExerciseRate {
            kcal_per_block: self.kcal_per_block,
            minutes_per_block: self.minutes_per_block,
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.exercise.kcal_per_block.is_finite() && self.exercise.kcal_per_block > 0.0) {
            return Err(Error::Config(format!(
                "exercise.kcal_per_block must be positive, got {}",
                self.exercise.kcal_per_block
            )));
        }
        self.profile.biometrics().validate()?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("caltrack").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.goals.calories, 2000);
        assert_eq!(config.goals.carbs_g, 250);
        assert_eq!(config.goals.protein_g, 50);
        assert_eq!(config.goals.fat_g, 70);
        assert_eq!(config.profile.age, 25);
        assert_eq!(config.profile.gender, Gender::Male);
        assert_eq!(config.exercise.rate(), ExerciseRate::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[goals]
calories = 1800

[profile]
gender = "female"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.goals.calories, 1800);
        assert_eq!(config.goals.protein_g, 50); // default
        assert_eq!(config.profile.gender, Gender::Female);
        assert_eq!(config.profile.height_cm, 170.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.goals.fat_g = 60;
        config.exercise.minutes_per_block = 12;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.goals.fat_g, 60);
        assert_eq!(loaded.exercise.minutes_per_block, 12);
    }

    #[test]
    fn test_zero_kcal_block_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[exercise]\nkcal_per_block = 0.0\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[goals\ncalories = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
