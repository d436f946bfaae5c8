// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::decision::DecisionPolicy;
use crate::types::{Direction, HeadType, StartResponse, TailType};

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub decision: DecisionConfig,
    pub debug: DebugConfig,
}

/// How the snake looks and what it says on /start
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub name: String,
    pub color: String,
    pub head_url: String,
    pub head_type: HeadType,
    pub tail_type: TailType,
    pub start_taunt: String,
}

impl AppearanceConfig {
    /// Builds the /start reply
    pub fn start_response(&self) -> StartResponse {
        StartResponse {
            name: self.name.clone(),
            color: self.color.clone(),
            head_url: self.head_url.clone(),
            head_type: self.head_type,
            tail_type: self.tail_type,
            taunt: self.start_taunt.clone(),
        }
    }
}

/// Move selection constants
#[derive(Debug, Deserialize, Clone)]
pub struct DecisionConfig {
    pub attack_mode: bool,
    pub fallback_move: Direction,
    pub move_taunt: String,
    pub attack_taunt: String,
}

impl DecisionConfig {
    pub fn policy(&self) -> DecisionPolicy {
        DecisionPolicy {
            attack_mode: self.attack_mode,
            fallback: self.fallback_move,
        }
    }
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                name: "radiant6, I love snacks".to_string(),
                color: "#25da3d".to_string(),
                head_url: "https://i.redd.it/6auki8gjsgw01.jpg".to_string(),
                head_type: HeadType::Dead,
                tail_type: TailType::Pixel,
                start_taunt: "I can find food, I think!".to_string(),
            },
            decision: DecisionConfig {
                attack_mode: true,
                fallback_move: Direction::Down,
                move_taunt: "I'm hungry".to_string(),
                attack_taunt: "Attack Mode!".to_string(),
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!(
                "Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
