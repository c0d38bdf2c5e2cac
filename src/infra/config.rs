//! Venue configuration loading from TOML files
//!
//! The simulator selects a config via --config; a missing or unreadable
//! file falls back to the built-in reference venue with a warning.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct MuseumSection {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExhibitEntry {
    pub name: String,
    /// Admission cost in whole currency units; 0 marks a free exhibit
    pub cost: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatronEntry {
    pub name: String,
    pub spending_money: u64,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LotterySection {
    /// Fixed seed for reproducible draws; thread RNG when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub museum: MuseumSection,
    #[serde(default)]
    pub exhibits: Vec<ExhibitEntry>,
    #[serde(default)]
    pub patrons: Vec<PatronEntry>,
    #[serde(default)]
    pub lottery: LotterySection,
}

/// Main configuration struct used throughout the simulator
#[derive(Debug, Clone)]
pub struct Config {
    museum_name: String,
    exhibits: Vec<ExhibitEntry>,
    patrons: Vec<PatronEntry>,
    lottery_seed: Option<u64>,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            museum_name: "Denver Museum of Nature and Science".to_string(),
            exhibits: vec![
                ExhibitEntry { name: "Gems and Minerals".to_string(), cost: 0 },
                ExhibitEntry { name: "Dead Sea Scrolls".to_string(), cost: 10 },
                ExhibitEntry { name: "IMAX".to_string(), cost: 15 },
            ],
            patrons: vec![
                PatronEntry {
                    name: "Bob".to_string(),
                    spending_money: 0,
                    interests: vec![
                        "Gems and Minerals".to_string(),
                        "Dead Sea Scrolls".to_string(),
                    ],
                },
                PatronEntry {
                    name: "Sally".to_string(),
                    spending_money: 20,
                    interests: vec!["Dead Sea Scrolls".to_string()],
                },
                PatronEntry {
                    name: "Johnny".to_string(),
                    spending_money: 5,
                    interests: vec!["Dead Sea Scrolls".to_string()],
                },
            ],
            lottery_seed: None,
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            museum_name: toml_config.museum.name,
            exhibits: toml_config.exhibits,
            patrons: toml_config.patrons,
            lottery_seed: toml_config.lottery.seed,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    // Getters for all config fields
    pub fn museum_name(&self) -> &str {
        &self.museum_name
    }

    pub fn exhibits(&self) -> &[ExhibitEntry] {
        &self.exhibits
    }

    pub fn patrons(&self) -> &[PatronEntry] {
        &self.patrons
    }

    pub fn lottery_seed(&self) -> Option<u64> {
        self.lottery_seed
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
