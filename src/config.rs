//! Game tuning, loaded from the embedded `assets/forest.json`.

use crate::error::ConfigError;
use crate::model::{BadgeId, Metric};
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../assets/forest.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResources {
    pub trees: u32,
    pub coins: u32,
    pub oxygen: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRules {
    pub cost: u32,
    pub oxygen_gain: u32,
    pub score: u64,
    /// Extra score once the planting streak reaches `streak_bonus_from`.
    pub streak_bonus: u64,
    pub streak_bonus_from: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutRules {
    pub reward: u32,
    pub oxygen_loss: u32,
    pub score: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDef {
    pub id: BadgeId,
    pub name: String,
    pub icon: String,
    pub requirement: String,
    pub metric: Metric,
    pub threshold: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub start: StartResources,
    pub plant: PlantRules,
    pub cut: CutRules,
    pub trees_per_level: u32,
    pub badges: Vec<BadgeDef>,
}

fn default_log_level() -> String {
    "info".into()
}

fn badge(id: BadgeId, name: &str, icon: &str, requirement: &str, metric: Metric, threshold: u64) -> BadgeDef {
    BadgeDef {
        id,
        name: name.into(),
        icon: icon.into(),
        requirement: requirement.into(),
        metric,
        threshold,
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            start: StartResources { trees: 3, coins: 0, oxygen: 30 },
            plant: PlantRules {
                cost: 5,
                oxygen_gain: 8,
                score: 15,
                streak_bonus: 5,
                streak_bonus_from: 3,
            },
            cut: CutRules { reward: 10, oxygen_loss: 5, score: 5 },
            trees_per_level: 5,
            badges: vec![
                badge(BadgeId::JuniorGardener, "Junior Gardener", "🌱", "Plant 5 trees", Metric::Trees, 5),
                badge(BadgeId::ForestHero, "Forest Hero", "🌳", "Plant 10 trees", Metric::Trees, 10),
                badge(BadgeId::EarthSaver, "Earth Saver", "🌍", "Oxygen ≥ 100", Metric::Oxygen, 100),
                badge(BadgeId::CoinMaster, "Coin Master", "💰", "Earn 50 coins", Metric::Coins, 50),
                badge(BadgeId::EcoChampion, "Eco Champion", "⭐", "Reach level 3", Metric::Level, 3),
            ],
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse the embedded config, falling back to the built-in defaults.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{e}; using built-in defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plant.cost == 0 {
            return Err(ConfigError::Invalid("plant.cost must be positive".into()));
        }
        if self.trees_per_level == 0 {
            return Err(ConfigError::Invalid("trees_per_level must be positive".into()));
        }
        for (i, b) in self.badges.iter().enumerate() {
            if b.threshold == 0 {
                return Err(ConfigError::Invalid(format!("badge {:?} has a zero threshold", b.id)));
            }
            if self.badges[..i].iter().any(|other| other.id == b.id) {
                return Err(ConfigError::Invalid(format!("badge {:?} listed twice", b.id)));
            }
        }
        Ok(())
    }

    pub fn badge(&self, id: BadgeId) -> Option<&BadgeDef> {
        self.badges.iter().find(|b| b.id == id)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let cfg = GameConfig::from_json(EMBEDDED).unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn zero_plant_cost_is_rejected() {
        let mut cfg = GameConfig::default();
        cfg.plant.cost = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn duplicate_badges_are_rejected() {
        let mut cfg = GameConfig::default();
        let first = cfg.badges[0].clone();
        cfg.badges.push(first);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let mut cfg = GameConfig::default();
        assert_eq!(cfg.log_level(), log::LevelFilter::Info);
        cfg.log_level = "debug".into();
        assert_eq!(cfg.log_level(), log::LevelFilter::Debug);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.log_level(), log::LevelFilter::Info);
    }
}
