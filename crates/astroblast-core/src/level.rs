//! Per-level tuning, looked up once per level transition.

use serde::{Deserialize, Serialize};

use crate::enums::MusicTrack;
use crate::error::{ConfigError, Result};

/// Tuning for one difficulty tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: u32,
    /// Seconds between regular enemy spawn attempts.
    pub spawn_interval_secs: f32,
    /// Seconds between enemy shots (and boss volleys).
    pub shoot_interval_secs: f32,
    /// Descent speed of regular enemies and the boss (px/s).
    pub enemy_speed: f32,
    pub enemy_projectile_speed: f32,
    /// Survive this long to complete a non-boss tier.
    pub level_duration_secs: f32,
    pub player_shoot_cooldown_secs: f32,
    pub is_boss_level: bool,
    /// Probability that a spawned enemy is `Big`.
    #[serde(default)]
    pub big_enemy_chance: f64,
    #[serde(default)]
    pub music: MusicTrack,
}

/// Lookup table from level number to tuning.
///
/// Always holds a level-1 entry; build it with [`LevelTable::new`] or
/// [`LevelTable::from_json`] so that holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

/// On-disk shape of a level table, before validation.
#[derive(Deserialize)]
struct RawLevelTable {
    levels: Vec<LevelConfig>,
}

impl LevelTable {
    /// Build a table, rejecting invalid or ambiguous entries.
    pub fn new(mut levels: Vec<LevelConfig>) -> Result<Self> {
        levels.sort_by_key(|l| l.level);
        for pair in levels.windows(2) {
            if pair[0].level == pair[1].level {
                return Err(ConfigError::DuplicateLevel(pair[0].level));
            }
        }
        for config in &levels {
            config.validate()?;
        }
        if !levels.iter().any(|l| l.level == 1) {
            return Err(ConfigError::MissingBaseLevel);
        }
        // Advancing steps one level at a time, so every level up to the last must exist.
        for pair in levels.windows(2) {
            if pair[1].level != pair[0].level + 1 {
                return Err(ConfigError::LevelGap {
                    after: pair[0].level,
                    next: pair[1].level,
                });
            }
        }
        Ok(Self { levels })
    }

    /// Parse a `{"levels": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawLevelTable = serde_json::from_str(json)?;
        Self::new(raw.levels)
    }

    /// Tuning for `level`; unknown levels get level 1's tuning.
    pub fn for_level(&self, level: u32) -> &LevelConfig {
        self.get(level).unwrap_or_else(|| self.base())
    }

    /// Exact lookup with no fallback.
    pub fn get(&self, level: u32) -> Option<&LevelConfig> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// Highest defined level; advancing past it ends the campaign.
    pub fn max_level(&self) -> u32 {
        self.levels.last().map(|l| l.level).unwrap_or(1)
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    fn base(&self) -> &LevelConfig {
        // `new` guarantees a level-1 entry, and sorting puts it first.
        &self.levels[0]
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelConfig {
                    level: 1,
                    spawn_interval_secs: 2.2,
                    shoot_interval_secs: 1.6,
                    enemy_speed: 90.0,
                    enemy_projectile_speed: 210.0,
                    level_duration_secs: 60.0,
                    player_shoot_cooldown_secs: 0.4,
                    is_boss_level: false,
                    big_enemy_chance: 0.0,
                    music: MusicTrack::Level1,
                },
                LevelConfig {
                    level: 2,
                    spawn_interval_secs: 1.5,
                    shoot_interval_secs: 1.3,
                    enemy_speed: 108.0,
                    enemy_projectile_speed: 240.0,
                    level_duration_secs: 60.0,
                    player_shoot_cooldown_secs: 0.35,
                    is_boss_level: false,
                    big_enemy_chance: 0.0,
                    music: MusicTrack::Level2,
                },
                LevelConfig {
                    level: 3,
                    spawn_interval_secs: 1.2,
                    shoot_interval_secs: 1.0,
                    enemy_speed: 120.0,
                    enemy_projectile_speed: 270.0,
                    level_duration_secs: 60.0,
                    player_shoot_cooldown_secs: 0.3,
                    is_boss_level: false,
                    big_enemy_chance: 0.4,
                    music: MusicTrack::Level3,
                },
                LevelConfig {
                    level: 4,
                    spawn_interval_secs: 2.0,
                    shoot_interval_secs: 0.8,
                    enemy_speed: 40.0,
                    enemy_projectile_speed: 180.0,
                    level_duration_secs: 9999.0,
                    player_shoot_cooldown_secs: 0.25,
                    is_boss_level: true,
                    big_enemy_chance: 0.0,
                    music: MusicTrack::Boss,
                },
            ],
        }
    }
}

impl LevelConfig {
    fn validate(&self) -> Result<()> {
        if self.level == 0 {
            return Err(ConfigError::ZeroLevel);
        }
        let positive = [
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("shoot_interval_secs", self.shoot_interval_secs),
            ("enemy_speed", self.enemy_speed),
            ("enemy_projectile_speed", self.enemy_projectile_speed),
            ("level_duration_secs", self.level_duration_secs),
            ("player_shoot_cooldown_secs", self.player_shoot_cooldown_secs),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive {
                    level: self.level,
                    field,
                    value,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.big_enemy_chance) {
            return Err(ConfigError::ChanceOutOfRange {
                level: self.level,
                value: self.big_enemy_chance,
            });
        }
        Ok(())
    }
}
