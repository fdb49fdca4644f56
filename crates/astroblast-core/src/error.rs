//! Error types for loading tuning configuration.
//!
//! The simulation itself never fails; only configuration input can be invalid.

/// Error while loading or validating a level table.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Input was not valid JSON for a level table.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every table needs a level-1 entry to fall back on.
    #[error("Level table has no level 1 entry")]
    MissingBaseLevel,

    #[error("Level {0} is defined more than once")]
    DuplicateLevel(u32),

    /// Levels must be numbered without holes.
    #[error("Level table jumps from {after} to {next}")]
    LevelGap { after: u32, next: u32 },

    /// Level numbers start at 1.
    #[error("Level number must be positive")]
    ZeroLevel,

    /// A field that must be positive and finite is not.
    #[error("Level {level}: {field} must be positive, got {value}")]
    NonPositive {
        level: u32,
        field: &'static str,
        value: f32,
    },

    #[error("Level {level}: big_enemy_chance must be within [0, 1], got {value}")]
    ChanceOutOfRange { level: u32, value: f64 },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
