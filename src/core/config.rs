//! Game settings with documented defaults
//!
//! Settings are read from a TOML document. Every key is optional; missing
//! keys fall back to the defaults below.
//!
//! ```toml
//! [pathfinder]
//! ignore_guards = false
//! use_boat = true
//! use_monolith_one_way_unique = false
//! turn_limit = 255
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{HexError, Result};

/// Settings consumed when building pathfinder options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfinderSettings {
    /// Heroes may walk past guarded tiles without stopping
    pub ignore_guards: bool,

    /// Heroes may embark onto and disembark from boats
    pub use_boat: bool,

    /// Two-way monoliths are treated as edges of the movement graph
    pub use_monolith_two_way: bool,

    /// One-way monoliths with a single exit are usable
    pub use_monolith_one_way_unique: bool,

    /// One-way monoliths with several random exits are usable
    pub use_monolith_one_way_random: bool,

    /// Whirlpools are usable (they may cost troops)
    pub use_whirlpool: bool,

    /// Flying follows the original rules: a flying hero can only land on
    /// tiles it could otherwise walk to
    pub original_fly_rules: bool,

    /// Maximum number of turns the pathfinder looks ahead
    ///
    /// Must be at least 1. The default (255) effectively disables the limit.
    pub turn_limit: u8,
}

impl Default for PathfinderSettings {
    fn default() -> Self {
        Self {
            ignore_guards: false,
            use_boat: true,
            use_monolith_two_way: true,
            use_monolith_one_way_unique: false,
            use_monolith_one_way_random: false,
            use_whirlpool: true,
            original_fly_rules: true,
            turn_limit: u8::MAX,
        }
    }
}

/// Top-level game settings document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub pathfinder: PathfinderSettings,
}

impl GameSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: GameSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded game settings from {}", path.display());
        Ok(settings)
    }

    /// Validate settings for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.pathfinder.turn_limit == 0 {
            return Err(HexError::InvalidSettings(
                "pathfinder.turn_limit must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL SETTINGS ACCESS ===

use std::sync::OnceLock;

static SETTINGS: OnceLock<GameSettings> = OnceLock::new();

/// Get the global game settings (initializes with defaults if not set)
pub fn settings() -> &'static GameSettings {
    SETTINGS.get_or_init(GameSettings::default)
}

/// Set the global game settings (can only be called once)
///
/// Returns Err with the rejected value if settings were already set.
pub fn set_settings(settings: GameSettings) -> std::result::Result<(), GameSettings> {
    SETTINGS.set(settings)
}
