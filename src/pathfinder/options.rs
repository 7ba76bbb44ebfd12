//! Pathfinder options and rule-set construction
//!
//! The rules themselves live in the overland movement engine; this module
//! only decides which rules run and with which options.

use serde::{Deserialize, Serialize};

use crate::core::config::{settings, PathfinderSettings};

/// Switches consulted by the pathfinding rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfinderOptions {
    pub use_flying: bool,
    pub use_water_walking: bool,
    pub ignore_guards: bool,
    pub use_embark_and_disembark: bool,
    pub use_teleport_two_way: bool,
    pub use_teleport_one_way: bool,
    pub use_teleport_one_way_random: bool,
    pub use_teleport_whirlpool: bool,
    pub original_fly_rules: bool,
    pub use_castle_gate: bool,
    /// Flying is only considered for tiles that cannot be walked to
    pub lightweight_flying_mode: bool,
    /// Air and water layers may only be used for one turn
    pub one_turn_special_layers_limit: bool,
    pub turn_limit: u8,
    /// Heroes may cast adventure spells to move
    pub can_use_cast: bool,
    pub allow_layer_transitioning_after_battle: bool,
    pub force_use_teleport_whirlpool: bool,
}

impl PathfinderOptions {
    /// Options built from the global game settings
    pub fn new() -> Self {
        Self::from_settings(&settings().pathfinder)
    }

    pub fn from_settings(settings: &PathfinderSettings) -> Self {
        Self {
            use_flying: true,
            use_water_walking: true,
            ignore_guards: settings.ignore_guards,
            use_embark_and_disembark: settings.use_boat,
            use_teleport_two_way: settings.use_monolith_two_way,
            use_teleport_one_way: settings.use_monolith_one_way_unique,
            use_teleport_one_way_random: settings.use_monolith_one_way_random,
            use_teleport_whirlpool: settings.use_whirlpool,
            original_fly_rules: settings.original_fly_rules,
            use_castle_gate: false,
            lightweight_flying_mode: false,
            one_turn_special_layers_limit: true,
            turn_limit: settings.turn_limit,
            can_use_cast: false,
            allow_layer_transitioning_after_battle: false,
            force_use_teleport_whirlpool: false,
        }
    }
}

impl Default for PathfinderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules run for every candidate move, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathfindingRule {
    LayerTransition,
    DestinationAction,
    MovementToDestination,
    MovementCost,
    MovementAfterDestination,
}

/// Options plus the ordered rule set for one pathfinder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathfinderConfig {
    pub options: PathfinderOptions,
    pub rules: Vec<PathfindingRule>,
}

impl PathfinderConfig {
    pub fn new(options: PathfinderOptions, rules: Vec<PathfindingRule>) -> Self {
        Self { options, rules }
    }

    /// Canonical rule set for moving a single hero
    pub fn build_rule_set() -> Vec<PathfindingRule> {
        vec![
            PathfindingRule::LayerTransition,
            PathfindingRule::DestinationAction,
            PathfindingRule::MovementToDestination,
            PathfindingRule::MovementCost,
            PathfindingRule::MovementAfterDestination,
        ]
    }

    /// Config for one hero whose owner holds `town_count` towns
    pub fn single_hero(options: PathfinderOptions, town_count: usize) -> Self {
        let mut config = Self::new(options, Self::build_rule_set());
        config.check_if_townless_and_allow_one_way_teleports(town_count);
        config
    }

    /// Enable one-way teleports when the hero's owner has no towns
    pub fn check_if_townless_and_allow_one_way_teleports(&mut self, town_count: usize) {
        if town_count == 0 {
            tracing::debug!("Owner has no towns, enabling one-way teleports");
            self.options.use_teleport_one_way = true;
            self.options.use_teleport_one_way_random = true;
        }
    }
}
