//! Core type definitions shared by the battle and pathfinder modules

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::HexError;

/// Identifier of a unit on the battlefield
pub type UnitId = u32;

/// Number of creature slots in an army
pub const ARMY_SIZE: i32 = 7;

/// The two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BattleSide {
    #[default]
    Attacker,
    Defender,
}

impl BattleSide {
    pub fn index(&self) -> u8 {
        match self {
            BattleSide::Attacker => 0,
            BattleSide::Defender => 1,
        }
    }
}

impl From<BattleSide> for u8 {
    fn from(side: BattleSide) -> Self {
        side.index()
    }
}

impl TryFrom<u8> for BattleSide {
    type Error = HexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BattleSide::Attacker),
            1 => Ok(BattleSide::Defender),
            other => Err(HexError::InvalidSide(other)),
        }
    }
}

impl fmt::Display for BattleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Creature type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub i32);

impl CreatureId {
    pub const NONE: CreatureId = CreatureId(-1);
    pub const ARROW_TOWERS: CreatureId = CreatureId(149);
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::NONE
    }
}

/// Army slot a stack was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub i32);

impl SlotId {
    /// Summoned creatures and war machines carry this slot
    pub const SUMMONED: SlotId = SlotId(-3);
    pub const WAR_MACHINES: SlotId = SlotId(-4);

    pub fn valid_slot(&self) -> bool {
        self.0 >= 0 && self.0 < ARMY_SIZE
    }
}
