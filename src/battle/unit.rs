//! Capability set shared by every combatant on the battlefield
//!
//! Geometry only needs position, width and side; the remaining queries
//! have defaults so that simple combatants stay small.

use crate::battle::footprint;
use crate::battle::hex::BattleHex;
use crate::battle::hex_array::BattleHexArray;
use crate::core::types::{BattleSide, CreatureId, SlotId, UnitId};

pub trait Unit {
    fn unit_id(&self) -> UnitId;
    fn unit_side(&self) -> BattleSide;
    fn position(&self) -> BattleHex;
    fn double_wide(&self) -> bool;

    /// Number of creatures in the stack
    fn count(&self) -> u32;

    fn creature_id(&self) -> CreatureId {
        CreatureId::NONE
    }

    fn alive(&self) -> bool {
        self.count() > 0
    }

    /// Ghosts are removed units kept around for bookkeeping
    fn is_ghost(&self) -> bool {
        false
    }

    fn unit_slot(&self) -> SlotId {
        SlotId::SUMMONED
    }

    /// Gold cost of a single creature
    fn creature_cost(&self) -> u32 {
        0
    }

    fn is_dead(&self) -> bool {
        !self.alive() && !self.is_ghost()
    }

    fn is_turret(&self) -> bool {
        self.creature_id() == CreatureId::ARROW_TOWERS
    }

    fn description(&self) -> String {
        format!("Unit {} of side {}", self.unit_id(), self.unit_side())
    }

    /// Surrender price; only stacks drawn from an army slot are paid for
    fn raw_surrender_cost(&self) -> u32 {
        if self.unit_slot().valid_slot() {
            self.creature_cost().saturating_mul(self.count())
        } else {
            0
        }
    }

    fn occupied_hex(&self) -> BattleHex {
        self.occupied_hex_at(self.position())
    }

    fn occupied_hex_at(&self, assumed_pos: BattleHex) -> BattleHex {
        footprint::occupied_hex(assumed_pos, self.double_wide(), self.unit_side())
    }

    fn hexes(&self) -> BattleHexArray {
        self.hexes_at(self.position())
    }

    fn hexes_at(&self, assumed_pos: BattleHex) -> BattleHexArray {
        footprint::get_hexes(assumed_pos, self.double_wide(), self.unit_side())
    }

    /// Hexes around the unit, at `assumed_pos` if given
    fn surrounding_hexes(&self, assumed_pos: Option<BattleHex>) -> BattleHexArray {
        let hex = assumed_pos.unwrap_or_else(|| self.position());
        footprint::get_surrounding_hexes(hex, self.double_wide(), self.unit_side())
    }

    /// Hexes from which `attacker` can hit this unit
    fn attackable_hexes(&self, attacker: &dyn Unit) -> BattleHexArray {
        footprint::get_attackable_hexes(self, attacker)
    }

    fn covers_pos(&self, pos: BattleHex) -> bool {
        if !pos.is_valid() {
            return false;
        }
        self.position() == pos || (self.double_wide() && self.occupied_hex() == pos)
    }
}
