//! Concrete combatants: creature stacks and castle arrow towers

use serde::{Deserialize, Serialize};

use crate::battle::hex::BattleHex;
use crate::battle::unit::Unit;
use crate::battle::unit_info::UnitInfo;
use crate::core::types::{BattleSide, CreatureId, SlotId, UnitId};

/// A stack of identical creatures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleStack {
    pub id: UnitId,
    pub creature: CreatureId,
    pub count: u32,
    pub side: BattleSide,
    pub position: BattleHex,
    pub double_wide: bool,
    pub slot: SlotId,
    pub summoned: bool,
    pub ghost: bool,
    /// Gold cost per creature
    pub cost: u32,
}

impl BattleStack {
    pub fn new(
        id: UnitId,
        creature: CreatureId,
        count: u32,
        side: BattleSide,
        position: BattleHex,
    ) -> Self {
        Self {
            id,
            creature,
            count,
            side,
            position,
            double_wide: false,
            slot: SlotId::SUMMONED,
            summoned: false,
            ghost: false,
            cost: 0,
        }
    }

    /// Build a stack from a placement record
    pub fn from_info(info: &UnitInfo, double_wide: bool) -> Self {
        let mut stack = Self::new(info.id, info.creature, info.count, info.side, info.position);
        stack.double_wide = double_wide;
        stack.summoned = info.summoned;
        stack
    }
}

impl Unit for BattleStack {
    fn unit_id(&self) -> UnitId {
        self.id
    }

    fn unit_side(&self) -> BattleSide {
        self.side
    }

    fn position(&self) -> BattleHex {
        self.position
    }

    fn double_wide(&self) -> bool {
        self.double_wide
    }

    fn count(&self) -> u32 {
        self.count
    }

    fn creature_id(&self) -> CreatureId {
        self.creature
    }

    fn is_ghost(&self) -> bool {
        self.ghost
    }

    fn unit_slot(&self) -> SlotId {
        self.slot
    }

    fn creature_cost(&self) -> u32 {
        self.cost
    }
}

/// Castle turret; sits on a tower hex that no hex array ever admits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowTower {
    pub id: UnitId,
    pub position: BattleHex,
    pub destroyed: bool,
}

impl ArrowTower {
    pub fn new(id: UnitId, position: BattleHex) -> Self {
        Self {
            id,
            position,
            destroyed: false,
        }
    }
}

impl Unit for ArrowTower {
    fn unit_id(&self) -> UnitId {
        self.id
    }

    fn unit_side(&self) -> BattleSide {
        BattleSide::Defender
    }

    fn position(&self) -> BattleHex {
        self.position
    }

    fn double_wide(&self) -> bool {
        false
    }

    fn count(&self) -> u32 {
        if self.destroyed {
            0
        } else {
            1
        }
    }

    fn creature_id(&self) -> CreatureId {
        CreatureId::ARROW_TOWERS
    }

    fn unit_slot(&self) -> SlotId {
        SlotId::WAR_MACHINES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_info() {
        let info = UnitInfo {
            id: 4,
            count: 25,
            creature: CreatureId(12),
            side: BattleSide::Defender,
            position: BattleHex::new(84),
            summoned: true,
        };
        let stack = BattleStack::from_info(&info, true);

        assert_eq!(stack.unit_id(), 4);
        assert_eq!(stack.count(), 25);
        assert_eq!(stack.creature_id(), CreatureId(12));
        assert!(stack.summoned);
        assert_eq!(stack.occupied_hex(), BattleHex::new(85));
    }

    #[test]
    fn test_destroyed_tower_is_dead() {
        let mut tower = ArrowTower::new(1, BattleHex::CASTLE_UPPER_TOWER);
        assert!(tower.alive());
        tower.destroyed = true;
        assert!(tower.is_dead());
    }

    #[test]
    fn test_tower_is_never_surrounded() {
        let tower = ArrowTower::new(1, BattleHex::CASTLE_BOTTOM_TOWER);
        let surrounding = tower.surrounding_hexes(None);
        // Six INVALID placeholders: a tower has no neighbours on the grid
        assert_eq!(surrounding.len(), 6);
        assert!(surrounding.iter().all(|hex| !hex.is_valid()));
    }

    #[test]
    fn test_tower_surrender_cost_is_zero() {
        let tower = ArrowTower::new(1, BattleHex::CASTLE_CENTRAL_TOWER);
        assert_eq!(tower.raw_surrender_cost(), 0);
    }
}
