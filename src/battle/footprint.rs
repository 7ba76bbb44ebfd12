//! Unit footprint and attack-range geometry
//!
//! A unit occupies one hex, or two adjacent hexes when it is double-wide.
//! The second hex always trails towards the unit's own edge of the field:
//! one hex to the left for the attacker, one to the right for the defender.

use crate::battle::hex::{BattleHex, HexDirection};
use crate::battle::hex_array::BattleHexArray;
use crate::battle::unit::Unit;
use crate::core::types::BattleSide;

/// Directions around the front hex of a double-wide unit
const FRONT_DIRECTIONS: [HexDirection; 5] = [
    HexDirection::TopLeft,
    HexDirection::TopRight,
    HexDirection::Right,
    HexDirection::BottomRight,
    HexDirection::BottomLeft,
];

/// Second hex of a double-wide unit.
///
/// `INVALID` for single-hex units and when the second hex would fall off the
/// field. A second hex that wraps onto the neighbouring row is still returned.
pub fn occupied_hex(position: BattleHex, double_wide: bool, side: BattleSide) -> BattleHex {
    if !double_wide || !position.is_valid() {
        return BattleHex::INVALID;
    }

    let other = match side {
        BattleSide::Attacker => position - 1,
        BattleSide::Defender => position + 1,
    };

    if other.is_valid() {
        other
    } else {
        BattleHex::INVALID
    }
}

/// Hexes a unit covers when standing at `position`
pub fn get_hexes(position: BattleHex, double_wide: bool, side: BattleSide) -> BattleHexArray {
    let mut hexes = BattleHexArray::with_capacity(2);
    hexes.insert(position);

    if double_wide {
        hexes.insert(occupied_hex(position, double_wide, side));
    }

    hexes
}

/// Hexes adjacent to a unit's whole footprint.
///
/// Single-hex units get the six direction slots of
/// `BattleHexArray::generate_all_neighbouring_tiles`, with `INVALID` in
/// off-field slots. Double-wide units get up to eight available hexes walked
/// around the perimeter; hexes off the field or in an edge column are dropped.
pub fn get_surrounding_hexes(
    position: BattleHex,
    double_wide: bool,
    side: BattleSide,
) -> BattleHexArray {
    if !double_wide {
        return BattleHexArray::generate_all_neighbouring_tiles(position);
    }

    let other_hex = occupied_hex(position, double_wide, side);
    let mut hexes = BattleHexArray::with_capacity(8);

    match side {
        BattleSide::Attacker => {
            for dir in FRONT_DIRECTIONS {
                hexes.check_and_push(position.clone_in_direction(dir, false));
            }

            hexes.check_and_push(other_hex.clone_in_direction(HexDirection::BottomLeft, false));
            hexes.check_and_push(other_hex.clone_in_direction(HexDirection::Left, false));
            hexes.check_and_push(other_hex.clone_in_direction(HexDirection::TopLeft, false));
        }
        BattleSide::Defender => {
            hexes.check_and_push(position.clone_in_direction(HexDirection::TopLeft, false));

            for dir in FRONT_DIRECTIONS {
                hexes.check_and_push(other_hex.clone_in_direction(dir, false));
            }

            hexes.check_and_push(position.clone_in_direction(HexDirection::BottomLeft, false));
            hexes.check_and_push(position.clone_in_direction(HexDirection::Left, false));
        }
    }

    hexes
}

/// Hexes from which `attacker` can reach `defender` in melee.
///
/// For every hex the defender covers, the attacker is placed there
/// hypothetically; the available neighbours of that placement are the
/// threatening hexes. A double-wide placement whose two hexes are not adjacent
/// (it wrapped across a row seam) keeps only its front hex.
pub fn get_attackable_hexes<D, A>(defender: &D, attacker: &A) -> BattleHexArray
where
    D: Unit + ?Sized,
    A: Unit + ?Sized,
{
    let defender_hexes = get_hexes(
        defender.position(),
        defender.double_wide(),
        defender.unit_side(),
    );

    let mut targetable_hexes = BattleHexArray::new();

    for &defender_hex in &defender_hexes {
        let mut hexes = get_hexes(defender_hex, attacker.double_wide(), attacker.unit_side());

        let straddles_seam =
            matches!(hexes.as_slice(), [front, back] if front.distance(back) != 1);
        if straddles_seam {
            hexes.pop_back();
        }

        for &hex in &hexes {
            targetable_hexes.merge(&BattleHexArray::generate_neighbouring_tiles(hex));
        }
    }

    targetable_hexes
}
