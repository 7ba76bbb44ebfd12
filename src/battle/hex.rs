//! Hex coordinate system for the battlefield (linear offset coordinates)
//!
//! A hex is an index `y * FIELD_WIDTH + x` into the fixed 17x11 grid.
//! Odd rows are shifted half a hex to the left of even rows.
//! Columns 0 and 16 are edge columns: valid, but not available to units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::battle::constants::{FIELD_HEIGHT, FIELD_SIZE, FIELD_WIDTH};

/// Linear hex coordinate on the battlefield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleHex(i16);

impl BattleHex {
    pub const INVALID: BattleHex = BattleHex(-1);
    pub const CASTLE_CENTRAL_TOWER: BattleHex = BattleHex(-2);
    pub const CASTLE_BOTTOM_TOWER: BattleHex = BattleHex(-3);
    pub const CASTLE_UPPER_TOWER: BattleHex = BattleHex(-4);

    pub const fn new(hex: i16) -> Self {
        Self(hex)
    }

    /// Build a hex from column and row, `INVALID` when off the field
    pub fn from_xy(x: i16, y: i16) -> Self {
        if Self::in_field(x, y) {
            Self(x + y * FIELD_WIDTH)
        } else {
            Self::INVALID
        }
    }

    fn in_field(x: i16, y: i16) -> bool {
        (0..FIELD_WIDTH).contains(&x) && (0..FIELD_HEIGHT).contains(&y)
    }

    pub fn raw(&self) -> i16 {
        self.0
    }

    /// Array index of a valid hex
    pub fn to_index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.0 as usize)
        } else {
            None
        }
    }

    pub fn x(&self) -> i16 {
        self.0 % FIELD_WIDTH
    }

    pub fn y(&self) -> i16 {
        self.0 / FIELD_WIDTH
    }

    /// Is this a real grid index
    pub fn is_valid(&self) -> bool {
        self.0 >= 0 && (self.0 as usize) < FIELD_SIZE
    }

    /// Can an ordinary unit stand here (valid and not in an edge column)
    pub fn is_available(&self) -> bool {
        self.is_valid() && self.x() > 0 && self.x() < FIELD_WIDTH - 1
    }

    pub fn is_tower(&self) -> bool {
        *self == Self::CASTLE_CENTRAL_TOWER
            || *self == Self::CASTLE_UPPER_TOWER
            || *self == Self::CASTLE_BOTTOM_TOWER
    }

    /// Neighbouring hex in `dir`.
    ///
    /// Leaving the field vertically always gives `INVALID`. Leaving it
    /// horizontally gives `INVALID` unless `wrapping` is set, in which case the
    /// linear index is kept and the hex lands on the opposite edge of an
    /// adjacent row.
    pub fn clone_in_direction(&self, dir: HexDirection, wrapping: bool) -> BattleHex {
        if !self.is_valid() {
            return Self::INVALID;
        }

        let (x, y) = (self.x(), self.y());
        let odd = y % 2 == 1;
        let (nx, ny) = match dir {
            HexDirection::TopLeft => (if odd { x - 1 } else { x }, y - 1),
            HexDirection::TopRight => (if odd { x } else { x + 1 }, y - 1),
            HexDirection::Right => (x + 1, y),
            HexDirection::BottomRight => (if odd { x } else { x + 1 }, y + 1),
            HexDirection::BottomLeft => (if odd { x - 1 } else { x }, y + 1),
            HexDirection::Left => (x - 1, y),
        };

        if Self::in_field(nx, ny) {
            return Self(nx + ny * FIELD_WIDTH);
        }
        if wrapping && (0..FIELD_HEIGHT).contains(&ny) {
            let wrapped = Self(nx + ny * FIELD_WIDTH);
            if wrapped.is_valid() {
                return wrapped;
            }
        }
        Self::INVALID
    }

    /// Hex distance between two valid hexes
    pub fn distance(&self, other: &Self) -> u32 {
        let y1 = self.y() as i32;
        let y2 = other.y() as i32;
        let x1 = self.x() as i32 + y1 / 2;
        let x2 = other.x() as i32 + y2 / 2;

        let dx = x2 - x1;
        let dy = y2 - y1;

        if (dx >= 0 && dy >= 0) || (dx < 0 && dy < 0) {
            dx.abs().max(dy.abs()) as u32
        } else {
            (dx.abs() + dy.abs()) as u32
        }
    }
}

impl Default for BattleHex {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<i16> for BattleHex {
    fn from(hex: i16) -> Self {
        Self(hex)
    }
}

impl From<BattleHex> for i16 {
    fn from(hex: BattleHex) -> Self {
        hex.0
    }
}

/// Raw index arithmetic; the result may leave the field or wrap rows
impl Add<i16> for BattleHex {
    type Output = BattleHex;

    fn add(self, rhs: i16) -> BattleHex {
        BattleHex(self.0.saturating_add(rhs))
    }
}

impl Sub<i16> for BattleHex {
    type Output = BattleHex;

    fn sub(self, rhs: i16) -> BattleHex {
        BattleHex(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for BattleHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction enum for hex neighbours, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
}

impl HexDirection {
    /// Position of this direction in the canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// All directions
    pub fn all() -> [HexDirection; 6] {
        [
            HexDirection::TopLeft,
            HexDirection::TopRight,
            HexDirection::Right,
            HexDirection::BottomRight,
            HexDirection::BottomLeft,
            HexDirection::Left,
        ]
    }
}
