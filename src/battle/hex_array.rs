//! Ordered set of unique battlefield hexes
//!
//! `BattleHexArray` keeps insertion order in a `Vec` and mirrors membership in a
//! fixed presence table indexed by hex, so `contains` is O(1). Its capacity is
//! the size of the battlefield.
//!
//! Insertion is best-effort: towers, invalid hexes, duplicates and inserts into
//! a full array are dropped without an error. Invalid non-tower hexes are
//! reported through `tracing`.
//!
//! Two kinds of removal exist on purpose. `erase` tombstones a slot in place
//! (the slot becomes `BattleHex::INVALID`), keeping every other position
//! stable for callers that correlate by index. `erase_range` and `pop_back`
//! remove slots and compact the sequence.
//!
//! Serialised arrays are plain lists. Tombstones are written as `-1` and read
//! back into the same slot.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, RangeBounds};

use crate::battle::constants::{FIELD_SIZE, HEX_DIRECTIONS};
use crate::battle::hex::BattleHex;
use crate::battle::neighbours::neighbouring_tiles;
use crate::core::error::{HexError, Result};
use crate::core::types::BattleSide;

#[derive(Clone, PartialEq, Eq)]
pub struct BattleHexArray {
    hexes: Vec<BattleHex>,
    presence: [bool; FIELD_SIZE],
}

impl BattleHexArray {
    /// Maximum number of hexes an array can hold
    pub const CAPACITY: usize = FIELD_SIZE;

    pub fn new() -> Self {
        Self {
            hexes: Vec::new(),
            presence: [false; FIELD_SIZE],
        }
    }

    /// Empty array with storage reserved for `capacity` hexes (capped at the field size)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hexes: Vec::with_capacity(capacity.min(FIELD_SIZE)),
            presence: [false; FIELD_SIZE],
        }
    }

    /// All available neighbours of `hex`, in direction order
    pub fn generate_neighbouring_tiles(hex: BattleHex) -> Self {
        let mut ret = Self::with_capacity(HEX_DIRECTIONS);
        if let Some(tiles) = neighbouring_tiles(hex) {
            for &tile in tiles {
                ret.check_and_push(tile);
            }
        }
        ret
    }

    /// Exactly six slots, one per direction in canonical order.
    ///
    /// Directions that leave the field hold `BattleHex::INVALID`, like a
    /// tombstoned slot, so position `i` always belongs to direction `i`.
    pub fn generate_all_neighbouring_tiles(hex: BattleHex) -> Self {
        let mut ret = Self::with_capacity(HEX_DIRECTIONS);
        match neighbouring_tiles(hex) {
            Some(tiles) => {
                for &tile in tiles {
                    if tile.is_valid() {
                        ret.insert(tile);
                    } else {
                        ret.hexes.push(BattleHex::INVALID);
                    }
                }
            }
            None => ret.hexes.resize(HEX_DIRECTIONS, BattleHex::INVALID),
        }
        ret
    }

    /// Available member closest to `initial`.
    ///
    /// Ties prefer the column furthest towards the enemy (largest x for the
    /// attacker, smallest x for the defender), then the smallest row gap to
    /// `initial`, then the lowest hex index. Returns `INVALID` when there is no
    /// candidate or `initial` is not on the field.
    pub fn get_closest_tile(&self, side: BattleSide, initial: BattleHex) -> BattleHex {
        if !initial.is_valid() {
            return BattleHex::INVALID;
        }

        let row_gap = |hex: &BattleHex| (hex.y() - initial.y()).abs();

        self.hexes
            .iter()
            .copied()
            .filter(|hex| hex.is_available())
            .min_by(|a, b| {
                a.distance(&initial)
                    .cmp(&b.distance(&initial))
                    .then_with(|| match side {
                        BattleSide::Attacker => b.x().cmp(&a.x()),
                        BattleSide::Defender => a.x().cmp(&b.x()),
                    })
                    .then_with(|| row_gap(a).cmp(&row_gap(b)))
                    .then_with(|| a.cmp(b))
            })
            .unwrap_or(BattleHex::INVALID)
    }

    /// Insert only hexes an ordinary unit could stand on
    pub fn check_and_push(&mut self, tile: BattleHex) {
        if tile.is_available() {
            self.insert(tile);
        }
    }

    pub fn insert(&mut self, hex: BattleHex) {
        if self.is_not_valid_for_insertion(hex) {
            return;
        }

        self.hexes.push(hex);
        self.set_present(hex, true);
    }

    /// Insert `hex` before `position`, returning the position.
    ///
    /// A rejected hex leaves the array untouched.
    ///
    /// # Panics
    ///
    /// Panics if `position > len`.
    pub fn insert_at(&mut self, position: usize, hex: BattleHex) -> usize {
        if self.is_not_valid_for_insertion(hex) {
            return position;
        }

        self.hexes.insert(position, hex);
        self.set_present(hex, true);
        position
    }

    /// Insert every member of `other`
    pub fn merge(&mut self, other: &BattleHexArray) {
        for &hex in &other.hexes {
            self.insert(hex);
        }
    }

    pub fn clear(&mut self) {
        self.hexes.clear();
        self.presence = [false; FIELD_SIZE];
    }

    /// Tombstone the slot at `index`; the length does not change.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) {
        let old = std::mem::replace(&mut self.hexes[index], BattleHex::INVALID);
        self.set_present(old, false);
    }

    /// Remove the slots in `range`, shifting later slots down
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) {
        for hex in self.hexes.drain(range) {
            if let Some(index) = hex.to_index() {
                self.presence[index] = false;
            }
        }
    }

    pub fn pop_back(&mut self) -> Option<BattleHex> {
        let hex = self.hexes.pop()?;
        self.set_present(hex, false);
        Some(hex)
    }

    /// Truncate to `len` slots, or pad with tombstones up to `len`
    pub fn resize(&mut self, len: usize) {
        let len = len.min(FIELD_SIZE);
        if len < self.hexes.len() {
            self.erase_range(len..);
        } else {
            self.hexes.resize(len, BattleHex::INVALID);
        }
    }

    pub fn contains(&self, hex: BattleHex) -> bool {
        match hex.to_index() {
            Some(index) => self.presence[index],
            None => {
                if !hex.is_tower() {
                    tracing::warn!("BattleHexArray::contains({}) - invalid hex", hex);
                }
                false
            }
        }
    }

    /// Members satisfying `predicate`, in their original order
    pub fn filter_by<P>(&self, mut predicate: P) -> BattleHexArray
    where
        P: FnMut(BattleHex) -> bool,
    {
        let mut filtered = BattleHexArray::new();
        for &hex in &self.hexes {
            if predicate(hex) {
                filtered.insert(hex);
            }
        }
        filtered
    }

    /// Position of the first slot satisfying `predicate`
    pub fn find_if<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(BattleHex) -> bool,
    {
        self.hexes.iter().position(|&hex| predicate(hex))
    }

    /// Bounds-checked access
    pub fn at(&self, index: usize) -> Result<BattleHex> {
        self.hexes.get(index).copied().ok_or(HexError::OutOfRange {
            index,
            len: self.hexes.len(),
        })
    }

    pub fn front(&self) -> Option<BattleHex> {
        self.hexes.first().copied()
    }

    pub fn back(&self) -> Option<BattleHex> {
        self.hexes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BattleHex> {
        self.hexes.iter()
    }

    pub fn as_slice(&self) -> &[BattleHex] {
        &self.hexes
    }

    pub fn to_vec(&self) -> Vec<BattleHex> {
        self.hexes.clone()
    }

    fn is_not_valid_for_insertion(&self, hex: BattleHex) -> bool {
        if hex.is_tower() {
            return true;
        }
        if !hex.is_valid() {
            tracing::warn!("BattleHexArray::insert({}) - invalid hex", hex);
            return true;
        }

        self.contains(hex) || self.hexes.len() >= FIELD_SIZE
    }

    fn set_present(&mut self, hex: BattleHex, present: bool) {
        if let Some(index) = hex.to_index() {
            self.presence[index] = present;
        }
    }
}

impl Default for BattleHexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BattleHexArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.hexes.iter()).finish()
    }
}

impl Index<usize> for BattleHexArray {
    type Output = BattleHex;

    fn index(&self, index: usize) -> &BattleHex {
        debug_assert!(index < self.hexes.len(), "Index out of bounds!");
        &self.hexes[index]
    }
}

impl<T: Into<BattleHex>> FromIterator<T> for BattleHexArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ret = BattleHexArray::new();
        ret.extend(iter);
        ret
    }
}

impl<T: Into<BattleHex>> Extend<T> for BattleHexArray {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.into());
        }
    }
}

impl<T: Into<BattleHex>, const N: usize> From<[T; N]> for BattleHexArray {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl IntoIterator for BattleHexArray {
    type Item = BattleHex;
    type IntoIter = std::vec::IntoIter<BattleHex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.into_iter()
    }
}

impl<'a> IntoIterator for &'a BattleHexArray {
    type Item = &'a BattleHex;
    type IntoIter = std::slice::Iter<'a, BattleHex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.iter()
    }
}

impl Serialize for BattleHexArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.hexes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BattleHexArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<BattleHex>::deserialize(deserializer)?;
        let mut array = BattleHexArray::with_capacity(values.len().min(FIELD_SIZE));

        for hex in values {
            // Tombstones keep their slot
            if hex == BattleHex::INVALID {
                if array.hexes.len() < FIELD_SIZE {
                    array.hexes.push(hex);
                }
            } else {
                array.insert(hex);
            }
        }

        Ok(array)
    }
}
