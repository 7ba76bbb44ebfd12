//! Battlefield geometry - occupancy and adjacency on the fixed hex grid
//!
//! Layers, leaves first:
//! - `hex`: the coordinate and its directions
//! - `neighbours`: shared neighbour table
//! - `hex_array`: ordered hex set with O(1) membership
//! - `footprint` / `unit`: which hexes a unit covers, surrounds and threatens

pub mod constants;
pub mod footprint;
pub mod hex;
pub mod hex_array;
pub mod neighbours;
pub mod stack;
pub mod unit;
pub mod unit_info;

// Re-exports for convenient access
pub use constants::*;
pub use footprint::{get_attackable_hexes, get_hexes, get_surrounding_hexes, occupied_hex};
pub use hex::{BattleHex, HexDirection};
pub use hex_array::BattleHexArray;
pub use neighbours::{neighbouring_tiles, neighbouring_tiles_cache, NeighbouringTiles};
pub use stack::{ArrowTower, BattleStack};
pub use unit::Unit;
pub use unit_info::UnitInfo;
