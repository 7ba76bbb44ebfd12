//! Process-wide neighbour table
//!
//! Built once on first access and read-only afterwards, so any number of
//! threads may share it without locking.

use std::sync::OnceLock;

use crate::battle::constants::{FIELD_SIZE, HEX_DIRECTIONS};
use crate::battle::hex::{BattleHex, HexDirection};

/// Neighbours of one hex, indexed by `HexDirection::index()`
pub type NeighbouringTiles = [BattleHex; HEX_DIRECTIONS];

/// Neighbours of every hex on the field
pub type NeighbouringTilesCache = [NeighbouringTiles; FIELD_SIZE];

static NEIGHBOURING_TILES: OnceLock<NeighbouringTilesCache> = OnceLock::new();

fn calculate_neighbouring_tiles() -> NeighbouringTilesCache {
    let mut cache = [[BattleHex::INVALID; HEX_DIRECTIONS]; FIELD_SIZE];

    for (index, tiles) in cache.iter_mut().enumerate() {
        let hex = BattleHex::new(index as i16);
        for dir in HexDirection::all() {
            tiles[dir.index()] = hex.clone_in_direction(dir, false);
        }
    }

    tracing::debug!("Built neighbour cache for {} hexes", FIELD_SIZE);
    cache
}

/// The shared neighbour table
pub fn neighbouring_tiles_cache() -> &'static NeighbouringTilesCache {
    NEIGHBOURING_TILES.get_or_init(calculate_neighbouring_tiles)
}

/// Cached neighbours of `hex`, or `None` when `hex` is not a grid index
pub fn neighbouring_tiles(hex: BattleHex) -> Option<&'static NeighbouringTiles> {
    hex.to_index().map(|index| &neighbouring_tiles_cache()[index])
}
