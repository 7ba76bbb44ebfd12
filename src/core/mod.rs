pub mod config;
pub mod error;
pub mod types;

pub use config::{settings, set_settings, GameSettings, PathfinderSettings};
pub use error::{HexError, Result};
pub use types::{BattleSide, CreatureId, SlotId, UnitId};
