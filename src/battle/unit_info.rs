//! Placement record for spawning a unit
//!
//! Records are stored as JSON under a `newUnitInfo` key. The unit id is
//! assigned by the caller on load and is never written out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::battle::hex::BattleHex;
use crate::core::error::Result;
use crate::core::types::{BattleSide, CreatureId, UnitId};

const RECORD_KEY: &str = "newUnitInfo";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitInfo {
    #[serde(skip)]
    pub id: UnitId,
    pub count: u32,
    #[serde(rename = "type")]
    pub creature: CreatureId,
    pub side: BattleSide,
    pub position: BattleHex,
    pub summoned: bool,
}

impl UnitInfo {
    pub fn save(&self) -> Result<Value> {
        let mut data = Map::new();
        data.insert(RECORD_KEY.to_string(), serde_json::to_value(self)?);
        Ok(Value::Object(data))
    }

    /// Read a record; missing fields take their defaults
    pub fn load(id: UnitId, data: &Value) -> Result<Self> {
        let mut info: UnitInfo = match data.get(RECORD_KEY) {
            Some(record) => serde_json::from_value(record.clone())?,
            None => UnitInfo::default(),
        };
        info.id = id;
        Ok(info)
    }
}
