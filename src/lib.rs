//! Tactical Hex - occupancy, footprint and attack-range geometry for hex battles

pub mod battle;
pub mod core;
pub mod pathfinder;
