//! Hex Probe
//!
//! Prints the footprint, perimeter and threatened hexes of a unit placement.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tactical_hex::battle::{BattleHex, BattleHexArray, BattleStack, Unit};
use tactical_hex::core::error::Result;
use tactical_hex::core::{set_settings, BattleSide, CreatureId, GameSettings};
use tactical_hex::pathfinder::PathfinderOptions;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Attacker,
    Defender,
}

impl From<Side> for BattleSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Attacker => BattleSide::Attacker,
            Side::Defender => BattleSide::Defender,
        }
    }
}

/// Hex Probe - inspect battlefield geometry for a unit placement
#[derive(Parser, Debug)]
#[command(name = "hex_probe")]
#[command(about = "Print occupied, surrounding and attackable hexes for a unit")]
struct Args {
    /// Hex the unit stands on (0..187)
    #[arg(long)]
    position: i16,

    /// The unit occupies two hexes
    #[arg(long)]
    double_wide: bool,

    /// Side the unit fights for
    #[arg(long, value_enum, default_value = "defender")]
    side: Side,

    /// The hypothetical attacker occupies two hexes
    #[arg(long)]
    attacker_double_wide: bool,

    /// Side of the hypothetical attacker
    #[arg(long, value_enum, default_value = "attacker")]
    attacker_side: Side,

    /// Report the attackable hex closest to this hex
    #[arg(long)]
    from: Option<i16>,

    /// Game settings file (TOML)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct ProbeReport {
    position: BattleHex,
    occupied: BattleHexArray,
    surrounding: BattleHexArray,
    attackable: BattleHexArray,
    closest: Option<BattleHex>,
    description: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.settings {
        let loaded = GameSettings::load(path)?;
        if set_settings(loaded).is_err() {
            tracing::warn!("Game settings were already initialised");
        }
        tracing::info!("Pathfinder options: {:?}", PathfinderOptions::new());
    }

    let position = BattleHex::new(args.position);
    if !position.is_available() {
        tracing::warn!("Hex {} is not available to ordinary units", position);
    }

    let mut unit = BattleStack::new(1, CreatureId(0), 1, args.side.into(), position);
    unit.double_wide = args.double_wide;

    let mut attacker = BattleStack::new(
        2,
        CreatureId(0),
        1,
        args.attacker_side.into(),
        BattleHex::INVALID,
    );
    attacker.double_wide = args.attacker_double_wide;

    let attackable = unit.attackable_hexes(&attacker);
    let closest = args
        .from
        .map(|from| attackable.get_closest_tile(attacker.unit_side(), BattleHex::new(from)));

    let report = ProbeReport {
        position,
        occupied: unit.hexes(),
        surrounding: unit.surrounding_hexes(None),
        attackable,
        closest,
        description: unit.description(),
    };

    if args.format == "text" {
        println!("{}", report.description);
        println!("  occupied:    {:?}", report.occupied);
        println!("  surrounding: {:?}", report.surrounding);
        println!("  attackable:  {:?}", report.attackable);
        if let Some(closest) = report.closest {
            println!("  closest:     {}", closest);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
