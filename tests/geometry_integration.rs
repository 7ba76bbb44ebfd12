//! Battlefield geometry integration tests

use tactical_hex::battle::*;
use tactical_hex::core::{BattleSide, CreatureId, GameSettings};
use tactical_hex::pathfinder::{PathfinderConfig, PathfinderOptions};

fn hex(raw: i16) -> BattleHex {
    BattleHex::new(raw)
}

#[test]
fn test_single_hex_unit_surroundings() {
    let surrounding = get_surrounding_hexes(hex(30), false, BattleSide::Attacker);
    assert_eq!(
        surrounding,
        BattleHexArray::generate_all_neighbouring_tiles(hex(30))
    );
    assert_eq!(surrounding.len(), 6);
}

#[test]
fn test_double_wide_attacker_at_30() {
    assert_eq!(occupied_hex(hex(30), true, BattleSide::Attacker), hex(29));
    assert_eq!(
        get_hexes(hex(30), true, BattleSide::Attacker).to_vec(),
        vec![hex(30), hex(29)]
    );

    let surrounding = get_surrounding_hexes(hex(30), true, BattleSide::Attacker);
    assert_eq!(surrounding.len(), 8);
    assert!(!surrounding.contains(hex(30)));
    assert!(!surrounding.contains(hex(29)));

    // Every perimeter hex touches the footprint
    for &h in &surrounding {
        assert!(h.distance(&hex(30)) == 1 || h.distance(&hex(29)) == 1);
    }
}

#[test]
fn test_attack_from_seam_is_pruned() {
    let defender = BattleStack::new(1, CreatureId(5), 10, BattleSide::Attacker, hex(50));
    let mut attacker = BattleStack::new(2, CreatureId(6), 10, BattleSide::Defender, hex(120));
    attacker.double_wide = true;

    let attackable = defender.attackable_hexes(&attacker);

    for &h in &BattleHexArray::generate_neighbouring_tiles(hex(50)) {
        assert!(attackable.contains(h));
    }
    // 51 would be the second hex, but it sits on the next row
    for &h in &BattleHexArray::generate_neighbouring_tiles(hex(51)) {
        if !BattleHexArray::generate_neighbouring_tiles(hex(50)).contains(h) {
            assert!(!attackable.contains(h));
        }
    }
}

#[test]
fn test_attackable_hexes_surround_defender() {
    let mut defender = BattleStack::new(1, CreatureId(5), 10, BattleSide::Defender, hex(94));
    defender.double_wide = true;
    let attacker = BattleStack::new(2, CreatureId(6), 10, BattleSide::Attacker, hex(10));

    let attackable = defender.attackable_hexes(&attacker);
    let surrounding = defender.surrounding_hexes(None);

    // Single-hex attacker: exactly the perimeter plus the defender's own hexes
    for &h in &surrounding {
        assert!(attackable.contains(h));
    }
    assert_eq!(attackable.len(), surrounding.len() + 2);
}

#[test]
fn test_placement_record_to_stack() {
    let info = UnitInfo {
        id: 0,
        count: 12,
        creature: CreatureId(40),
        side: BattleSide::Attacker,
        position: hex(86),
        summoned: false,
    };
    let data = info.save().unwrap();
    let loaded = UnitInfo::load(8, &data).unwrap();

    let stack = BattleStack::from_info(&loaded, true);
    assert_eq!(stack.unit_id(), 8);
    assert_eq!(stack.hexes().to_vec(), vec![hex(86), hex(85)]);
    assert_eq!(stack.description(), "Unit 8 of side 0");
}

#[test]
fn test_closest_attackable_tile() {
    let defender = BattleStack::new(1, CreatureId(5), 10, BattleSide::Defender, hex(60));
    let attacker = BattleStack::new(2, CreatureId(6), 10, BattleSide::Attacker, hex(52));

    let attackable = defender.attackable_hexes(&attacker);
    let closest = attackable.get_closest_tile(BattleSide::Attacker, attacker.position());

    assert!(attackable.contains(closest));
    let best = closest.distance(&attacker.position());
    for &h in &attackable {
        assert!(h.distance(&attacker.position()) >= best);
    }
}

#[test]
fn test_settings_drive_pathfinder_config() {
    let settings = GameSettings::from_toml_str(
        r#"
        [pathfinder]
        use_boat = false
        use_monolith_one_way_unique = true
        "#,
    )
    .unwrap();

    let options = PathfinderOptions::from_settings(&settings.pathfinder);
    assert!(!options.use_embark_and_disembark);
    assert!(options.use_teleport_one_way);

    let config = PathfinderConfig::single_hero(options, 3);
    assert!(config.options.use_teleport_one_way);
    assert!(!config.options.use_teleport_one_way_random);
}
