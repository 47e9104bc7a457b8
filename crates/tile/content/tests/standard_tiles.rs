use std::path::Path;

use tile_content::{ContentFactory, standard_catalog};
use tile_core::{CatalogOracle, Color, Edge, ReservationBlocks, Tile, TileOptions};

fn lookup(name: &str) -> Tile {
    let catalog = standard_catalog().unwrap();
    Tile::lookup(&catalog, name, TileOptions::default()).unwrap()
}

#[test]
fn every_standard_tile_builds() {
    let catalog = standard_catalog().unwrap();
    assert!(!catalog.is_empty());

    for name in catalog.names() {
        let tile = Tile::lookup(&catalog, name, TileOptions::default());
        assert!(tile.is_ok(), "tile {name} failed: {:?}", tile.err());
    }
}

#[test]
fn standard_colors() {
    assert_eq!(lookup("blank").color(), Color::White);
    assert_eq!(lookup("57").color(), Color::Yellow);
    assert_eq!(lookup("59").color(), Color::Green);
    assert_eq!(lookup("63").color(), Color::Brown);
    assert_eq!(lookup("455").color(), Color::Gray);
}

#[test]
fn standard_upgrade_chains() {
    assert!(lookup("7").upgrades_to(&lookup("18"), false));
    assert!(lookup("8").upgrades_to(&lookup("16"), false));
    assert!(lookup("9").upgrades_to(&lookup("19"), false));
    assert!(!lookup("9").upgrades_to(&lookup("16"), false));
    assert!(lookup("57").upgrades_to(&lookup("14"), false));
    assert!(lookup("5").upgrades_to(&lookup("14"), false));
    assert!(lookup("14").upgrades_to(&lookup("63"), false));
    assert!(!lookup("57").upgrades_to(&lookup("63"), false));
    assert!(!lookup("57").upgrades_to(&lookup("59"), false));
}

#[test]
fn terrain_tiles_carry_upgrade_costs() {
    let mountain = lookup("mtn80");
    assert_eq!(mountain.terrain(), vec!["mountain"]);
    assert_eq!(mountain.upgrades().next().map(|upgrade| upgrade.cost), Some(80));
}

#[test]
fn shipped_data_directory_loads() {
    let factory = ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));

    let config = factory.load_config().unwrap();
    assert_eq!(config.reservation_blocks, ReservationBlocks::Never);
    assert_eq!(config.default_legal_rotations, Edge::ALL.to_vec());

    let catalog = factory.load_catalog().unwrap();
    assert_eq!(catalog.len(), standard_catalog().unwrap().len());

    let mut tile = Tile::lookup(&catalog, "7", TileOptions::from_config(&config)).unwrap();
    tile.rotate(None);
    assert_eq!(tile.rotation(), Edge::new(1));
}

#[test]
fn factory_reads_custom_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tiles.ron"),
        r#"(yellow: { "X1": "city=revenue:30,loc:2;path=a:0,b:_0" })"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("config.toml"), "reservation_blocks = \"always\"\n").unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    let catalog = factory.load_catalog().unwrap();

    let tile = Tile::lookup(&catalog, "X1", TileOptions::from_config(&config)).unwrap();
    assert_eq!(tile.reservation_blocks(), ReservationBlocks::Always);
    assert_eq!(tile.exits(), &[Edge::new(0)]);
    assert!(Tile::lookup(&catalog, "7", TileOptions::default()).is_err());
}
