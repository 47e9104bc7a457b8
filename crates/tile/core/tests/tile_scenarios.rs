use tile_core::{
    CatalogOracle, Color, DecodeError, Edge, EngineError, ErrorSeverity, Part, PartRef,
    Revenue, StaticCatalog, Tile, TileError, TileOptions, decode,
};

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_tile(Color::Yellow, "9", "path=a:0,b:3")
        .with_tile(Color::Yellow, "57", "city=revenue:20;path=a:0,b:_0;path=a:_0,b:3")
        .with_tile(Color::Green, "19", "path=a:0,b:3;path=a:2,b:4")
        .with_tile(Color::Green, "19B", "path=a:0,b:3;path=a:2,b:4;label=B")
        .with_tile(Color::Green, "15", "city=revenue:30,slots:2;path=a:0,b:_0;path=a:1,b:_0;path=a:3,b:_0;path=a:4,b:_0")
}

fn edges(values: &[i64]) -> Vec<Edge> {
    values.iter().copied().map(Edge::new).collect()
}

#[test]
fn back_reference_resolves_to_decoded_city() {
    let parts = decode("city=revenue:30;path=a:0,b:_0").unwrap();
    assert_eq!(parts.len(), 2);

    let Part::City(city) = &parts[0] else {
        panic!("expected a city, got {:?}", parts[0]);
    };
    assert_eq!(city.center.revenue, Revenue::Flat(30));

    let path = parts[1].as_path().unwrap();
    assert_eq!(path.a.edge(), Some(Edge::new(0)));
    assert_eq!(path.b.node_ref(), Some(PartRef(0)));
}

#[test]
fn straight_yellow_upgrades_to_unlabeled_green_superset() {
    let catalog = catalog();
    let yellow = Tile::lookup(&catalog, "9", TileOptions::default()).unwrap();
    let green = Tile::lookup(&catalog, "19", TileOptions::default()).unwrap();

    assert_eq!(yellow.color(), Color::Yellow);
    assert_eq!(green.color(), Color::Green);
    assert!(yellow.upgrades_to(&green, false));
}

#[test]
fn label_mismatch_blocks_upgrade() {
    let catalog = catalog();
    let yellow = Tile::lookup(&catalog, "9", TileOptions::default()).unwrap();
    let labeled = Tile::lookup(&catalog, "19B", TileOptions::default()).unwrap();

    assert!(!yellow.upgrades_to(&labeled, false));
    assert!(yellow.upgrades_to(&labeled, true));
}

#[test]
fn upgrade_checks_candidate_at_its_current_rotation() {
    let catalog = catalog();
    let city = Tile::lookup(&catalog, "57", TileOptions::default()).unwrap();
    let mut green = Tile::lookup(&catalog, "15", TileOptions::default()).unwrap();
    assert!(city.upgrades_to(&green, false));

    // The existing tile may turn freely; the candidate's own rotation is fixed.
    green.rotate(Some(Edge::new(1)));
    assert_eq!(green.exits(), edges(&[1, 2, 4, 5]).as_slice());
    assert!(city.upgrades_to(&green, false));
}

#[test]
fn pathless_town_sits_opposite_the_city() {
    let tile = Tile::from_code(
        "dit",
        Color::Yellow,
        "city=revenue:20;town=revenue:10;path=a:1,b:_0",
        TileOptions::default(),
    )
    .unwrap();

    let placement = tile.preferred_city_town_edges();
    assert_eq!(placement.get(&PartRef(0)), Some(&Edge::new(1)));
    assert_eq!(placement.get(&PartRef(1)), Some(&Edge::new(4)));
}

#[test]
fn rotations_compose_modulo_six() {
    let mut tile = Tile::from_code("7", Color::Yellow, "path=a:0,b:1", TileOptions::default())
        .unwrap();
    tile.rotate(Some(Edge::new(4)));
    assert_eq!(tile.exits(), edges(&[4, 5]).as_slice());

    tile.rotate(Some(Edge::new(4).rotate(3)));
    assert_eq!(tile.rotation(), Edge::new(1));
    assert_eq!(tile.exits(), edges(&[1, 2]).as_slice());
}

#[test]
fn successive_rotations_compose_on_path_data() {
    let code = "city=revenue:20;town=revenue:10;path=a:0,b:_0;path=a:_0,b:_1;path=a:_1,b:2;path=a:1,b:4";
    let raw = Tile::from_code("mixed", Color::Yellow, code, TileOptions::default()).unwrap();
    let raw_paths: Vec<_> = raw.raw_paths().cloned().collect();

    for r1 in Edge::ALL {
        for r2 in 0..6 {
            let mut tile = raw.clone();
            tile.rotate(Some(r1));
            tile.rotate(Some(r1.rotate(r2)));

            let ticks = (i64::from(r1.num()) + r2) % 6;
            let expected: Vec<_> = raw_paths.iter().map(|path| path.rotate(ticks)).collect();
            assert_eq!(tile.paths(), expected.as_slice(), "r1={r1} r2={r2}");
            assert_eq!(tile.rotation(), Edge::new(ticks));
        }
    }
}

#[test]
fn unknown_part_types_are_ignored() {
    let tile = Tile::from_code(
        "x",
        Color::Yellow,
        "frame=color:red;path=a:0,b:3",
        TileOptions::default(),
    )
    .unwrap();
    assert_eq!(tile.parts().len(), 1);
    assert_eq!(tile.exits(), edges(&[0, 3]).as_slice());
}

#[test]
fn missing_tile_is_a_validation_error() {
    let err = Tile::lookup(&catalog(), "611", TileOptions::default()).unwrap_err();
    assert_eq!(err, TileError::NotFound("611".to_string()));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.error_code(), "TILE_NOT_FOUND");
}

#[test]
fn corrupt_catalog_code_is_fatal() {
    let catalog = StaticCatalog::new().with_tile(Color::Yellow, "bad", "path=a:0,b:_3");
    let err = Tile::lookup(&catalog, "bad", TileOptions::default()).unwrap_err();
    assert_eq!(
        err,
        TileError::Decode(DecodeError::BackReferenceOutOfRange { index: 3, cached: 0 })
    );
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
    assert_eq!(err.error_code(), "DECODE_BACK_REFERENCE_OUT_OF_RANGE");
}

#[test]
fn catalog_lists_every_tile() {
    let catalog = catalog();
    assert_eq!(catalog.names().len(), 5);
    assert!(catalog.entry("57").is_some());
}
