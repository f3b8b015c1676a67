use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tilewalk::assets::{FsImageLoader, MemoryImageLoader};
use tilewalk::config::{GameConfig, SpawnRoster};
use tilewalk::world::{DrawKind, World};
use tilewalk::LoadError;

// ── Fixtures ──────────────────────────────────────────────────────────────────

const WORLD: &str = r#"{
    "layers": [
        { "data": [1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 29, 0, 0, 0, 0, 0, 0, 0, 30], "width": 5, "height": 4, "name": "ground" }
    ],
    "tilesets": [
        { "firstgid": 1, "source": "terrain.json" },
        { "firstgid": 29, "source": "buildings.json" }
    ]
}"#;

const TERRAIN: &str = r#"{ "kind": "uniform", "image": "..\\images\\terrain.png", "tilewidth": 16 }"#;

const BUILDINGS: &str = r#"{
    "kind": "atlas",
    "tiles": [
        { "id": 0, "image": "../images/buildings/house.png", "imageWidth": 32, "imageHeight": 48 },
        { "id": 1, "image": "../../images/buildings/well.png", "imageWidth": 16, "imageHeight": 24 }
    ]
}"#;

fn save(root: &Path, rel: &str, img: RgbaImage) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save(&path).unwrap();
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Lay out a complete asset tree under `root`.
fn write_assets(root: &Path) {
    write(root, "maps/spawn.json", WORLD);
    write(root, "maps/terrain.json", TERRAIN);
    write(root, "maps/buildings.json", BUILDINGS);

    let mut terrain = RgbaImage::new(448, 32);
    terrain.put_pixel(16, 0, Rgba([1, 2, 3, 255]));
    save(root, "images/terrain.png", terrain);
    save(root, "images/buildings/house.png", RgbaImage::new(32, 48));
    save(root, "images/buildings/well.png", RgbaImage::new(16, 24));

    for sprite in ["player", "enemy", "potion"] {
        save(root, &format!("images/{sprite}.png"), RgbaImage::new(16, 16));
    }
}

fn config(root: &Path) -> GameConfig {
    GameConfig { asset_root: root.to_path_buf(), ..GameConfig::default() }
}

// ── Success ───────────────────────────────────────────────────────────────────

#[test]
fn loads_world_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());

    let world = World::load(&config(dir.path()), SpawnRoster::default(), &mut FsImageLoader).unwrap();

    assert_eq!(world.tilesets.len(), 2);
    assert_eq!(world.world_size(), glam::Vec2::new(80.0, 64.0));

    let tiles: Vec<_> = world
        .draw_list()
        .into_iter()
        .filter(|d| matches!(d.kind, DrawKind::Tile { .. }))
        .collect();
    assert_eq!(tiles.len(), 4);
    assert_eq!(tiles[1].region.bounds(), (16, 0, 16, 16));
    assert_eq!(tiles[1].region.to_image().get_pixel(0, 0).0, [1, 2, 3, 255]);
    assert_eq!(tiles[2].region.bounds(), (0, 0, 32, 48));
    assert_eq!(tiles[3].region.bounds(), (0, 0, 16, 24));
}

#[test]
fn world_smaller_than_viewport_pins_camera() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());

    let mut world = World::load(&config(dir.path()), SpawnRoster::default(), &mut FsImageLoader).unwrap();
    world.tick(tilewalk::input::MoveIntent::RIGHT);
    assert_eq!(world.camera_offset(), glam::Vec2::ZERO);
}

#[test]
fn memory_loader_can_stand_in_for_disk_images() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "maps/spawn.json", WORLD);
    write(dir.path(), "maps/terrain.json", TERRAIN);
    write(dir.path(), "maps/buildings.json", BUILDINGS);

    let root = dir.path();
    let mut loader = MemoryImageLoader::new();
    loader.insert(root.join("images/terrain.png"), RgbaImage::new(448, 16));
    loader.insert(root.join("images/buildings/house.png"), RgbaImage::new(32, 48));
    loader.insert(root.join("images/buildings/well.png"), RgbaImage::new(16, 24));
    for sprite in ["player", "enemy", "potion"] {
        loader.insert(root.join(format!("images/{sprite}.png")), RgbaImage::new(16, 16));
    }

    let world = World::load(&config(root), SpawnRoster::default(), &mut loader).unwrap();
    assert_eq!(world.tilesets.len(), 2);
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn missing_world_descriptor_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = World::load(&config(dir.path()), SpawnRoster::default(), &mut FsImageLoader)
        .err()
        .unwrap();
    assert!(matches!(err, LoadError::Io { .. }), "{err}");
    assert_eq!(err.path(), Some(dir.path().join("maps/spawn.json").as_path()));
}

#[test]
fn tileset_without_kind_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());
    write(dir.path(), "maps/terrain.json", r#"{ "image": "../images/terrain.png" }"#);

    let err = World::load(&config(dir.path()), SpawnRoster::default(), &mut FsImageLoader)
        .err()
        .unwrap();
    assert!(matches!(err, LoadError::Parse { .. }), "{err}");
    assert_eq!(err.path(), Some(dir.path().join("maps/terrain.json").as_path()));
}

#[test]
fn missing_atlas_image_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());
    fs::remove_file(dir.path().join("images/buildings/well.png")).unwrap();

    let err = World::load(&config(dir.path()), SpawnRoster::default(), &mut FsImageLoader)
        .err()
        .unwrap();
    let expected: PathBuf = dir.path().join("images/buildings/well.png");
    assert!(matches!(err, LoadError::Image { .. }), "{err}");
    assert_eq!(err.path(), Some(expected.as_path()));
}

#[test]
fn tile_beyond_tileset_range_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());
    // Atlas owns 29 and 30 only.
    write(dir.path(), "maps/spawn.json", &WORLD.replace("30]", "31]"));

    let err = World::load(&config(dir.path()), SpawnRoster::default(), &mut FsImageLoader)
        .err()
        .unwrap();
    assert!(matches!(err, LoadError::UnresolvedTile { gid: 31, .. }), "{err}");
    assert_eq!(err.path(), None);
}
