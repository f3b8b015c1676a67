// =============================================================================
// WORLD — the single owner of all game state
//
// One tick runs, strictly in order:
//   input -> enemy steering -> motion + collision -> potion pickups -> camera
// Each stage only borrows the fields it needs.
// =============================================================================

use std::path::PathBuf;

use glam::Vec2;
use image::RgbaImage;

use crate::ai::steer_enemies;
use crate::assets::{AssetPaths, ImageLoader, ImageRegion};
use crate::camera::Camera;
use crate::collision::{move_and_collide, CollisionField};
use crate::config::{GameConfig, SpawnRoster, SpritePaths};
use crate::entity::{Enemy, Player, Potion};
use crate::error::{LoadError, Result};
use crate::geometry::{Aabb, ENTITY_SIZE};
use crate::input::MoveIntent;
use crate::pickup::apply_potions;
use crate::tilemap::tileset::TilesetResolver;
use crate::tilemap::{TilemapDocument, TILE_SIZE};

// ── Sprites ──────────────────────────────────────────────────────────────────

/// Source images for entities. Each entity draws the top-left 16×16 cell.
#[derive(Debug)]
pub struct EntitySprites {
    pub player: RgbaImage,
    pub enemy: RgbaImage,
    pub potion: RgbaImage,
}

impl EntitySprites {
    /// Load all three sprites. Each must hold at least one full entity cell.
    pub fn load(paths: &AssetPaths, sprites: &SpritePaths, loader: &mut dyn ImageLoader) -> Result<Self> {
        Ok(Self {
            player: Self::load_one(paths.asset(&sprites.player), loader)?,
            enemy: Self::load_one(paths.asset(&sprites.enemy), loader)?,
            potion: Self::load_one(paths.asset(&sprites.potion), loader)?,
        })
    }

    fn load_one(path: PathBuf, loader: &mut dyn ImageLoader) -> Result<RgbaImage> {
        let image = loader.load(&path)?;
        let size = ENTITY_SIZE as u32;
        if image.width() < size || image.height() < size {
            return Err(LoadError::invalid(
                &path,
                format!("sprite is {}x{}, needs at least {size}x{size}", image.width(), image.height()),
            ));
        }
        Ok(image)
    }

    fn cell(image: &RgbaImage) -> ImageRegion<'_> {
        let size = ENTITY_SIZE as u32;
        ImageRegion::crop(image, 0, 0, size, size)
    }
}

// ── Draw list ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Tile { layer: usize },
    Player,
    Potion,
    Enemy,
}

/// One image to draw at a world position. Add the camera offset before
/// presenting.
#[derive(Copy, Clone, Debug)]
pub struct DrawCommand<'a> {
    pub kind: DrawKind,
    pub region: ImageRegion<'a>,
    pub position: Vec2,
}

// ── World ────────────────────────────────────────────────────────────────────

pub struct World {
    pub tilemap: TilemapDocument,
    pub tilesets: TilesetResolver,
    pub collision: CollisionField,
    pub sprites: EntitySprites,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub potions: Vec<Potion>,
    pub camera: Camera,
    viewport: Vec2,
    player_speed: f32,
    enemy_speed: f32,
    ticks: u64,
}

impl World {
    /// Assemble a world from already-loaded parts. The camera starts on the
    /// player.
    pub fn new(
        config: &GameConfig,
        tilemap: TilemapDocument,
        tilesets: TilesetResolver,
        sprites: EntitySprites,
        roster: SpawnRoster,
    ) -> Self {
        let mut world = Self {
            tilemap,
            tilesets,
            collision: CollisionField::new(roster.colliders),
            sprites,
            player: roster.player,
            enemies: roster.enemies,
            potions: roster.potions,
            camera: Camera::new(),
            viewport: config.viewport(),
            player_speed: config.player_speed,
            enemy_speed: config.enemy_speed,
            ticks: 0,
        };
        world.update_camera();
        world
    }

    /// Load every descriptor and image the world needs. Any failure aborts.
    pub fn load(config: &GameConfig, roster: SpawnRoster, loader: &mut dyn ImageLoader) -> Result<Self> {
        let paths = config.asset_paths();
        let tilemap = TilemapDocument::load(&paths.asset(&config.world_path))?;
        let tilesets = TilesetResolver::load(&tilemap, &paths, loader)?;
        let sprites = EntitySprites::load(&paths, &config.sprites, loader)?;

        tracing::info!(
            tilesets = tilesets.len(),
            enemies = roster.enemies.len(),
            potions = roster.potions.len(),
            colliders = roster.colliders.len(),
            "world loaded"
        );
        Ok(Self::new(config, tilemap, tilesets, sprites, roster))
    }

    /// Advance the simulation by one step. Never fails.
    pub fn tick(&mut self, intent: MoveIntent) {
        self.player.body.velocity = intent.velocity(self.player_speed);
        steer_enemies(&mut self.enemies, self.player.body.position, self.enemy_speed);

        move_and_collide(&mut self.player.body, &self.collision);
        for enemy in &mut self.enemies {
            move_and_collide(&mut enemy.body, &self.collision);
        }

        apply_potions(&mut self.player, &self.potions);

        self.update_camera();
        self.ticks += 1;
    }

    fn update_camera(&mut self) {
        let world = self.world_size();
        self.camera.follow_target(self.player.body.center(), self.viewport);
        self.camera.constrain(world, self.viewport);
    }

    /// Tiles layer by layer, then the player, potions and enemies.
    ///
    /// Tiles are bottom-aligned to their cell, so images taller than a cell
    /// extend upwards.
    pub fn draw_list(&self) -> Vec<DrawCommand<'_>> {
        let mut out = Vec::new();

        for (layer, data) in self.tilemap.layers.iter().enumerate() {
            for placed in data.placed_tiles() {
                let region = self.tilesets.resolve(placed.gid);
                let x = (placed.col as u32 * TILE_SIZE) as f32;
                let y = ((placed.row as u32 + 1) * TILE_SIZE) as f32 - region.height as f32;
                out.push(DrawCommand {
                    kind: DrawKind::Tile { layer },
                    region,
                    position: Vec2::new(x, y),
                });
            }
        }

        out.push(DrawCommand {
            kind: DrawKind::Player,
            region: EntitySprites::cell(&self.sprites.player),
            position: self.player.body.position,
        });
        for potion in &self.potions {
            out.push(DrawCommand {
                kind: DrawKind::Potion,
                region: EntitySprites::cell(&self.sprites.potion),
                position: potion.body.position,
            });
        }
        for enemy in &self.enemies {
            out.push(DrawCommand {
                kind: DrawKind::Enemy,
                region: EntitySprites::cell(&self.sprites.enemy),
                position: enemy.body.position,
            });
        }

        out
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera.offset
    }

    /// Collider rectangles for a debug overlay.
    pub fn colliders(&self) -> &[Aabb] {
        self.collision.colliders()
    }

    pub fn world_size(&self) -> Vec2 {
        self.tilemap.pixel_size()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
