// ── Game configuration ────────────────────────────────────────────────────────

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;

use crate::assets::AssetPaths;
use crate::entity::{Enemy, Player, Potion};
use crate::error::{LoadError, Result};
use crate::geometry::Aabb;

/// Sprite images for the entity kinds, relative to the asset root.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpritePaths {
    pub player: PathBuf,
    pub enemy: PathBuf,
    pub potion: PathBuf,
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            player: "images/player.png".into(),
            enemy: "images/enemy.png".into(),
            potion: "images/potion.png".into(),
        }
    }
}

/// Static settings fixed before the tick loop starts.
///
/// Every field has a default, so a partial JSON file only overrides what it
/// names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical render size in pixels.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Pixels per tick per held direction.
    pub player_speed: f32,
    /// Pixels per tick per axis for chasing enemies.
    pub enemy_speed: f32,
    pub asset_root: PathBuf,
    /// World descriptor, relative to `asset_root`.
    pub world_path: PathBuf,
    pub sprites: SpritePaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 320,
            viewport_height: 240,
            player_speed: 2.0,
            enemy_speed: 1.0,
            asset_root: "./assets".into(),
            world_path: "maps/spawn.json".into(),
            sprites: SpritePaths::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width as f32, self.viewport_height as f32)
    }

    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths::new(&self.asset_root)
    }
}

// ── Spawn roster ──────────────────────────────────────────────────────────────

/// Everything placed in the world at startup besides the tilemap.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnRoster {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub potions: Vec<Potion>,
    pub colliders: Vec<Aabb>,
}

impl Default for SpawnRoster {
    fn default() -> Self {
        Self {
            player: Player::new(150.0, 80.0, 50),
            enemies: vec![
                Enemy::new(50.0, 50.0, false),
                Enemy::new(75.0, 75.0, false),
                Enemy::new(150.0, 150.0, false),
            ],
            potions: vec![Potion::new(300.0, 80.0, 20)],
            colliders: vec![
                // Pond south-west of spawn.
                Aabb::new(96.0, 176.0, 48.0, 32.0),
                // Boulder north of the path.
                Aabb::new(224.0, 32.0, 16.0, 16.0),
            ],
        }
    }
}
