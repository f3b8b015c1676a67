// =============================================================================
// TILEMAP — the parsed world descriptor
//
// A world is an ordered stack of row-major tile layers plus the tilesets that
// own the global tile ids used in them. Built once at load time and read-only
// from then on.
// =============================================================================

pub mod tileset;

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::assets::read_json;
use crate::error::{LoadError, Result};

/// Edge length of a map cell (and of a uniform tileset cell), in pixels.
pub const TILE_SIZE: u32 = 16;

/// Global tile id meaning "nothing here".
pub const EMPTY_TILE: u32 = 0;

// ── Layers ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TilemapLayer {
    /// Width in tiles.
    pub width: usize,
    /// Height in tiles.
    pub height: usize,
    /// Row-major global tile ids, `width * height` long.
    #[serde(rename = "data")]
    pub tiles: Vec<u32>,
    #[serde(default)]
    pub name: String,
}

/// A non-empty cell of a layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacedTile {
    /// Index into the layer's tile vector.
    pub index: usize,
    pub col: usize,
    pub row: usize,
    pub gid: u32,
}

impl TilemapLayer {
    pub fn tile(&self, col: usize, row: usize) -> Option<u32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.tiles.get(row * self.width + col).copied()
    }

    /// All cells holding a real tile, in row-major order. Id 0 is skipped.
    pub fn placed_tiles(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        let width = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &gid)| gid != EMPTY_TILE)
            .map(move |(index, &gid)| PlacedTile {
                index,
                col: index % width,
                row: index / width,
                gid,
            })
    }
}

// ── Tileset references ───────────────────────────────────────────────────────

/// Where a tileset lives and which global ids it owns (from `first_gid` up to
/// the next reference's `first_gid`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TilesetReference {
    #[serde(rename = "firstgid")]
    pub first_gid: u32,
    pub source: String,
}

// ── TilemapDocument ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TilemapDocument {
    pub layers: Vec<TilemapLayer>,
    /// Sorted ascending by `first_gid`.
    pub tilesets: Vec<TilesetReference>,
}

impl TilemapDocument {
    /// Read and validate a world descriptor from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let doc: TilemapDocument = read_json(path)?;
        doc.validate(path)?;
        tracing::info!(
            path = %path.display(),
            layers = doc.layers.len(),
            tilesets = doc.tilesets.len(),
            "loaded world descriptor"
        );
        Ok(doc)
    }

    /// Parse a descriptor held in memory. `origin` is only used in errors.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let doc: TilemapDocument = serde_json::from_str(json).map_err(|source| LoadError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        doc.validate(origin)?;
        Ok(doc)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.layers.is_empty() {
            return Err(LoadError::invalid(path, "world has no layers"));
        }

        let base = &self.layers[0];
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.width == 0 || layer.height == 0 {
                return Err(LoadError::invalid(
                    path,
                    format!("layer {i} is {}x{}, both edges must be non-zero", layer.width, layer.height),
                ));
            }
            if (layer.width, layer.height) != (base.width, base.height) {
                return Err(LoadError::invalid(
                    path,
                    format!(
                        "layer {i} is {}x{}, layer 0 is {}x{}",
                        layer.width, layer.height, base.width, base.height
                    ),
                ));
            }

            let expected = edge_in_pixels(layer.width)
                .and(edge_in_pixels(layer.height))
                .and(layer.width.checked_mul(layer.height));
            let Some(expected) = expected else {
                return Err(LoadError::invalid(
                    path,
                    format!("layer {i} is too large: {}x{}", layer.width, layer.height),
                ));
            };
            if layer.tiles.len() != expected {
                return Err(LoadError::invalid(
                    path,
                    format!(
                        "layer {i} holds {} tiles, expected {}x{} = {expected}",
                        layer.tiles.len(),
                        layer.width,
                        layer.height
                    ),
                ));
            }
        }

        let mut previous = EMPTY_TILE;
        for reference in &self.tilesets {
            if reference.first_gid <= previous {
                return Err(LoadError::invalid(
                    path,
                    format!(
                        "tileset {:?} has firstgid {}, must be above {previous}",
                        reference.source, reference.first_gid
                    ),
                ));
            }
            previous = reference.first_gid;
        }

        Ok(())
    }

    /// Index of the tileset owning `gid`: the greatest `first_gid <= gid`.
    pub fn owning_tileset(&self, gid: u32) -> Option<usize> {
        self.tilesets
            .partition_point(|t| t.first_gid <= gid)
            .checked_sub(1)
    }

    /// World size in pixels, taken from the first layer.
    pub fn pixel_size(&self) -> Vec2 {
        let base = &self.layers[0];
        let tile = TILE_SIZE as f32;
        Vec2::new(base.width as f32 * tile, base.height as f32 * tile)
    }
}

/// Pixel extent of `tiles` cells, if it fits in a `u32`.
fn edge_in_pixels(tiles: usize) -> Option<u32> {
    u32::try_from(tiles).ok()?.checked_mul(TILE_SIZE)
}
