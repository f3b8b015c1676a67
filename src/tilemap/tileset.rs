use std::fmt;

use image::RgbaImage;
use serde::Deserialize;

use crate::assets::{read_json, AssetPaths, ImageLoader, ImageRegion};
use crate::error::{LoadError, Result};
use crate::tilemap::{TilemapDocument, TILE_SIZE};

/// Cells per row in a uniform tileset image.
pub const UNIFORM_COLUMNS: u32 = 28;

// ── Descriptors ──────────────────────────────────────────────────────────────

/// On-disk tileset description. The `kind` field picks the variant.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TilesetDescriptor {
    /// One image sliced into a grid of 16×16 cells.
    Uniform { image: String },
    /// One image per tile, in list order.
    Atlas { tiles: Vec<AtlasTileDescriptor> },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasTileDescriptor {
    pub id: u32,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TilesetKind {
    Uniform,
    Atlas,
}

// ── TileSource ───────────────────────────────────────────────────────────────

/// A loaded tileset: maps a tileset-local id to the pixels that draw it.
pub trait TileSource {
    fn kind(&self) -> TilesetKind;

    /// Upper bound of the local id range (`0..tile_count`).
    fn tile_count(&self) -> u32;

    /// True when `local_id` maps to pixels that exist in the source image.
    fn contains(&self, local_id: u32) -> bool {
        local_id < self.tile_count()
    }

    /// Region for `local_id`. Ids this tileset does not `contains` are a caller error.
    fn resolve_region(&self, local_id: u32) -> ImageRegion<'_>;
}

/// Fixed grid of 16×16 cells, [`UNIFORM_COLUMNS`] per row.
pub struct UniformTileset {
    image: RgbaImage,
}

impl UniformTileset {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl TileSource for UniformTileset {
    fn kind(&self) -> TilesetKind {
        TilesetKind::Uniform
    }

    fn tile_count(&self) -> u32 {
        UNIFORM_COLUMNS * (self.image.height() / TILE_SIZE)
    }

    /// Images narrower than a full row leave the right-hand columns empty.
    fn contains(&self, local_id: u32) -> bool {
        local_id < self.tile_count() && (local_id % UNIFORM_COLUMNS + 1) * TILE_SIZE <= self.image.width()
    }

    fn resolve_region(&self, local_id: u32) -> ImageRegion<'_> {
        let x = (local_id % UNIFORM_COLUMNS) * TILE_SIZE;
        let y = (local_id / UNIFORM_COLUMNS) * TILE_SIZE;
        ImageRegion::crop(&self.image, x, y, TILE_SIZE, TILE_SIZE)
    }
}

/// Independently sized images, one per local id.
pub struct AtlasTileset {
    images: Vec<RgbaImage>,
}

impl AtlasTileset {
    pub fn new(images: Vec<RgbaImage>) -> Self {
        Self { images }
    }
}

impl TileSource for AtlasTileset {
    fn kind(&self) -> TilesetKind {
        TilesetKind::Atlas
    }

    fn tile_count(&self) -> u32 {
        self.images.len() as u32
    }

    fn resolve_region(&self, local_id: u32) -> ImageRegion<'_> {
        ImageRegion::full(&self.images[local_id as usize])
    }
}

// ── TilesetResolver ──────────────────────────────────────────────────────────

struct Entry {
    first_gid: u32,
    source: Box<dyn TileSource>,
}

/// Resolves global tile ids across every tileset of a world.
#[derive(Default)]
pub struct TilesetResolver {
    /// Ascending by `first_gid`.
    entries: Vec<Entry>,
}

impl fmt::Debug for TilesetResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.first_gid, e.source.kind(), e.source.tile_count())))
            .finish()
    }
}

impl TilesetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tileset. Must be called in ascending `first_gid` order.
    pub fn push(&mut self, first_gid: u32, source: impl TileSource + 'static) {
        debug_assert!(
            self.entries.last().is_none_or(|e| e.first_gid < first_gid),
            "tilesets must be pushed in ascending first_gid order"
        );
        self.entries.push(Entry { first_gid, source: Box::new(source) });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build every tileset referenced by `doc`, eagerly loading all images,
    /// then check that every tile id the layers use can be resolved.
    pub fn load(
        doc: &TilemapDocument,
        paths: &AssetPaths,
        loader: &mut dyn ImageLoader,
    ) -> Result<Self> {
        let mut resolver = Self::new();

        for reference in &doc.tilesets {
            let path = paths.tileset(&reference.source);
            let descriptor: TilesetDescriptor = read_json(&path)?;

            match descriptor {
                TilesetDescriptor::Uniform { image } => {
                    let img = loader.load(&paths.tileset_image(&image))?;
                    resolver.push(reference.first_gid, UniformTileset::new(img));
                }
                TilesetDescriptor::Atlas { tiles } => {
                    if tiles.is_empty() {
                        return Err(LoadError::invalid(&path, "atlas tileset lists no tiles"));
                    }
                    let mut images = Vec::with_capacity(tiles.len());
                    for (position, tile) in tiles.iter().enumerate() {
                        if tile.id as usize != position {
                            tracing::warn!(
                                path = %path.display(),
                                id = tile.id,
                                position,
                                "atlas tile id does not match its list position; using list order"
                            );
                        }
                        let image_path = paths.tileset_image(&tile.image);
                        let img = loader.load(&image_path)?;
                        if img.dimensions() != (tile.image_width, tile.image_height) {
                            tracing::warn!(
                                path = %image_path.display(),
                                declared = ?(tile.image_width, tile.image_height),
                                actual = ?img.dimensions(),
                                "atlas image size differs from descriptor"
                            );
                        }
                        images.push(img);
                    }
                    resolver.push(reference.first_gid, AtlasTileset::new(images));
                }
            }

            if let Some(entry) = resolver.entries.last() {
                tracing::debug!(
                    path = %path.display(),
                    first_gid = entry.first_gid,
                    kind = ?entry.source.kind(),
                    tiles = entry.source.tile_count(),
                    "tileset ready"
                );
            }
        }

        resolver.check_document(doc)?;
        Ok(resolver)
    }

    fn owner(&self, gid: u32) -> Option<&Entry> {
        let idx = self.entries.partition_point(|e| e.first_gid <= gid);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    /// True when some tileset's range actually covers `gid`.
    pub fn owns(&self, gid: u32) -> bool {
        gid != 0
            && self
                .owner(gid)
                .is_some_and(|e| e.source.contains(gid - e.first_gid))
    }

    /// Fail on the first non-empty tile id no tileset can resolve.
    pub fn check_document(&self, doc: &TilemapDocument) -> Result<()> {
        for (layer, data) in doc.layers.iter().enumerate() {
            for placed in data.placed_tiles() {
                if !self.owns(placed.gid) {
                    return Err(LoadError::UnresolvedTile {
                        layer,
                        index: placed.index,
                        gid: placed.gid,
                    });
                }
            }
        }
        Ok(())
    }

    /// Image region for a global tile id.
    ///
    /// # Panics
    ///
    /// If `gid` lies outside every tileset's range. Worlds that passed
    /// [`TilesetResolver::check_document`] never hit this.
    pub fn resolve(&self, gid: u32) -> ImageRegion<'_> {
        let idx = self.entries.partition_point(|e| e.first_gid <= gid);
        let entry = &self.entries[idx - 1];
        entry.source.resolve_region(gid - entry.first_gid)
    }
}
