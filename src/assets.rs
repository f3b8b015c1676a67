// ── Asset access ─────────────────────────────────────────────────────────────
//
// Descriptor files are JSON read straight from disk. Pixel data goes through
// the `ImageLoader` trait so hosts (and tests) can decide where images come
// from; the default implementation decodes files with the `image` crate.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::{RgbaImage, SubImage};
use serde::de::DeserializeOwned;

use crate::error::{LoadError, Result};

// ── ImageLoader ──────────────────────────────────────────────────────────────

/// Source of decoded RGBA pixel buffers, keyed by path.
pub trait ImageLoader {
    fn load(&mut self, path: &Path) -> Result<RgbaImage>;
}

/// Decodes images from the filesystem.
#[derive(Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&mut self, path: &Path) -> Result<RgbaImage> {
        let img = image::open(path).map_err(|source| LoadError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(img.to_rgba8())
    }
}

/// Serves pre-built images from memory. Missing entries fail like a missing
/// file would.
#[derive(Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<PathBuf, RgbaImage>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, image: RgbaImage) {
        self.images.insert(path.into(), image);
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&mut self, path: &Path) -> Result<RgbaImage> {
        self.images.get(path).cloned().ok_or_else(|| LoadError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "image not registered"),
        })
    }
}

// ── ImageRegion ──────────────────────────────────────────────────────────────

/// A rectangular window onto a loaded image. Borrowed, so resolving a tile
/// never copies pixels.
#[derive(Copy, Clone)]
pub struct ImageRegion<'a> {
    image: &'a RgbaImage,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a> ImageRegion<'a> {
    /// The whole image.
    pub fn full(image: &'a RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self { image, x: 0, y: 0, width, height }
    }

    pub fn crop(image: &'a RgbaImage, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { image, x, y, width, height }
    }

    /// The backing image this region points into.
    pub fn source(&self) -> &'a RgbaImage {
        self.image
    }

    /// `(x, y, width, height)` within the backing image.
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// True when this region is backed by exactly `image` (pointer identity).
    pub fn is_backed_by(&self, image: &RgbaImage) -> bool {
        std::ptr::eq(self.image, image)
    }

    pub fn view(&self) -> SubImage<&'a RgbaImage> {
        image::imageops::crop_imm(self.image, self.x, self.y, self.width, self.height)
    }

    /// Copy the region's pixels into a new buffer.
    pub fn to_image(&self) -> RgbaImage {
        self.view().to_image()
    }
}

impl fmt::Debug for ImageRegion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.image.dimensions();
        f.debug_struct("ImageRegion")
            .field("source", &format_args!("{w}x{h}"))
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

// ── AssetPaths ───────────────────────────────────────────────────────────────

/// Resolves the relative paths found inside descriptors against the asset root.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A path given relative to the asset root (world descriptor, sprites).
    pub fn asset(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Tileset sources in the world descriptor are relative to `maps/`.
    pub fn tileset(&self, source: &str) -> PathBuf {
        self.root.join("maps").join(source)
    }

    /// Image paths inside tileset descriptors were authored relative to the
    /// descriptor, possibly with Windows separators. Normalise them and
    /// re-anchor on the asset root.
    pub fn tileset_image(&self, raw: &str) -> PathBuf {
        self.root.join(normalize_image_path(raw))
    }
}

/// Lexically clean `raw`: unify separators, drop `.` and empty segments,
/// fold `dir/..` pairs, then strip up to two leading `..` segments.
pub fn normalize_image_path(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();
    for seg in unified.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(&last) if last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let leading = parts.iter().take(2).take_while(|s| **s == "..").count();
    parts[leading..].join("/")
}

// ── JSON ─────────────────────────────────────────────────────────────────────

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
