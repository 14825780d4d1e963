//! Texture loading for the desk scene.
//!
//! Images are decoded to tightly packed RGBA8 rows, top row first, which is the
//! layout the GPU upload expects. A missing or broken file never stops the
//! viewer: [`TextureLibrary::load`] substitutes a checkerboard and records the
//! slot as missing.

use deskscene_scene::TextureSlot;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Errors from loading an image file.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has no pixels")]
    Empty { path: PathBuf },
}

/// Decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_memory(&bytes, path)
    }

    /// Decode an encoded image; `path` is only used for error reporting.
    pub fn from_memory(bytes: &[u8], path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let image = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// 1x1 image of a single color.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        }
    }

    /// `size` x `size` checkerboard of 8x8 pixel cells.
    pub fn checkerboard(size: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let size = size.max(1);
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let cell = if ((x / 8) + (y / 8)) % 2 == 0 { a } else { b };
                pixels.extend_from_slice(&cell);
            }
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let p = &self.pixels[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

const FALLBACK_A: [u8; 4] = [255, 0, 255, 255];
const FALLBACK_B: [u8; 4] = [32, 32, 32, 255];

/// Decoded images for each texture slot the scene uses.
#[derive(Debug, Clone, Default)]
pub struct TextureLibrary {
    images: BTreeMap<TextureSlot, TextureImage>,
    missing: Vec<TextureSlot>,
}

impl TextureLibrary {
    /// Load every slot from `dir`, substituting a checkerboard for any file
    /// that cannot be read or decoded.
    pub fn load(dir: impl AsRef<Path>, slots: impl IntoIterator<Item = TextureSlot>) -> Self {
        let dir = dir.as_ref();
        let mut library = Self::default();
        for slot in slots {
            let image = match load_slot(dir, slot) {
                Ok(image) => {
                    tracing::debug!(
                        "loaded texture {} ({}x{})",
                        slot.file_name(),
                        image.width,
                        image.height
                    );
                    image
                }
                Err(e) => {
                    tracing::warn!("{e}; using fallback texture");
                    library.missing.push(slot);
                    TextureImage::checkerboard(64, FALLBACK_A, FALLBACK_B)
                }
            };
            library.images.insert(slot, image);
        }
        library
    }

    /// Load every slot from `dir`, failing on the first error.
    pub fn load_strict(
        dir: impl AsRef<Path>,
        slots: impl IntoIterator<Item = TextureSlot>,
    ) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let mut library = Self::default();
        for slot in slots {
            library.images.insert(slot, load_slot(dir, slot)?);
        }
        Ok(library)
    }

    pub fn get(&self, slot: TextureSlot) -> Option<&TextureImage> {
        self.images.get(&slot)
    }

    /// Slots that fell back to the placeholder image.
    pub fn missing(&self) -> &[TextureSlot] {
        &self.missing
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextureSlot, &TextureImage)> {
        self.images.iter().map(|(slot, image)| (*slot, image))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Load the image for one slot from `dir`.
pub fn load_slot(dir: &Path, slot: TextureSlot) -> Result<TextureImage, AssetError> {
    TextureImage::load(dir.join(slot.file_name()))
}

pub fn crate_info() -> &'static str {
    "deskscene-assets v0.1.0"
}
