//! Decoded tile results.

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::pyramid::RawChunk;

/// Pixel buffer of one decoded tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl TileImage {
    /// Interpret a raw chunk as a tile image.
    ///
    /// Returns `None` when the chunk is unusable: no bytes, a zero
    /// dimension, or a buffer length that is not 1 to 4 samples per pixel.
    pub fn from_raw(chunk: RawChunk) -> Option<Self> {
        let pixels = u64::from(chunk.width) * u64::from(chunk.height);
        let len = chunk.data.len() as u64;
        if pixels == 0 || len == 0 || len % pixels != 0 {
            return None;
        }
        let channels = len / pixels;
        if !(1..=4).contains(&channels) {
            return None;
        }

        Some(Self {
            width: chunk.width,
            height: chunk.height,
            channels: channels as u8,
            data: chunk.data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel (1 to 4).
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Row-major interleaved samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Convert to an `image` buffer matching the channel count.
    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        let (w, h, data) = (self.width, self.height, self.data.clone());
        match self.channels {
            1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
            _ => None,
        }
    }
}

/// Outcome of a tile fetch that did not fail.
///
/// `Absent` means the source has nothing at that address. Renderers draw
/// nothing for it; it must never be shown as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileResult {
    Image(TileImage),
    Absent,
}

impl TileResult {
    pub fn is_absent(&self) -> bool {
        matches!(self, TileResult::Absent)
    }

    pub fn image(&self) -> Option<&TileImage> {
        match self {
            TileResult::Image(image) => Some(image),
            TileResult::Absent => None,
        }
    }

    pub fn into_image(self) -> Option<TileImage> {
        match self {
            TileResult::Image(image) => Some(image),
            TileResult::Absent => None,
        }
    }
}

impl From<RawChunk> for TileResult {
    fn from(chunk: RawChunk) -> Self {
        TileImage::from_raw(chunk).map_or(TileResult::Absent, TileResult::Image)
    }
}
