use std::path::Path;

use anyhow::Context as _;
use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, erode};

use crate::error::{CloudError, CloudResult};

/// Sentinel intensity a mask-consuming renderer treats as "not part of the
/// shape".
pub const BACKGROUND: u8 = 255;

/// A row-major single-channel pixel grid.
///
/// Elements are `u8`, so every representable value lies inside the documented
/// `[0, 255]` intensity domain; out-of-range values cannot be constructed.
/// Zero-sized grids (0 rows and/or 0 columns) are valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl MaskBuffer {
    /// Build a buffer from raw row-major intensity data.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CloudResult<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(CloudError::validation(format!(
                "mask data length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Load an image file and convert it to a single-channel buffer.
    pub fn open(path: &Path) -> CloudResult<Self> {
        let img = image::open(path)
            .with_context(|| format!("open mask image '{}'", path.display()))?;
        Ok(Self::from_gray_image(&img.to_luma8()))
    }

    /// Convert a decoded grayscale image into a buffer.
    pub fn from_gray_image(img: &GrayImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.as_raw().clone(),
        }
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major intensity data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Intensity at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Remap background pixels to the sentinel intensity expected by
    /// shaped-region renderers.
    ///
    /// Per-element rule: a value of 0 becomes [`BACKGROUND`] (255); every
    /// other value passes through unchanged. The result is a new buffer of
    /// identical dimensions; `self` is never mutated. Normalization is
    /// idempotent and has no failure path.
    pub fn normalize(&self) -> MaskBuffer {
        let data = self
            .data
            .iter()
            .map(|&v| if v == 0 { BACKGROUND } else { v })
            .collect();
        MaskBuffer {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Convert the buffer into a grayscale image for encoding.
    pub fn to_gray_image(&self) -> GrayImage {
        // The length always matches the dimensions by construction.
        GrayImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }

    /// Write the buffer out as an image file.
    pub fn save(&self, path: &Path) -> CloudResult<()> {
        self.to_gray_image()
            .save(path)
            .with_context(|| format!("write mask image '{}'", path.display()))?;
        Ok(())
    }

    /// Edge map of the foreground shape, `width` pixels thick.
    ///
    /// Foreground is every pixel that is not [`BACKGROUND`]. The edge is the
    /// morphological gradient (dilation minus erosion) of that shape; returned
    /// pixels are 255 on the edge and 0 elsewhere.
    pub fn contour(&self, width: u8) -> GrayImage {
        if width == 0 || self.width == 0 || self.height == 0 {
            return GrayImage::new(self.width, self.height);
        }
        let mut shape = GrayImage::new(self.width, self.height);
        for (x, y, px) in shape.enumerate_pixels_mut() {
            let inside = self.data[(y * self.width + x) as usize] != BACKGROUND;
            px.0[0] = if inside { 255 } else { 0 };
        }

        let grown = dilate(&shape, Norm::LInf, width);
        let shrunk = erode(&shape, Norm::LInf, width);
        let mut edge = GrayImage::new(self.width, self.height);
        for (x, y, px) in edge.enumerate_pixels_mut() {
            let on = grown.get_pixel(x, y).0[0] != 0 && shrunk.get_pixel(x, y).0[0] == 0;
            px.0[0] = if on { 255 } else { 0 };
        }
        edge
    }
}

#[cfg(test)]
#[path = "../tests/unit/mask.rs"]
mod tests;
