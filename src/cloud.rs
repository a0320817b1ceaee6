use std::path::{Path, PathBuf};

use ab_glyph::{Font as _, FontVec, PxScale, ScaleFont as _};
use anyhow::Context as _;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::error::{CloudError, CloudResult};
use crate::fonts;
use crate::freq::{StopwordSet, WordCounts};
use crate::mask::{BACKGROUND, MaskBuffer};

/// Fixed color palette cycled by frequency rank.
const PALETTE: [Rgba<u8>; 10] = [
    Rgba([31, 119, 180, 255]),
    Rgba([255, 127, 14, 255]),
    Rgba([44, 160, 44, 255]),
    Rgba([214, 39, 40, 255]),
    Rgba([148, 103, 189, 255]),
    Rgba([140, 86, 75, 255]),
    Rgba([227, 119, 194, 255]),
    Rgba([127, 127, 127, 255]),
    Rgba([188, 189, 34, 255]),
    Rgba([23, 190, 207, 255]),
];

/// Font-size decrement applied when a word fits nowhere at its current size.
const FONT_STEP: f32 = 1.0;

/// Configuration for generating a word cloud.
///
/// Defaults mirror the common renderer settings: a 400x200 canvas, 200 words,
/// black background, and the stock stopword list. With a mask attached the
/// canvas adopts the mask dimensions and words are confined to the mask
/// foreground (everything that is not the sentinel background intensity).
#[derive(Clone, Debug)]
pub struct WordCloudBuilder {
    width: u32,
    height: u32,
    max_words: usize,
    min_font_size: f32,
    max_font_size: Option<f32>,
    background: Rgba<u8>,
    stopwords: StopwordSet,
    mask: Option<MaskBuffer>,
    contour_width: u8,
    contour_color: Rgba<u8>,
    font_path: Option<PathBuf>,
}

impl Default for WordCloudBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordCloudBuilder {
    /// A builder with default settings.
    pub fn new() -> Self {
        Self {
            width: 400,
            height: 200,
            max_words: 200,
            min_font_size: 4.0,
            max_font_size: None,
            background: Rgba([0, 0, 0, 255]),
            stopwords: StopwordSet::standard(),
            mask: None,
            contour_width: 0,
            contour_color: Rgba([178, 34, 34, 255]),
            font_path: None,
        }
    }

    /// Canvas size in pixels; ignored when a mask is attached.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Maximum number of words rendered.
    pub fn max_words(mut self, n: usize) -> Self {
        self.max_words = n;
        self
    }

    /// Largest font size in pixels; derived from the canvas height when unset.
    pub fn max_font_size(mut self, px: f32) -> Self {
        self.max_font_size = Some(px);
        self
    }

    /// Smallest font size in pixels; words that fit nowhere at this size are
    /// skipped.
    pub fn min_font_size(mut self, px: f32) -> Self {
        self.min_font_size = px;
        self
    }

    /// Canvas background color.
    pub fn background(mut self, color: Rgba<u8>) -> Self {
        self.background = color;
        self
    }

    /// Replace the stopword set.
    pub fn stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Confine placement to the foreground of a normalized mask.
    ///
    /// Pixels at the sentinel intensity ([`BACKGROUND`]) are excluded from
    /// placement; the canvas adopts the mask dimensions.
    pub fn mask(mut self, mask: MaskBuffer) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Thickness of the mask outline in pixels; 0 disables the outline.
    pub fn contour_width(mut self, px: u8) -> Self {
        self.contour_width = px;
        self
    }

    /// Color of the mask outline.
    pub fn contour_color(mut self, color: Rgba<u8>) -> Self {
        self.contour_color = color;
        self
    }

    /// Font file to render with; the system font directories are probed when
    /// unset.
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Count word frequencies in `text` and lay the most common words out on
    /// the canvas.
    ///
    /// Placement walks an archimedean spiral from the canvas center and takes
    /// the first position whose glyph box overlaps nothing already drawn (and,
    /// with a mask, no background pixel). A word that fits nowhere shrinks by
    /// one pixel and retries; below the minimum font size it is skipped. The
    /// whole pass is deterministic.
    #[tracing::instrument(skip(self, text))]
    pub fn generate(&self, text: &str) -> CloudResult<WordCloudImage> {
        let (width, height) = match &self.mask {
            Some(m) => (m.width(), m.height()),
            None => (self.width, self.height),
        };
        if width == 0 || height == 0 {
            return Err(CloudError::validation("canvas must be non-empty"));
        }

        let counts = WordCounts::from_text(text, &self.stopwords);
        let ranked = counts.most_common(self.max_words);
        if ranked.is_empty() {
            return Err(CloudError::render(
                "no words left to lay out after stopword filtering",
            ));
        }

        let font = fonts::load_font(self.font_path.as_deref())?;

        let mut occupancy = Occupancy::new(width, height, self.mask.as_ref());
        let max_font = self
            .max_font_size
            .unwrap_or(height as f32 * 0.9)
            .max(self.min_font_size);
        let top_count = ranked[0].1 as f32;

        let mut placements = Vec::new();
        for (rank, (word, count)) in ranked.iter().enumerate() {
            let relative = (*count as f32 / top_count).sqrt();
            let mut size = (max_font * relative).max(self.min_font_size);
            loop {
                let (w, h) = measure(&font, size, word);
                if let Some((x, y)) = occupancy.find_spot(w, h) {
                    occupancy.claim(x, y, w, h);
                    placements.push(PlacedWord {
                        word: word.clone(),
                        count: *count,
                        font_px: size,
                        x,
                        y,
                        color: PALETTE[rank % PALETTE.len()],
                    });
                    break;
                }
                size -= FONT_STEP;
                if size < self.min_font_size {
                    break;
                }
            }
        }
        if placements.is_empty() {
            return Err(CloudError::render("no word fits the canvas"));
        }

        let mut image = RgbaImage::from_pixel(width, height, self.background);
        for p in &placements {
            draw_text_mut(
                &mut image,
                p.color,
                p.x as i32,
                p.y as i32,
                PxScale::from(p.font_px),
                &font,
                &p.word,
            );
        }
        if let Some(mask) = &self.mask {
            if self.contour_width > 0 {
                let edge = mask.contour(self.contour_width);
                for (x, y, px) in edge.enumerate_pixels() {
                    if px.0[0] != 0 {
                        image.put_pixel(x, y, self.contour_color);
                    }
                }
            }
        }

        Ok(WordCloudImage { image, placements })
    }
}

/// The resolved position, size, and color of one rendered word.
#[derive(Clone, Debug)]
pub struct PlacedWord {
    /// The rendered word.
    pub word: String,
    /// Its occurrence count in the source text.
    pub count: u64,
    /// Font size in pixels.
    pub font_px: f32,
    /// Left edge of the glyph box.
    pub x: u32,
    /// Top edge of the glyph box.
    pub y: u32,
    /// Fill color.
    pub color: Rgba<u8>,
}

/// A rendered word cloud and the placements that produced it.
#[derive(Clone, Debug)]
pub struct WordCloudImage {
    image: RgbaImage,
    placements: Vec<PlacedWord>,
}

impl WordCloudImage {
    /// The rendered RGBA canvas.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Every placed word, in frequency-rank order.
    pub fn placements(&self) -> &[PlacedWord] {
        &self.placements
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Write the canvas out as an image file.
    pub fn to_file(&self, path: &Path) -> CloudResult<()> {
        self.image
            .save(path)
            .with_context(|| format!("write word cloud '{}'", path.display()))?;
        Ok(())
    }
}

/// Parse a color argument: `#rrggbb`, `#rrggbbaa`, or a small set of names.
pub fn parse_color(s: &str) -> CloudResult<Rgba<u8>> {
    let named = match s.to_ascii_lowercase().as_str() {
        "white" => Some([255, 255, 255, 255]),
        "black" => Some([0, 0, 0, 255]),
        "firebrick" => Some([178, 34, 34, 255]),
        "red" => Some([255, 0, 0, 255]),
        "green" => Some([0, 128, 0, 255]),
        "blue" => Some([0, 0, 255, 255]),
        "navy" => Some([0, 0, 128, 255]),
        "steelblue" => Some([70, 130, 180, 255]),
        "gray" | "grey" => Some([128, 128, 128, 255]),
        _ => None,
    };
    if let Some(c) = named {
        return Ok(Rgba(c));
    }
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| CloudError::validation(format!("unknown color '{s}'")))?;
    let parse_pair = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| CloudError::validation(format!("invalid hex color '{s}'")))
    };
    match hex.len() {
        6 => Ok(Rgba([parse_pair(0)?, parse_pair(2)?, parse_pair(4)?, 255])),
        8 => Ok(Rgba([
            parse_pair(0)?,
            parse_pair(2)?,
            parse_pair(4)?,
            parse_pair(6)?,
        ])),
        _ => Err(CloudError::validation(format!("invalid hex color '{s}'"))),
    }
}

fn measure(font: &FontVec, px: f32, word: &str) -> (u32, u32) {
    let scaled = font.as_scaled(PxScale::from(px));
    let width: f32 = word.chars().map(|c| scaled.h_advance(scaled.glyph_id(c))).sum();
    (width.ceil() as u32, scaled.height().ceil() as u32)
}

/// Per-pixel occupancy grid; mask background starts occupied.
struct Occupancy {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Occupancy {
    fn new(width: u32, height: u32, mask: Option<&MaskBuffer>) -> Self {
        let cells = match mask {
            Some(m) => m.data().iter().map(|&v| v == BACKGROUND).collect(),
            None => vec![false; width as usize * height as usize],
        };
        Self {
            width,
            height,
            cells,
        }
    }

    fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        for row in y..y + h {
            let start = (row * self.width + x) as usize;
            if self.cells[start..start + w as usize].iter().any(|&c| c) {
                return false;
            }
        }
        true
    }

    fn claim(&mut self, x: u32, y: u32, w: u32, h: u32) {
        // 1px margin keeps adjacent words from touching.
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + w + 1).min(self.width);
        let y1 = (y + h + 1).min(self.height);
        for row in y0..y1 {
            for col in x0..x1 {
                self.cells[(row * self.width + col) as usize] = true;
            }
        }
    }

    /// First free spot for a `w`x`h` box along an archimedean spiral from the
    /// canvas center, or `None` when the spiral leaves the canvas.
    fn find_spot(&self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w == 0 || h == 0 || w > self.width || h > self.height {
            return None;
        }
        let cx = self.width as f32 / 2.0;
        let cy = self.height as f32 / 2.0;
        let r_max = (self.width as f32).hypot(self.height as f32) / 2.0;
        let growth = 0.4f32;

        let mut theta = 0.0f32;
        loop {
            let r = growth * theta;
            if r > r_max {
                return None;
            }
            let x = cx + r * theta.cos() - w as f32 / 2.0;
            let y = cy + r * theta.sin() - h as f32 / 2.0;
            // Step so consecutive probes are ~2px apart along the arc.
            theta += 2.0 / r.max(2.0);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            if x + w <= self.width && y + h <= self.height && self.is_free(x, y, w, h) {
                return Some((x, y));
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cloud.rs"]
mod tests;
