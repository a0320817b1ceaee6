use std::path::Path;

use plotters::prelude::*;

use crate::error::{CloudError, CloudResult};

/// Bar fill color.
const BAR_COLOR: RGBColor = RGBColor(70, 114, 178);

/// Configuration for a labeled bar chart written to a PNG file.
///
/// Defaults follow the dataset walkthrough: a 1500x1000 figure with x tick
/// labels rotated for long country names.
#[derive(Clone, Debug)]
pub struct BarChart {
    title: String,
    x_label: String,
    y_label: String,
    width: u32,
    height: u32,
    tick_rotation_deg: u32,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    /// A chart with default settings and empty labels.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            width: 1500,
            height: 1000,
            tick_rotation_deg: 50,
        }
    }

    /// Chart title; empty titles draw no caption.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// X-axis description.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Y-axis description.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Figure size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Tick label rotation in degrees.
    ///
    /// The bitmap text backend supports quarter-turn transforms only, so the
    /// angle snaps to the nearest of 0, 90, 180, or 270 degrees.
    pub fn tick_rotation(mut self, degrees: u32) -> Self {
        self.tick_rotation_deg = degrees;
        self
    }

    /// Draw one bar per labeled value and write the figure to `out` as PNG.
    pub fn render(&self, bars: &[(String, f64)], out: &Path) -> CloudResult<()> {
        if bars.is_empty() {
            return Err(CloudError::chart("no bars to draw"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(CloudError::chart("figure size must be non-zero"));
        }

        let max_v = bars.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
        let y_max = if max_v <= 0.0 { 1.0 } else { max_v * 1.05 };

        let root = BitMapBackend::new(out, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| CloudError::chart(e.to_string()))?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(24)
            .x_label_area_size(180)
            .y_label_area_size(90);
        if !self.title.is_empty() {
            builder.caption(&self.title, ("sans-serif", 30));
        }
        let mut chart = builder
            .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_max)
            .map_err(|e| CloudError::chart(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .axis_desc_style(("sans-serif", 22))
            .x_labels(bars.len())
            .x_label_formatter(&|seg| match seg {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => bars
                    .get(*i)
                    .map(|(label, _)| label.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .x_label_style(
                ("sans-serif", 14)
                    .into_font()
                    .transform(tick_transform(self.tick_rotation_deg)),
            )
            .draw()
            .map_err(|e| CloudError::chart(e.to_string()))?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, (_, v))| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), *v),
                    ],
                    BAR_COLOR.filled(),
                )
            }))
            .map_err(|e| CloudError::chart(e.to_string()))?;

        root.present()
            .map_err(|e| CloudError::chart(e.to_string()))?;
        Ok(())
    }
}

fn tick_transform(degrees: u32) -> FontTransform {
    match degrees % 360 {
        0..=44 | 315..=359 => FontTransform::None,
        45..=134 => FontTransform::Rotate90,
        135..=224 => FontTransform::Rotate180,
        _ => FontTransform::Rotate270,
    }
}

#[cfg(test)]
#[path = "../tests/unit/chart.rs"]
mod tests;
