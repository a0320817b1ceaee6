//! Winecloud explores a tabular wine-review dataset and renders its review text
//! as word-cloud images, optionally confined to the shape of a mask image.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `ReviewSet::from_path` reads the review CSV into typed records
//! 2. **Summarize**: `summarize_by_country` aggregates count / mean / max points
//! 3. **Chart**: `BarChart` draws per-country aggregates as a PNG bar chart
//! 4. **Cloud**: `WordCloudBuilder` counts word frequencies and lays words out
//!    on the canvas, confined to a [`MaskBuffer`] when one is supplied
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: frequency counting, sorting, and layout are
//!   pure and stable for a given input; parallel fan-out merges to the same
//!   result as a sequential pass.
//! - **Explicit buffers**: pixel grids pass as arguments and return values,
//!   never as ambient state, and inputs are never mutated.
//!
//! The one bit-exact contract downstream renderers depend on is mask
//! normalization: [`MaskBuffer::normalize`] remaps background pixels (0) to the
//! sentinel intensity [`mask::BACKGROUND`] (255) and passes every other value
//! through unchanged.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Bar-chart rendering for labeled per-country aggregates.
pub mod chart;
/// Word-cloud layout and rasterization.
pub mod cloud;
/// Typed loading and querying of the wine-review CSV.
pub mod dataset;
/// Error taxonomy shared across the crate.
pub mod error;
/// Font loading and system font discovery.
pub mod fonts;
/// Tokenization, stopwords, and word-frequency counting.
pub mod freq;
/// Single-channel pixel grids and mask normalization.
pub mod mask;
/// Group-by-country summary statistics.
pub mod stats;

pub use chart::BarChart;
pub use cloud::{PlacedWord, WordCloudBuilder, WordCloudImage, parse_color};
pub use dataset::{ReviewSet, WineReview};
pub use error::{CloudError, CloudResult};
pub use fonts::{find_system_font, load_font};
pub use freq::{StopwordSet, WordCounts, tokenize};
pub use mask::{BACKGROUND, MaskBuffer};
pub use stats::{CountrySummary, SortBy, sort_summaries, summarize_by_country};
