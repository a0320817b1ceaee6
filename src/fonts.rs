use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use anyhow::Context as _;

use crate::error::{CloudError, CloudResult};

/// Directories probed, in order, when no explicit font path is given.
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
];

/// Find a usable `.ttf`/`.otf` face in the standard system font directories.
///
/// Probing is deterministic (directory entries are visited in sorted order).
/// Returns `None` on systems without fonts; callers that can render nothing
/// without one should surface that as an error, and tests may skip.
pub fn find_system_font() -> Option<PathBuf> {
    for dir in FONT_DIRS {
        if let Some(path) = find_font_under(Path::new(dir)) {
            return Some(path);
        }
    }
    None
}

fn find_font_under(dir: &Path) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    for path in &entries {
        if path.is_dir() {
            if let Some(found) = find_font_under(path) {
                return Some(found);
            }
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if matches!(ext.as_deref(), Some("ttf" | "otf")) {
            return Some(path.clone());
        }
    }
    None
}

/// Load a font face from `path`, or from the first system font found when
/// `path` is `None`.
pub fn load_font(path: Option<&Path>) -> CloudResult<FontVec> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => find_system_font().ok_or_else(|| {
            CloudError::render("no system font found; pass an explicit font path")
        })?,
    };
    let bytes =
        std::fs::read(&path).with_context(|| format!("read font '{}'", path.display()))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| CloudError::render(format!("parse font '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../tests/unit/fonts.rs"]
mod tests;
