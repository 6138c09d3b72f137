use std::fs;
use std::io;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

// ============================================================================
// Screenshot collection — inline image assets for the dashboard
// ============================================================================

/// Extensions recognised as embeddable images (matched case-insensitively).
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// One screenshot read from the results directory, held in memory just long
/// enough to be base64-encoded into the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotAsset {
    /// File name, used as the gallery caption
    pub name: String,

    /// Lowercased extension without the dot, used as the media subtype
    pub extension: String,

    /// Raw file bytes
    pub data: Vec<u8>,
}

impl ScreenshotAsset {
    /// Encode this asset as a `data:` URI suitable for an <img> src.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/{};base64,{}",
            self.extension,
            STANDARD.encode(&self.data)
        )
    }
}

/// Collect every image file from a screenshots directory, sorted by file
/// name for deterministic gallery order.
///
/// A missing directory is not an error: screenshots are optional, so the
/// result is simply empty. A read failure on an existing image file is.
pub fn collect_screenshots(dir: &Path) -> Result<Vec<ScreenshotAsset>, io::Error> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(extension) = image_extension(&path) else {
            continue;
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let data = fs::read(&path)?;
        assets.push(ScreenshotAsset { name, extension, data });
    }

    assets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(assets)
}

/// Return the lowercased extension when the path looks like an image.
fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}
