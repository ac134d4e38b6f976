use std::path::Path;

/// Extensions offered when decoding out of WebP. The first one is the default.
pub const EXTENSION_CHOICES: [&str; 4] = ["png", "jpg", "gif", "tiff"];

pub const WEBP_EXTENSION: &str = "webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToWebp,
    FromWebp,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToWebp => "to_webp",
            Direction::FromWebp => "from_webp",
        }
    }
}

pub fn derive_direction(source: &Path) -> Direction {
    let is_webp = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase() == WEBP_EXTENSION)
        .unwrap_or(false);
    if is_webp {
        Direction::FromWebp
    } else {
        Direction::ToWebp
    }
}

pub fn default_extension() -> &'static str {
    EXTENSION_CHOICES[0]
}
