//! Noise-line filtering.
//!
//! Worksheets interleave the data rows with separators, page banners, column
//! titles and footers. A line is noise when it is empty or contains any of
//! the markers below; matching is by substring, never by whole line.

/// Built-in markers, checked by substring containment.
pub const NOISE_MARKERS: &[&str] = &[
    "----",
    "Page:",
    "=\"",
    "MERCHANDISE SKUs",
    "Store Number:",
    "Merch Code",
    "Sku/Description",
    "under 14 days supply",
    "OPR241",
];

/// Returns `true` if the trimmed `line` is empty or carries a built-in marker.
pub fn is_noise_line(line: &str) -> bool {
    line.is_empty() || NOISE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Noise filter with optional caller-supplied markers on top of
/// [`NOISE_MARKERS`].
#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    extra_markers: Vec<String>,
}

impl NoiseFilter {
    pub fn new(extra_markers: Vec<String>) -> Self {
        Self {
            extra_markers: extra_markers
                .into_iter()
                .filter(|marker| !marker.is_empty())
                .collect(),
        }
    }

    pub fn is_noise(&self, line: &str) -> bool {
        is_noise_line(line)
            || self
                .extra_markers
                .iter()
                .any(|marker| line.contains(marker.as_str()))
    }
}
