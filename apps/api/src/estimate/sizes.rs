//! Named paper sizes offered on the order forms, in inches.
//!
//! Unknown names fall back to US Letter rather than failing: the form shows
//! an estimate for the most common stock until the customer picks a size.

use serde::Serialize;

/// Width × height of a finished copy, inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSize {
    pub width: f64,
    pub height: f64,
}

impl PaperSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Size used when the form carries a name that is not in the table.
pub const FALLBACK_SIZE: PaperSize = PaperSize::new(8.5, 11.0);

/// A named entry in the size table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NamedSize {
    pub name: &'static str,
    #[serde(flatten)]
    pub size: PaperSize,
}

const fn named(name: &'static str, width: f64, height: f64) -> NamedSize {
    NamedSize {
        name,
        size: PaperSize::new(width, height),
    }
}

/// Sizes listed in the product forms' size selects.
pub const PAPER_SIZES: &[NamedSize] = &[
    named("A3", 11.7, 16.5),
    named("A4", 8.3, 11.7),
    named("A5", 5.8, 8.3),
    named("A6", 4.1, 5.8),
    named("Letter (8.5”x11”)", 8.5, 11.0),
    named("Legal (8.5”x14”)", 8.5, 14.0),
    named("Tabloid (11”x17”)", 11.0, 17.0),
    named("Half Letter (5.5”x8.5”)", 5.5, 8.5),
    named("Calling Card (2”x3.5”)", 2.0, 3.5),
    named("Postcard (4”x6”)", 4.0, 6.0),
];

/// Looks a size up by its exact display name.
pub fn find_size(name: &str) -> Option<PaperSize> {
    PAPER_SIZES
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.size)
}

/// Looks a size up by name, falling back to 8.5" × 11".
pub fn lookup_size(name: &str) -> PaperSize {
    find_size(name).unwrap_or(FALLBACK_SIZE)
}
