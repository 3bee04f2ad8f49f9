//! Error binning over a fixed color palette.
//!
//! The palette is a static ordered table, not a computed gradient: the same
//! 32 colors must be hardcoded by every implementation so report output is
//! bit-identical. Low error maps to the first entry, high error to the last;
//! the ordering is a qualitative heat scale, nothing more.

/// Ordered display colors, one per error bin (RGB hex, no leading `#`).
pub const PALETTE: [&str; 32] = [
    "FF0000", "FF1000", "FF2000", "FF3000", "FF4000", "FF5000", "FF6000",
    "FF7000", "FF8000", "FF9000", "FFA000", "FFB000", "FFC000", "FFD000",
    "FFE000", "FFF000", "FFFF00", "F0FF00", "E0FF00", "D0FF00", "C0FF00",
    "B0FF00", "A0FF00", "90FF00", "80FF00", "70FF00", "60FF00", "50FF00",
    "40FF00", "30FF00", "20FF00", "10FF00",
];

/// Number of error bins.
pub const BINS: usize = PALETTE.len();

/// Map an absolute prediction error to a palette index.
///
/// The error is clamped to `[0, 1]` first, so the function is total: any
/// input yields a valid index. `bin_error(0.0) == 0`,
/// `bin_error(1.0) == BINS - 1`, and the index is monotone non-decreasing
/// in the error.
pub fn bin_error(error: f64) -> usize {
    let clamped = error.abs().min(1.0);
    // clamped == 1.0 would floor to BINS; pin it to the last bin.
    ((clamped * BINS as f64).floor() as usize).min(BINS - 1)
}

/// The display color for an absolute prediction error.
pub fn color_for(error: f64) -> &'static str {
    PALETTE[bin_error(error)]
}

// =============================================================================
// Tests
// =============================================================================
