//! Pure unit conversions for the `.docx` format.
//!
//! Config lengths are inches. WordprocessingML wants twentieths of a point
//! (twips) for page and table geometry, English Metric Units for drawings,
//! and half-points for font sizes.

const TWIPS_PER_INCH: f64 = 1440.0;
const EMU_PER_INCH: f64 = 914_400.0;
const HALF_POINTS_PER_INCH: f64 = 144.0;

/// Inches → twips, rounded, negative lengths clamp to zero.
pub fn twips(inches: f64) -> u32 {
    (inches * TWIPS_PER_INCH).round().max(0.0) as u32
}

/// Inches → English Metric Units, rounded, negative lengths clamp to zero.
pub fn emu(inches: f64) -> u32 {
    (inches * EMU_PER_INCH).round().max(0.0) as u32
}

/// Inches → half-points, the unit of `w:sz`.
pub fn half_points(inches: f64) -> usize {
    (inches * HALF_POINTS_PER_INCH).round().max(0.0) as usize
}

/// Height of an image drawn `width` inches wide, keeping its pixel aspect ratio.
pub fn scaled_height(width: f64, pixels: (u32, u32)) -> f64 {
    let (px_w, px_h) = pixels;
    if px_w == 0 {
        return 0.0;
    }
    width * f64::from(px_h) / f64::from(px_w)
}
