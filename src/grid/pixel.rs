//! Fixed 0.5° grid addressing.
//!
//! The preprocessed pixel files are flat JSON arrays produced with the arithmetic in
//! [`pixel_index`]. The first coordinate is offset by 179.75 and the second by 89.75, with a row
//! stride of 360. That matches how the arrays were written, so it is kept bit-for-bit even though
//! the offsets look swapped relative to the usual latitude/longitude ranges.

use serde::Serialize;

/// Grid resolution in degrees.
pub const CELL_DEG: f64 = 0.5;
/// Cells per row of the flat pixel array.
pub const ROW_STRIDE: usize = 360;
/// Total number of cells (720 rows x 360 columns).
pub const CELL_COUNT: usize = 259_200;

const ROW_OFFSET: f64 = 179.75;
const COL_OFFSET: f64 = 89.75;

/// Geographic point in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Flat array index for a clicked coordinate.
///
/// Returns `None` for non-finite input or a negative index; an index past the end of a pixel file
/// is left for the caller to bounds-check.
pub fn pixel_index(latitude: f64, longitude: f64) -> Option<usize> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    let row = (latitude + ROW_OFFSET) / CELL_DEG;
    let col = (longitude + COL_OFFSET) / CELL_DEG;
    let idx = (row * ROW_STRIDE as f64 + col).floor();
    if idx < 0.0 {
        return None;
    }
    Some(idx as usize)
}

/// Cell-center coordinate for a flat array index, or `None` outside the grid.
pub fn index_to_coordinates(index: usize) -> Option<LatLng> {
    if index >= CELL_COUNT {
        return None;
    }
    let row = index / ROW_STRIDE;
    let col = index % ROW_STRIDE;
    Some(LatLng {
        lat: row as f64 * CELL_DEG - ROW_OFFSET,
        lng: col as f64 * CELL_DEG - COL_OFFSET,
    })
}

/// Human-readable coordinate label, e.g. `12.34°N, 5.00°E`.
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    let lat_dir = if lat >= 0.0 { 'N' } else { 'S' };
    let lng_dir = if lng >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.2}°{lat_dir}, {:.2}°{lng_dir}",
        lat.abs(),
        lng.abs()
    )
}

#[cfg(test)]
#[path = "../../tests/unit/grid/pixel.rs"]
mod tests;
