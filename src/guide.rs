//! # Fathom guide
//!
//! This module walks through the data layout Fathom reads, the request flow of each endpoint and
//! the presentation math layered on top. For commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Data tree
//!
//! The data directory is resolved once at startup ([`resolve_data_dir`](crate::resolve_data_dir)):
//! an explicit `--data-dir`/`DATA_DIR` wins, otherwise the first existing entry of
//! [`DATA_DIR_CANDIDATES`](crate::DATA_DIR_CANDIDATES) under the working directory.
//!
//! ```text
//! MODEL/<model>/<indicator>/<climate>/<zone id>.json   period stats + yearly series
//! ZONECHART/<model>/<indicator>.json                   optional per-zone chart payloads
//! PIXEL/<indicator>/<climate>/<period>.json            259 200-entry grid array
//! ```
//!
//! Indicator directories go through [`storage_dir_for`](crate::storage_dir_for): the sea-bottom
//! temperature layer is requested as `SBOT` and stored as `SBT`. Asset rasters under
//! `images/indicators/` keep the requested name.
//!
//! Every client-supplied value that becomes a path component is checked with
//! [`path_segment`](crate::path_segment), so lookups never leave the data directory.
//!
//! ---
//!
//! ## Zones
//!
//! A zone file maps period names to either `[mean, min, max]` or a bare mean, plus an optional
//! `years` series. [`zone_from_json`](crate::zone_from_json) turns the requested period into a
//! [`ZoneResponse`](crate::ZoneResponse); a missing period is a client error, any other shape a
//! server error.
//!
//! The `years` series comes in two forms, both handled by
//! [`ChartSeries::from_years`](crate::ChartSeries::from_years):
//!
//! - an object keyed by year, whose values are triples or scalars;
//! - `[[mean...], [min...], [max...]]`, where index 0 is 1950.
//!
//! [`ZoneChart`](crate::ZoneChart) combines the windowed series with line colors, a padded y-range
//! and sparse x-axis ticks.
//!
//! ---
//!
//! ## Pixels
//!
//! The grid is 0.5° with a row stride of 360. [`pixel_index`](crate::pixel_index) reproduces the
//! exact offsets used when the arrays were generated:
//!
//! ```text
//! index = floor(((lat + 179.75) / 0.5) * 360 + (lng + 89.75) / 0.5)
//! ```
//!
//! and [`index_to_coordinates`](crate::index_to_coordinates) inverts it. A pixel entry is an
//! object keyed by zone model; [`CellSummary`](crate::CellSummary) folds it into one mean/min/max
//! for the clicked cell.
//!
//! ---
//!
//! ## Color
//!
//! Each indicator carries six palette stops. [`ColorScale`](crate::ColorScale) spaces them evenly
//! over `[min, max]` and interpolates in RGB; NaN maps to [`NO_DATA`](crate::NO_DATA).
//! Bounds come from `colorbars.json` ([`ColorbarTable`](crate::ColorbarTable)), except revenue,
//! whose bounds are gathered from the country outlines by
//! [`revenue_bounds`](crate::revenue_bounds).
//!
//! [`Colorbar`](crate::Colorbar) labels the first, fourth and last swatch. Labels go through
//! [`colorbar_display`](crate::colorbar_display), which applies the indicator's display factor
//! (catch potential is stored in tens of thousands of tonnes).
//!
//! ---
//!
//! ## Errors
//!
//! | error | status |
//! |---|---|
//! | [`FathomError::Validation`](crate::FathomError::Validation) | 400 |
//! | [`FathomError::NotFound`](crate::FathomError::NotFound) | 404 |
//! | `Serde`, `Shape`, `Other` | 500 |
//!
//! The HTTP layer wraps them in [`ApiError`](crate::ApiError), which renders `{"error": "..."}`.
