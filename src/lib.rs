//! Fathom serves the precomputed data behind a climate-fisheries impact map.
//!
//! A data team produces flat JSON files (per-zone statistics, per-pixel grids, zone time series)
//! and static map assets (indicator rasters, zone outlines, colorbar bounds). Fathom reads them
//! on request and adds the presentation values a map client needs: color ramps and legends, chart
//! series, cell summaries and globe points.
//!
//! # Layers
//!
//! 1. **Catalog**: the fixed set of indicators, scenarios and periods ([`Catalog`]).
//! 2. **Data**: checked queries over the data tree ([`DataStore`]) and the asset tree
//!    ([`AssetStore`]).
//! 3. **Presentation**: [`ColorScale`], [`Colorbar`], [`ChartSeries`], [`CellSummary`] and
//!    [`GlobePoint`].
//! 4. **HTTP**: an axum [`router`] over shared [`AppState`], started with [`serve`].
//!
//! Every fallible operation returns [`FathomResult`]; [`FathomError::status_code`] gives the HTTP
//! status each error is reported with.
//!
//! # Getting started
//!
//! - For running the service, see the repository README.
//! - For the data layout and request flow in detail, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod chart;
mod contact;
mod data;
mod foundation;
mod globe;
mod grid;
mod scale;
mod server;

/// Standalone walkthrough of the data layout and request flow.
pub mod guide;

pub use catalog::builtin::{Catalog, TITLE, storage_dir_for};
pub use catalog::model::{
    ClimateIndicator, ClimateScenario, IndicatorKind, PeriodScenario, ZoneModel, decode_units,
    period_year_range,
};
pub use chart::dataset::{ChartDataset, ZoneChart, chart_datasets};
pub use chart::format::format_number;
pub use chart::series::{ChartSeries, SERIES_BASE_YEAR, YearWindow, chart_axis_labels};
pub use contact::message::{
    ContactMessage, ContactRequest, ContactResponse, DEFAULT_CONTACT_EMAIL, MailPreview,
};
pub use data::assets::{AssetStore, DEFAULT_ASSETS_DIR, IndicatorImage};
pub use data::query::{
    LayerParams, LayerQuery, PixelParams, PixelQuery, ZoneParams, ZoneQuery, path_segment,
};
pub use data::store::{DATA_DIR_CANDIDATES, DataStore, read_json, resolve_data_dir};
pub use data::summary::{CellSummary, ModelValue};
pub use data::zone::{ZoneResponse, chart_for_zone, zone_from_json};
pub use foundation::error::{FathomError, FathomResult};
pub use foundation::math::{LinearScale, lerp, round_to};
pub use globe::points::{
    GlobePoint, HeatmapPoint, pixel_value, pixels_to_heatmap, pixels_to_points, sample_points,
};
pub use grid::pixel::{
    CELL_COUNT, CELL_DEG, LatLng, ROW_STRIDE, format_coordinates, index_to_coordinates,
    pixel_index,
};
pub use scale::color::{NO_DATA, Rgb};
pub use scale::colorbar::{
    Colorbar, ColorbarBounds, ColorbarTable, color_features, colorbar_display, revenue_bounds,
};
pub use scale::png::{SWATCH_PX, render_colorbar_png};
pub use scale::ramp::ColorScale;
pub use server::error::ApiError;
pub use server::router::{router, serve};
pub use server::state::{AppState, DEFAULT_PORT, ServerConfig};
