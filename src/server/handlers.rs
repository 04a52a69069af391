use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    catalog::{
        builtin::{Catalog, storage_dir_for},
        model::{ClimateIndicator, ZoneModel},
    },
    chart::{dataset::ZoneChart, series::YearWindow},
    contact::message::{ContactRequest, ContactResponse},
    data::{
        query::{LayerQuery, PixelQuery, ZoneParams, ZoneQuery},
        summary::CellSummary,
        zone::ZoneResponse,
    },
    foundation::error::{FathomError, FathomResult},
    globe::points::{pixels_to_heatmap, pixels_to_points, sample_points},
    scale::{
        colorbar::{Colorbar, ColorbarBounds, revenue_bounds},
        png::render_colorbar_png,
        ramp::ColorScale,
    },
    server::{error::ApiError, state::AppState},
};

type Shared = State<Arc<AppState>>;
type ApiResult<T> = Result<T, ApiError>;

/// Liveness check.
pub async fn healthz() -> impl IntoResponse {
    "ok"
}

/// `GET /api/catalog`: indicators, scenarios, periods and palettes.
pub async fn catalog(State(state): Shared) -> Json<Catalog> {
    Json(state.catalog.clone())
}

/// Zone lookup whose 404 echoes the resolved path and the request, with the indicator under its
/// storage name.
async fn load_zone(state: &AppState, p: &ZoneParams) -> ApiResult<ZoneResponse> {
    match state.data.zone(p).await {
        Ok(zone) => Ok(zone),
        Err(err) => {
            let missing = match &err {
                FathomError::NotFound { path } => Some(path.display().to_string()),
                _ => None,
            };
            let api = ApiError::from(err);
            Err(match missing {
                Some(path) => {
                    let echoed = ZoneParams {
                        indicator: storage_dir_for(&p.indicator).to_string(),
                        ..p.clone()
                    };
                    api.with_detail("absolute_path", Value::String(path))
                        .with_detail("request_params", json!(echoed))
                }
                None => api,
            })
        }
    }
}

/// `GET /api/zone`: period statistics for one zone.
pub async fn zone(
    State(state): Shared,
    Query(q): Query<ZoneQuery>,
) -> ApiResult<Json<ZoneResponse>> {
    let p = q.validate()?;
    Ok(Json(load_zone(&state, &p).await?))
}

/// Optional custom year window for `/api/zone/chart`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct YearRangeQuery {
    /// First year, inclusive.
    pub start: Option<String>,
    /// Last year, inclusive.
    pub end: Option<String>,
}

impl YearRangeQuery {
    fn window(&self) -> FathomResult<Option<(i32, i32)>> {
        let year = |field: &str, v: &str| {
            v.trim().parse::<i32>().map_err(|_| {
                FathomError::validation(format!("Invalid value for parameter '{field}'"))
            })
        };
        match (self.start.as_deref(), self.end.as_deref()) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => Ok(Some((year("start", start)?, year("end", end)?))),
            _ => Err(FathomError::validation(
                "Both start and end are required for a custom year range",
            )),
        }
    }
}

/// `GET /api/zone/chart`: the zone's yearly series shaped for a chart, windowed by period or
/// by `start`/`end`.
pub async fn zone_chart(
    State(state): Shared,
    Query(q): Query<ZoneQuery>,
    Query(range): Query<YearRangeQuery>,
) -> ApiResult<Json<Option<ZoneChart>>> {
    let p = q.validate()?;
    let custom = range.window()?;
    let indicator = known_indicator(&state.catalog, Some(p.indicator.as_str()))?;

    let zone = load_zone(&state, &p).await?;
    let window = YearWindow::select(custom, Some(p.period.as_str()));
    let chart = zone
        .years
        .as_ref()
        .and_then(|years| ZoneChart::build(years, indicator, window));
    Ok(Json(chart))
}

/// `GET /api/pixel`: the raw entry under a coordinate.
pub async fn pixel(State(state): Shared, Query(q): Query<PixelQuery>) -> ApiResult<Json<Value>> {
    let p = q.validate()?;
    Ok(Json(state.data.pixel(&p).await?))
}

/// `GET /api/pixel/summary`: the clicked cell aggregated across zone models.
pub async fn pixel_summary(
    State(state): Shared,
    Query(q): Query<PixelQuery>,
) -> ApiResult<Json<CellSummary>> {
    let p = q.validate()?;
    let indicator = known_indicator(&state.catalog, Some(p.layer.indicator.as_str()))?;
    let response = state.data.pixel(&p).await?;
    Ok(Json(CellSummary::from_pixel(
        &response,
        indicator,
        p.latitude,
        p.longitude,
    )))
}

/// `GET /api/pixel-data`: the whole pixel array of a layer.
pub async fn pixel_data(
    State(state): Shared,
    Query(q): Query<LayerQuery>,
) -> ApiResult<Json<Value>> {
    let layer = q.validate()?;
    Ok(Json(state.data.pixel_data(&layer).await?))
}

/// Extra `/api/globe` parameters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GlobeQuery {
    /// Keep every n-th point.
    pub sample: Option<String>,
    /// `points` (default) or `heatmap`.
    pub mode: Option<String>,
}

/// `GET /api/globe`: globe points or heat-map samples for a layer.
pub async fn globe(
    State(state): Shared,
    Query(q): Query<LayerQuery>,
    Query(opts): Query<GlobeQuery>,
) -> ApiResult<Json<Value>> {
    let layer = q.validate()?;
    let rate = match opts.sample.as_deref() {
        None | Some("") => 1,
        Some(s) => s.trim().parse::<usize>().map_err(|_| {
            FathomError::validation("Invalid value for parameter 'sample'")
        })?,
    };
    let heatmap = match opts.mode.as_deref() {
        None | Some("") | Some("points") => false,
        Some("heatmap") => true,
        Some(other) => {
            return Err(FathomError::validation(format!("Unknown globe mode '{other}'")).into());
        }
    };

    let Value::Array(pixels) = state.data.pixel_data(&layer).await? else {
        return Err(FathomError::shape("Expected a pixel array for the globe layer").into());
    };

    if heatmap {
        let points = tokio::task::spawn_blocking(move || pixels_to_heatmap(&pixels))
            .await
            .context("heatmap conversion task")
            .map_err(FathomError::from)?;
        let points = sample_points(&points, rate);
        return Ok(Json(json!({ "count": points.len(), "heatmap": points })));
    }

    let scale = globe_scale(&state, &layer.indicator).await;
    let points = tokio::task::spawn_blocking(move || pixels_to_points(&pixels, scale.as_ref()))
        .await
        .context("globe conversion task")
        .map_err(FathomError::from)?;
    let points = sample_points(&points, rate);
    Ok(Json(json!({ "count": points.len(), "points": points })))
}

/// Raster ramp for coloring globe points, when bounds for the indicator exist.
async fn globe_scale(state: &AppState, indicator: &str) -> Option<ColorScale> {
    let ind = state.catalog.indicator(indicator)?;
    let table = match state.assets.colorbars().await {
        Ok(table) => table,
        Err(err) => {
            tracing::debug!(%err, "globe points left uncolored");
            return None;
        }
    };
    let bounds = table.image_bounds(&ind.name)?;
    ColorScale::new(&ind.colors, bounds.min, bounds.max).ok()
}

/// `/api/colorscale` parameters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ColorscaleQuery {
    /// Indicator data name or UI id.
    pub indicator: Option<String>,
    /// Zone model; raster bounds are used when absent or `Grid`.
    pub model: Option<String>,
    /// Value to map onto the ramp.
    pub value: Option<String>,
}

/// Legend plus the color of the requested value, if any.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorscaleResponse {
    /// Legend.
    #[serde(flatten)]
    pub colorbar: Colorbar,
    /// Hex color for the requested value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// `GET /api/colorscale`: legend for an indicator, optionally with the color of `value`.
pub async fn colorscale(
    State(state): Shared,
    Query(q): Query<ColorscaleQuery>,
) -> ApiResult<Json<ColorscaleResponse>> {
    let indicator = known_indicator(&state.catalog, q.indicator.as_deref())?;
    let model = q
        .model
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(str::parse::<ZoneModel>)
        .transpose()?;
    let value = q
        .value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| FathomError::validation("Invalid value for parameter 'value'"))
        })
        .transpose()?;

    let bounds = colorbar_bounds(&state, indicator, model).await?;
    let colorbar = Colorbar::new(indicator, bounds);
    let color = match value {
        Some(v) => Some(colorbar.scale()?.hex_for(v)),
        None => None,
    };
    Ok(Json(ColorscaleResponse { colorbar, color }))
}

async fn colorbar_bounds(
    state: &AppState,
    indicator: &ClimateIndicator,
    model: Option<ZoneModel>,
) -> FathomResult<ColorbarBounds> {
    if indicator.is_revenue() {
        let countries = state.assets.geojson("countries.json").await?;
        return revenue_bounds(&countries)
            .ok_or_else(|| FathomError::shape("No revenue values in countries.json"));
    }

    let table = state.assets.colorbars().await?;
    let bounds = match model {
        None | Some(ZoneModel::Grid) => table.image_bounds(&indicator.name),
        Some(m) => table.zone_bounds(m.as_str(), &indicator.name),
    };
    bounds.ok_or_else(|| {
        FathomError::validation(format!(
            "No colorbar bounds for indicator '{}'",
            indicator.name
        ))
    })
}

/// `/api/colorbar.png` parameters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IndicatorQuery {
    /// Indicator data name or UI id.
    pub indicator: Option<String>,
}

/// `GET /api/colorbar.png`: legend swatches as a PNG.
pub async fn colorbar_png(
    State(state): Shared,
    Query(q): Query<IndicatorQuery>,
) -> ApiResult<Response> {
    let indicator = known_indicator(&state.catalog, q.indicator.as_deref())?;
    let png = render_colorbar_png(&indicator.colors)?;
    Ok(([(header::CONTENT_TYPE, HeaderValue::from_static("image/png"))], png).into_response())
}

/// Indicator raster, with its dimensions in `x-image-width`/`x-image-height`.
pub async fn indicator_image(
    State(state): Shared,
    Path((indicator, scenario, period)): Path<(String, String, String)>,
) -> ApiResult<Response> {
    let img = state
        .assets
        .indicator_image(&indicator, &scenario, &period)
        .await?;
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (HeaderName::from_static("x-image-width"), HeaderValue::from(img.width)),
        (HeaderName::from_static("x-image-height"), HeaderValue::from(img.height)),
    ];
    Ok((headers, img.bytes).into_response())
}

/// Zone outlines from `geoJSONs/`.
pub async fn geojson(State(state): Shared, Path(name): Path<String>) -> ApiResult<Json<Value>> {
    Ok(Json(state.assets.geojson(&name).await?))
}

/// `POST /api/email`: validate a contact form and return the mail preview.
pub async fn email(
    State(state): Shared,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(req) = body.map_err(|rej| FathomError::validation(rej.body_text()))?;
    let msg = req.validate()?;
    tracing::info!(subject = %msg.subject, "contact form accepted");
    Ok(Json(msg.preview(&state.contact_email)))
}

fn known_indicator<'a>(
    catalog: &'a Catalog,
    key: Option<&str>,
) -> FathomResult<&'a ClimateIndicator> {
    let key = key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| FathomError::validation("Missing required parameters: indicator"))?;
    catalog
        .indicator(key)
        .ok_or_else(|| FathomError::validation(format!("Unknown indicator '{key}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/server/handlers.rs"]
mod tests;
