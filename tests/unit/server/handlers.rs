use std::path::{Path as FsPath, PathBuf};

use axum::http::StatusCode;

use super::*;
use crate::{
    contact::message::DEFAULT_CONTACT_EMAIL,
    data::{assets::AssetStore, store::DataStore},
};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "fathom_handlers_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write(path: &FsPath, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn fixture(name: &str) -> (PathBuf, Shared) {
    let root = temp_dir(name);
    let data = root.join("data");
    let assets = root.join("assets");

    write(
        &data.join("MODEL/LME/SST/26/3.json"),
        r#"{"mid": [1.5, 1.0, 2.0], "years": {"2040": [1.0, 0.5, 1.5], "2041": [2.0, 1.0, 3.0]}}"#,
    );
    write(
        &data.join("MODEL/LME/SST/26/4.json"),
        r#"{"mid": [1.0, 0.0, 2.0], "years": [[1.0, 2.0, 3.0], [0.0, 1.0, 2.0], [2.0, 3.0, 4.0]]}"#,
    );
    write(
        &data.join("PIXEL/SST/26/mid.json"),
        r#"[null, {"LME": {"values": [1.0, 0.0, 2.0]}, "FAO": {"value": 3.0, "name": "Atlantic"}}, 4.0]"#,
    );
    write(
        &assets.join("colorbars.json"),
        r#"{"image": {"SST": [2.0, 0.0, 4.0]}, "zone": {"LME": {"SST": [1.0, 0.0, 2.0]}}}"#,
    );
    write(
        &assets.join("geoJSONs/countries.json"),
        r#"{"features": [{"properties": {"26": 10.0, "85": 30.0}}, {"properties": {"26": 20.0}}]}"#,
    );

    let state = AppState {
        data: DataStore::new(&data),
        assets: AssetStore::new(&assets),
        catalog: Catalog::builtin(),
        contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
    };
    (root, State(Arc::new(state)))
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn zone_query(id: &str) -> Query<ZoneQuery> {
    Query(ZoneQuery {
        model: Some("LME".into()),
        indicator: Some("SST".into()),
        climate: Some("26".into()),
        id: Some(id.into()),
        period: Some("mid".into()),
    })
}

fn pixel_query(lat: &str, lng: &str) -> Query<PixelQuery> {
    Query(PixelQuery {
        indicator: Some("SST".into()),
        climate: Some("26".into()),
        period: Some("mid".into()),
        latitude: Some(lat.into()),
        longitude: Some(lng.into()),
    })
}

fn layer_query() -> Query<LayerQuery> {
    Query(LayerQuery {
        indicator: Some("SST".into()),
        climate: Some("26".into()),
        period: Some("mid".into()),
    })
}

#[tokio::test]
async fn zone_returns_period_statistics() {
    let (root, state) = fixture("zone");
    let Json(z) = zone(state, zone_query("3")).await.unwrap();
    assert_eq!((z.mean, z.min, z.max), (json!(1.5), json!(1.0), json!(2.0)));
    assert!(z.years.is_some());
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn missing_zone_echoes_path_and_params() {
    let (root, state) = fixture("zone404");
    let err = zone(state, zone_query("99")).await.unwrap_err();
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    let path = body["absolute_path"].as_str().unwrap();
    assert!(path.ends_with("99.json"));
    assert_eq!(body["error"], format!("File not found: {path}"));
    assert_eq!(body["request_params"]["id"], "99");
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn missing_zone_echoes_storage_indicator_name() {
    let (root, state) = fixture("zone404_sbot");
    let mut q = zone_query("3");
    q.0.indicator = Some("SBOT".into());
    let resp = zone(state, q).await.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["request_params"]["indicator"], "SBT");
    assert!(body["absolute_path"].as_str().unwrap().contains("SBT"));
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn incomplete_zone_query_is_rejected() {
    let (root, state) = fixture("zone400");
    let err = zone(state, Query(ZoneQuery::default())).await.unwrap_err();
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"],
        "Missing required parameters: model, indicator, climate, id, period"
    );
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn zone_chart_uses_period_window() {
    let (root, state) = fixture("chart");
    let Json(chart) = zone_chart(state, zone_query("3"), Query(YearRangeQuery::default()))
        .await
        .unwrap();
    let chart = chart.unwrap();
    assert_eq!(chart.labels, ["2040", "2041"]);
    assert_eq!(chart.datasets.len(), 3);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn extreme_year_range_clamps_array_series() {
    let (root, state) = fixture("chart_extreme");
    let range = YearRangeQuery {
        start: Some(i32::MIN.to_string()),
        end: Some("1951".into()),
    };
    let Json(chart) = zone_chart(state.clone(), zone_query("4"), Query(range))
        .await
        .unwrap();
    assert_eq!(chart.unwrap().labels, ["1950", "1951"]);

    let range = YearRangeQuery {
        start: Some("1951".into()),
        end: Some(i32::MAX.to_string()),
    };
    let Json(chart) = zone_chart(state, zone_query("4"), Query(range))
        .await
        .unwrap();
    assert_eq!(chart.unwrap().labels, ["1951", "1952"]);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn half_open_year_range_is_rejected() {
    let (root, state) = fixture("chart400");
    let range = YearRangeQuery {
        start: Some("2040".into()),
        end: None,
    };
    let err = zone_chart(state, zone_query("3"), Query(range))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn pixel_and_summary_read_the_clicked_cell() {
    let (root, state) = fixture("pixel");

    let Json(cell) = pixel(state.clone(), pixel_query("-179.75", "-89.25"))
        .await
        .unwrap();
    assert_eq!(cell["FAO"]["name"], "Atlantic");

    let Json(empty) = pixel(state.clone(), pixel_query("-179.75", "-89.75"))
        .await
        .unwrap();
    assert_eq!(empty, json!({}));

    let Json(summary) = pixel_summary(state, pixel_query("-179.75", "-89.25"))
        .await
        .unwrap();
    assert_eq!(summary.mean, Some(2.0));
    assert_eq!(summary.max, Some(2.0));
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn unparseable_coordinates_are_bad_requests() {
    let (root, state) = fixture("pixel400");
    let err = pixel(state, pixel_query("north", "0")).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn globe_points_are_colored_and_sampled() {
    let (root, state) = fixture("globe");

    let Json(all) = globe(state.clone(), layer_query(), Query(GlobeQuery::default()))
        .await
        .unwrap();
    assert_eq!(all["count"], 2);
    assert_eq!(all["points"][1]["value"], 4.0);
    assert_eq!(all["points"][1]["color"], "#d73027");

    let opts = GlobeQuery {
        sample: Some("2".into()),
        mode: Some("heatmap".into()),
    };
    let Json(heat) = globe(state, layer_query(), Query(opts)).await.unwrap();
    assert_eq!(heat["count"], 1);
    assert_eq!(heat["heatmap"][0]["intensity"], 0.0);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn colorscale_picks_raster_or_zone_bounds() {
    let (root, state) = fixture("scale");

    let q = ColorscaleQuery {
        indicator: Some("SST".into()),
        model: None,
        value: Some("4".into()),
    };
    let Json(raster) = colorscale(state.clone(), Query(q)).await.unwrap();
    assert_eq!(raster.colorbar.max, 4.0);
    assert_eq!(raster.color.as_deref(), Some("#d73027"));

    let q = ColorscaleQuery {
        indicator: Some("SST".into()),
        model: Some("LME".into()),
        value: None,
    };
    let Json(zone) = colorscale(state.clone(), Query(q)).await.unwrap();
    assert_eq!(zone.colorbar.max, 2.0);
    assert!(zone.color.is_none());

    let q = ColorscaleQuery {
        indicator: Some("SST".into()),
        model: Some("EEZ".into()),
        value: None,
    };
    let err = colorscale(state, Query(q)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn revenue_colorscale_comes_from_countries() {
    let (root, state) = fixture("revenue");
    let q = ColorscaleQuery {
        indicator: Some("revenue".into()),
        model: Some("Grid".into()),
        value: None,
    };
    let Json(resp) = colorscale(state, Query(q)).await.unwrap();
    // Collected as [10, 30, 20]; index 1 is the median.
    assert_eq!(resp.colorbar.median, 30.0);
    assert_eq!(resp.colorbar.min, 10.0);
    assert_eq!(resp.colorbar.max, 30.0);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn colorbar_png_is_served_as_image() {
    let (root, state) = fixture("png");
    let q = IndicatorQuery {
        indicator: Some("OXY".into()),
    };
    let resp = colorbar_png(state, Query(q)).await.unwrap();
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn unknown_indicator_is_rejected() {
    let (root, state) = fixture("unknown");
    let q = IndicatorQuery {
        indicator: Some("XYZ".into()),
    };
    let err = colorbar_png(state, Query(q)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn email_preview_and_validation() {
    let (root, state) = fixture("email");
    let req: ContactRequest = serde_json::from_value(json!({
        "name": "Ana", "subject": "Hi", "email": "ana@example.org", "message": "Hello"
    }))
    .unwrap();
    let Json(resp) = email(state.clone(), Ok(Json(req))).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.preview.to, DEFAULT_CONTACT_EMAIL);

    let err = email(state, Ok(Json(ContactRequest::default())))
        .await
        .unwrap_err();
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"],
        "Missing required fields: name, subject, email, message"
    );
    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn geojson_route_serves_outlines() {
    let (root, state) = fixture("geo");
    let Json(v) = geojson(state.clone(), Path("countries.json".into()))
        .await
        .unwrap();
    assert_eq!(v["features"].as_array().unwrap().len(), 2);

    let err = geojson(state, Path("LME.json".into())).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    let _ = std::fs::remove_dir_all(&root);
}
