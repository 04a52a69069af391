use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde_json::Value;

use crate::{
    catalog::builtin::storage_dir_for,
    data::query::{LayerParams, PixelParams, ZoneParams},
    data::zone::{ZoneResponse, chart_for_zone, zone_from_json},
    foundation::error::{FathomError, FathomResult},
    grid::pixel::pixel_index,
};

/// Locations probed, relative to the working directory, when no data directory is configured.
pub const DATA_DIR_CANDIDATES: &[&str] = &[
    "../climate-fisheries-backend/Data",
    "../backend/Data",
    "../Data",
    "data",
    "public/data",
];

/// Pick the data directory.
///
/// An explicit directory always wins. Otherwise the first existing candidate under `cwd` is used,
/// falling back to the first candidate so that reads fail with a meaningful path.
pub fn resolve_data_dir(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    DATA_DIR_CANDIDATES
        .iter()
        .map(|rel| cwd.join(rel))
        .find(|p| p.is_dir())
        .unwrap_or_else(|| cwd.join(DATA_DIR_CANDIDATES[0]))
}

/// Read-only view over the precomputed data tree.
///
/// ```text
/// <root>/MODEL/<model>/<indicator>/<climate>/<zone id>.json
/// <root>/ZONECHART/<model>/<indicator>.json
/// <root>/PIXEL/<indicator>/<climate>/<period>.json
/// ```
#[derive(Clone, Debug)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Open a store rooted at `root`. Nothing is read until a lookup happens.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// Root directory of the data tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a zone summary file.
    pub fn zone_path(&self, p: &ZoneParams) -> PathBuf {
        self.root
            .join("MODEL")
            .join(&p.model)
            .join(storage_dir_for(&p.indicator))
            .join(&p.climate)
            .join(format!("{}.json", p.id))
    }

    /// Path of a per-model chart file.
    pub fn zone_chart_path(&self, model: &str, indicator: &str) -> PathBuf {
        self.root
            .join("ZONECHART")
            .join(model)
            .join(format!("{}.json", storage_dir_for(indicator)))
    }

    /// Path of a whole-map pixel array.
    pub fn pixel_path(&self, layer: &LayerParams) -> PathBuf {
        self.root
            .join("PIXEL")
            .join(storage_dir_for(&layer.indicator))
            .join(&layer.climate)
            .join(format!("{}.json", layer.period))
    }

    /// Zone statistics for one period, with the zone's chart series when one exists.
    #[tracing::instrument(skip(self))]
    pub async fn zone(&self, p: &ZoneParams) -> FathomResult<ZoneResponse> {
        let data = read_json(&self.zone_path(p)).await?;
        let mut ret = zone_from_json(&data, &p.period)?;

        let chart_path = self.zone_chart_path(&p.model, &p.indicator);
        match read_json(&chart_path).await {
            Ok(chart) => ret.chart = chart_for_zone(&chart, &p.id),
            Err(err) => tracing::debug!(path = %chart_path.display(), %err, "zone chart unavailable"),
        }
        Ok(ret)
    }

    /// The pixel entry under a clicked coordinate, or `{}` when there is none.
    #[tracing::instrument(skip(self))]
    pub async fn pixel(&self, p: &PixelParams) -> FathomResult<Value> {
        let path = self.pixel_path(&p.layer);
        let data = read_json(&path).await?;
        let Value::Array(cells) = data else {
            return Err(FathomError::shape(format!(
                "Expected a pixel array in file: {}",
                path.display()
            )));
        };

        let cell = pixel_index(p.latitude, p.longitude)
            .and_then(|idx| cells.into_iter().nth(idx))
            .filter(|v| !v.is_null());
        Ok(cell.unwrap_or_else(|| Value::Object(Default::default())))
    }

    /// The full pixel array for a layer.
    #[tracing::instrument(skip(self))]
    pub async fn pixel_data(&self, layer: &LayerParams) -> FathomResult<Value> {
        read_json(&self.pixel_path(layer)).await
    }
}

/// Read and parse a JSON file, mapping a missing file to [`FathomError::NotFound`] and bad JSON
/// to [`FathomError::Serde`].
pub async fn read_json(path: &Path) -> FathomResult<Value> {
    let bytes = match tokio::fs::read(path).await {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(FathomError::not_found(path));
        }
        other => other.with_context(|| format!("read '{}'", path.display()))?,
    };
    serde_json::from_slice(&bytes)
        .map_err(|_| FathomError::serde(format!("Invalid JSON in file: {}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/data/store.rs"]
mod tests;
