use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    data::query::path_segment,
    data::store::read_json,
    foundation::error::{FathomError, FathomResult},
    scale::colorbar::ColorbarTable,
};

/// Default assets root, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "public/assets";

/// A decoded-enough indicator raster: the encoded bytes plus their pixel size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorImage {
    /// PNG bytes exactly as stored.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Static map assets shipped next to the data tree.
///
/// ```text
/// <root>/images/indicators/<indicator>/<scenario>/<period>.png
/// <root>/geoJSONs/<name>.json | <name>.geojson
/// <root>/colorbars.json
/// ```
#[derive(Clone, Debug)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Open an asset store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// Root directory of the assets.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of one indicator raster. A trailing `.png` on `period` is tolerated.
    pub fn indicator_image_path(
        &self,
        indicator: &str,
        scenario: &str,
        period: &str,
    ) -> FathomResult<PathBuf> {
        let indicator = path_segment("indicator", indicator)?;
        let scenario = path_segment("scenario", scenario)?;
        let period = path_segment("period", period.strip_suffix(".png").unwrap_or(period))?;
        Ok(self
            .root
            .join("images")
            .join("indicators")
            .join(indicator)
            .join(scenario)
            .join(format!("{period}.png")))
    }

    /// Read an indicator raster and probe its dimensions.
    #[tracing::instrument(skip(self))]
    pub async fn indicator_image(
        &self,
        indicator: &str,
        scenario: &str,
        period: &str,
    ) -> FathomResult<IndicatorImage> {
        let path = self.indicator_image_path(indicator, scenario, period)?;
        let bytes = read_bytes(&path).await?;
        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .with_context(|| format!("decode png '{}'", path.display()))?;
        Ok(IndicatorImage {
            width: img.width(),
            height: img.height(),
            bytes,
        })
    }

    /// Location of a zone outline file. Only `.json` and `.geojson` names are served.
    pub fn geojson_path(&self, name: &str) -> FathomResult<PathBuf> {
        let name = path_segment("name", name)?;
        if !(name.ends_with(".json") || name.ends_with(".geojson")) {
            return Err(FathomError::validation(format!(
                "Unsupported GeoJSON file name '{name}'"
            )));
        }
        Ok(self.root.join("geoJSONs").join(name))
    }

    /// Parsed zone outline file.
    #[tracing::instrument(skip(self))]
    pub async fn geojson(&self, name: &str) -> FathomResult<serde_json::Value> {
        read_json(&self.geojson_path(name)?).await
    }

    /// Precomputed colorbar bounds.
    #[tracing::instrument(skip(self))]
    pub async fn colorbars(&self) -> FathomResult<ColorbarTable> {
        let path = self.root.join("colorbars.json");
        let value = read_json(&path).await?;
        serde_json::from_value(value).map_err(|err| {
            FathomError::shape(format!("Unexpected colorbar layout in {}: {err}", path.display()))
        })
    }
}

async fn read_bytes(path: &Path) -> FathomResult<Vec<u8>> {
    match tokio::fs::read(path).await {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(FathomError::not_found(path))
        }
        other => Ok(other.with_context(|| format!("read '{}'", path.display()))?),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/assets.rs"]
mod tests;
