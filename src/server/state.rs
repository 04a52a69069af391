use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use crate::{
    catalog::builtin::Catalog,
    contact::message::DEFAULT_CONTACT_EMAIL,
    data::{
        assets::{AssetStore, DEFAULT_ASSETS_DIR},
        store::{DataStore, resolve_data_dir},
    },
};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Resolved server settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Data tree root; probed from the working directory when unset.
    pub data_dir: Option<PathBuf>,
    /// Static assets root.
    pub assets_dir: PathBuf,
    /// Listen address.
    pub bind: SocketAddr,
    /// Recipient shown in contact form previews.
    pub contact_email: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

/// Immutable state shared by every handler.
#[derive(Debug)]
pub struct AppState {
    /// Precomputed zone and pixel data.
    pub data: DataStore,
    /// Map images, outlines and colorbar bounds.
    pub assets: AssetStore,
    /// Indicator, scenario and period descriptors.
    pub catalog: Catalog,
    /// Contact form recipient.
    pub contact_email: String,
}

impl AppState {
    /// Build state for `config`, resolving relative directories against `cwd`.
    pub fn from_config(config: &ServerConfig, cwd: &Path) -> Self {
        let data_dir = resolve_data_dir(config.data_dir.as_deref(), cwd);
        Self {
            data: DataStore::new(data_dir),
            assets: AssetStore::new(cwd.join(&config.assets_dir)),
            catalog: Catalog::builtin(),
            contact_email: config.contact_email.clone(),
        }
    }
}
