//! Flat-file data and asset access.

pub(crate) mod assets;
pub(crate) mod query;
pub(crate) mod store;
pub(crate) mod summary;
pub(crate) mod zone;
