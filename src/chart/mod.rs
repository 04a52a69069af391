//! Reshaping of zone time series into chart-ready data.

pub(crate) mod dataset;
pub(crate) mod format;
pub(crate) mod series;
