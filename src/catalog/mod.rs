//! Indicator, scenario and period descriptors.

pub(crate) mod builtin;
pub(crate) mod model;
