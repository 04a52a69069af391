//! Value-to-color mapping and legend construction.

pub(crate) mod color;
pub(crate) mod colorbar;
pub(crate) mod png;
pub(crate) mod ramp;
