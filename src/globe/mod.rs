//! Pixel arrays reshaped for 3-D globe rendering.

pub(crate) mod points;
