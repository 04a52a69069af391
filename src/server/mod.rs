//! HTTP surface: routes, handlers and the JSON error body.

pub(crate) mod error;
pub(crate) mod handlers;
pub(crate) mod router;
pub(crate) mod state;
