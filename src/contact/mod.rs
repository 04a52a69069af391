//! Contact form handling.

pub(crate) mod message;
