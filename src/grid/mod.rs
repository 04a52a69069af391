pub(crate) mod pixel;
