pub(crate) mod snippet;
