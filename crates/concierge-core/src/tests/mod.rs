//! Test suites for the dispatch core.

pub(crate) mod support;
