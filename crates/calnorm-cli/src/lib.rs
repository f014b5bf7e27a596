//! CLI library components for the UTC normalizer.

pub mod logging;
pub mod pipeline;
