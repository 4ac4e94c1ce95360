//! Renderer module: turns the aggregated records into output text.

pub mod markdown;
