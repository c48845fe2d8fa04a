//! Samples a raster image on a regular grid and compresses the on/off cells
//! into a short run-length encoded string.
pub mod error;
pub mod intensity;
pub mod literal;
pub mod pipeline;
pub mod render;
pub mod rle;
pub mod sampler;
