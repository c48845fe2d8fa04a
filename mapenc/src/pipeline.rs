use crate::{
    error::*,
    intensity::{ChannelSum, IntensityMatrix, open_intensity_from_path},
    literal::{QuoteStyle, quote},
    rle,
    sampler::{BinaryGrid, CellSize, GridSampler},
};
use serde_json::{Value, json};
use std::path::Path;

/// The encoded string together with what a decoder needs to rebuild the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicString {
    pub encoded: String,
    pub columns: usize,
    pub rows: usize,
    /// Value of the first run, `None` for an empty grid.
    pub first_value: Option<u8>,
}

impl MagicString {
    pub fn cells(&self) -> usize {
        self.columns * self.rows
    }

    pub fn quoted(&self, style: QuoteStyle) -> String {
        quote(&self.encoded, style)
    }

    pub fn decode(&self) -> Result<Vec<u8>, Error> {
        rle::decode(&self.encoded, self.first_value.unwrap_or(0), self.cells())
    }

    pub fn to_json(&self) -> Value {
        json!({
            "encoded": self.encoded,
            "columns": self.columns,
            "rows": self.rows,
            "cells": self.cells(),
            "first_value": self.first_value,
        })
    }
}

pub struct MagicPipeline {
    /// Cell size used for sampling.
    pub cell_size: CellSize,
    /// Channels summed into each pixel's intensity.
    pub channels: ChannelSum,
}

impl Default for MagicPipeline {
    fn default() -> Self {
        Self::new(CellSize::default(), ChannelSum::default())
    }
}

impl MagicPipeline {
    pub fn new(cell_size: CellSize, channels: ChannelSum) -> Self {
        Self {
            cell_size,
            channels,
        }
    }

    pub fn encode_matrix(&self, matrix: &IntensityMatrix) -> Result<(BinaryGrid, MagicString), Error> {
        let grid = GridSampler::new(self.cell_size).sample(matrix)?;
        let encoded = rle::encode(grid.cells())?;

        let magic = MagicString {
            encoded,
            columns: grid.columns(),
            rows: grid.rows(),
            first_value: grid.first(),
        };
        log::info!(
            "encoded {}x{} grid into {} characters",
            magic.columns,
            magic.rows,
            magic.encoded.chars().count()
        );

        Ok((grid, magic))
    }

    pub fn encode_path(&self, path: &Path) -> Result<(BinaryGrid, MagicString), Error> {
        let matrix = open_intensity_from_path(path, self.channels)?;
        self.encode_matrix(&matrix)
    }
}
