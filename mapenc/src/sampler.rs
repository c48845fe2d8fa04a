use crate::{error::*, intensity::IntensityMatrix};

/// Dimensions of one grid cell, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: usize,
    pub height: usize,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
        }
    }
}

impl CellSize {
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "{ERROR_CELL_SIZE}, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// One 0/1 value per whole cell of the source image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    columns: usize,
    rows: usize,
    cells: Vec<u8>,
}

impl BinaryGrid {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<u8> {
        self.cells.first().copied()
    }

    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
}

pub struct GridSampler {
    /// Size of the cells the matrix is split into.
    pub cell_size: CellSize,
}

impl GridSampler {
    pub fn new(cell_size: CellSize) -> Self {
        Self { cell_size }
    }

    /// Samples each cell at its midpoint and emits 1 for a non-zero intensity.
    ///
    /// Pixels past the last whole cell in either direction are never sampled.
    pub fn sample(&self, input: &IntensityMatrix) -> Result<BinaryGrid, Error> {
        self.cell_size.validate()?;
        let CellSize { width, height } = self.cell_size;

        let columns = input.width() / width;
        let rows = input.height() / height;
        let (offset_x, offset_y) = (width / 2, height / 2);

        let mut cells = Vec::with_capacity(columns * rows);
        for j in 0..rows {
            let y = j * height + offset_y;
            for i in 0..columns {
                let x = i * width + offset_x;
                let value = input.get(y, x).ok_or_else(|| {
                    Error::InvalidInput(format!("{ERROR_MATRIX_SHAPE}: no value at ({y}, {x})"))
                })?;
                cells.push(u8::from(value != 0));
            }
        }

        log::debug!(
            "sampled {columns}x{rows} cells from {}x{} matrix",
            input.width(),
            input.height()
        );

        Ok(BinaryGrid {
            columns,
            rows,
            cells,
        })
    }
}
