use crate::sampler::BinaryGrid;

/// Characters used to draw "on" and "off" cells in a preview.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreviewChars {
    pub on: char,
    pub off: char,
}

impl Default for PreviewChars {
    fn default() -> Self {
        Self { on: '*', off: ' ' }
    }
}

/// Draws the grid one line per cell-row, `*` for 1 and a space for 0.
pub fn render_preview(grid: &BinaryGrid) -> String {
    render_preview_with(grid, PreviewChars::default())
}

pub fn render_preview_with(grid: &BinaryGrid, chars: PreviewChars) -> String {
    let columns = grid.columns();
    if columns == 0 {
        return String::new();
    }

    let capacity = (columns + 1) * grid.rows();
    let mut output = String::with_capacity(capacity);

    for (y, row) in grid.cells().chunks(columns).enumerate() {
        if y > 0 {
            output.push('\n');
        }
        output.extend(
            row.iter()
                .map(|&cell| if cell != 0 { chars.on } else { chars.off }),
        );
    }

    output
}
