use crate::error::*;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Which channels are added together to form a pixel's intensity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ChannelSum {
    /// Red, green and blue. Alpha is ignored.
    #[default]
    Rgb,
    /// Red, green, blue and alpha.
    Rgba,
}

/// Per-pixel channel sums of a decoded image, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityMatrix {
    width: usize,
    height: usize,
    data: Vec<u32>,
}

impl IntensityMatrix {
    pub fn new(width: usize, height: usize, data: Vec<u32>) -> Result<Self, Error> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(Error::InvalidInput(format!(
                "{ERROR_MATRIX_SHAPE}: {width}x{height} with {} values",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::InvalidInput(format!(
                    "{ERROR_MATRIX_SHAPE}: row {y} has {} values, expected {width}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::new(width, height, data)
    }

    pub fn from_image(img: &DynamicImage, channels: ChannelSum) -> Self {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let data: Vec<u32> = match channels {
            ChannelSum::Rgb => img
                .to_rgb8()
                .pixels()
                .map(|px| px.0.iter().map(|&c| c as u32).sum())
                .collect(),
            ChannelSum::Rgba => img
                .to_rgba8()
                .pixels()
                .map(|px| px.0.iter().map(|&c| c as u32).sum())
                .collect(),
        };
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.data.get(row * self.width + column).copied()
    }
}

/// Opens and decodes the image at `path`, guessing the format from its content.
pub fn open_intensity_from_path(path: &Path, channels: ChannelSum) -> Result<IntensityMatrix, Error> {
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| {
            Error::ImageDecode(format!("{ERROR_DECODING_IMAGE}: {}: {err}", path.display()))
        })?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(IntensityMatrix::from_image(&img, channels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_new_rejects_wrong_length() {
        let result = IntensityMatrix::new(3, 2, vec![0; 5]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = IntensityMatrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_get_is_row_major() {
        let m = IntensityMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.get(0, 2), Some(3));
        assert_eq!(m.get(1, 0), Some(4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_from_image_sums_rgb() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(1, 0, Rgb([10, 20, 30]));
        let m = IntensityMatrix::from_image(&DynamicImage::ImageRgb8(img), ChannelSum::Rgb);
        assert_eq!(m.get(0, 0), Some(0));
        assert_eq!(m.get(0, 1), Some(60));
    }

    #[test]
    fn test_alpha_only_counts_with_rgba() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let img = DynamicImage::ImageRgba8(img);
        assert_eq!(
            IntensityMatrix::from_image(&img, ChannelSum::Rgb).get(0, 0),
            Some(0)
        );
        assert_eq!(
            IntensityMatrix::from_image(&img, ChannelSum::Rgba).get(0, 0),
            Some(255)
        );
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let result = open_intensity_from_path(Path::new("does/not/exist.png"), ChannelSum::Rgb);
        assert!(matches!(result, Err(Error::ImageDecode(_))));
    }
}
