use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::io::{self, Write};

//===========================================================================//

// Size limits for source and resampled images:
const MIN_WIDTH: u32 = 1;
const MIN_HEIGHT: u32 = 1;

//===========================================================================//

/// A decoded image, stored as 8-bit RGBA pixels.
#[derive(Clone, Debug)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Creates a new bitmap with the given dimensions and RGBA data.  The
    /// `width` and `height` must be nonzero, and `rgba_data` must have `4 *
    /// width * height` bytes and be in row-major order from top to bottom.
    /// Panics if the dimensions are out of range or if `rgba_data` is the
    /// wrong length.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> Bitmap {
        if width < MIN_WIDTH {
            panic!(
                "Invalid width (was {}, but must be at least {})",
                width, MIN_WIDTH
            );
        }
        if height < MIN_HEIGHT {
            panic!(
                "Invalid height (was {}, but must be at least {})",
                height, MIN_HEIGHT
            );
        }
        let expected_data_len = (width as u64) * (height as u64) * 4;
        if (rgba_data.len() as u64) != expected_data_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            );
        }
        // The length was verified above, so this cannot fail.
        let pixels = RgbaImage::from_raw(width, height, rgba_data)
            .expect("buffer length matches dimensions");
        Bitmap { pixels }
    }

    pub(crate) fn from_pixels(pixels: RgbaImage) -> Bitmap {
        debug_assert!(pixels.width() >= MIN_WIDTH);
        debug_assert!(pixels.height() >= MIN_HEIGHT);
        Bitmap { pixels }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns the RGBA data for this image, in row-major order from top to
    /// bottom.
    pub fn rgba_data(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Resamples the entire image into a new square bitmap of the given
    /// size, scaling with a Catmull-Rom filter and compositing the result
    /// over a fully transparent canvas with alpha-over semantics.  Each
    /// call resamples from the original pixels, so producing several sizes
    /// from one source does not compound quality loss.  Panics if `size`
    /// is zero.
    pub fn resample(&self, size: u32) -> Bitmap {
        if size < MIN_WIDTH {
            panic!(
                "Invalid size (was {}, but must be at least {})",
                size, MIN_WIDTH
            );
        }
        let scaled =
            imageops::resize(&self.pixels, size, size, FilterType::CatmullRom);
        let mut canvas = RgbaImage::new(size, size);
        imageops::overlay(&mut canvas, &scaled, 0, 0);
        Bitmap { pixels: canvas }
    }

    /// Encodes the image as a 32-bit RGBA PNG file.
    pub fn write_png<W: Write>(&self, writer: W) -> io::Result<()> {
        match self.write_png_enc(writer) {
            Ok(()) => Ok(()),
            Err(png::EncodingError::IoError(error)) => Err(error),
            Err(png::EncodingError::Format(error)) => {
                invalid_input!("PNG format error: {}", error);
            }
            Err(png::EncodingError::LimitsExceeded) => {
                invalid_input!("PNG limits exceeded");
            }
            Err(png::EncodingError::Parameter(error)) => {
                invalid_input!("PNG parameter error: {}", error);
            }
        }
    }

    fn write_png_enc<W: Write>(
        &self,
        writer: W,
    ) -> Result<(), png::EncodingError> {
        let mut encoder =
            png::Encoder::new(writer, self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.pixels.as_raw())?;
        Ok(())
    }
}

//===========================================================================//


//===========================================================================//
