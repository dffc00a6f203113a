use crate::bitmap::Bitmap;
use image::ImageFormat;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

//===========================================================================//

/// The source image encodings that can be converted into an icon.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SourceFormat {
    /// PNG-encoded image data
    Png,
    /// JPEG-encoded image data
    Jpeg,
}

impl SourceFormat {
    fn from_image_format(format: ImageFormat) -> Option<SourceFormat> {
        match format {
            ImageFormat::Png => Some(SourceFormat::Png),
            ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
            _ => None,
        }
    }

    fn image_format(&self) -> ImageFormat {
        match *self {
            SourceFormat::Png => ImageFormat::Png,
            SourceFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        self.image_format().to_mime_type()
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SourceFormat::Png => formatter.write_str("PNG"),
            SourceFormat::Jpeg => formatter.write_str("JPEG"),
        }
    }
}

//===========================================================================//

/// Determines the format of a source image from its file extension,
/// falling back to sniffing the content bytes when the extension names no
/// known image format.  Returns an error describing the detected type if
/// it is anything other than PNG or JPEG.
pub fn detect_format(path: &Path, data: &[u8]) -> io::Result<SourceFormat> {
    let format = match path.extension().and_then(ImageFormat::from_extension)
    {
        Some(format) => format,
        None => match image::guess_format(data) {
            Ok(format) => format,
            Err(_) => {
                invalid_data!("unsupported file type: unrecognized data");
            }
        },
    };
    match SourceFormat::from_image_format(format) {
        Some(format) => Ok(format),
        None => {
            invalid_data!(
                "unsupported file type: {}",
                format.to_mime_type()
            );
        }
    }
}

/// Decodes PNG or JPEG data into an RGBA bitmap.  Returns an error if the
/// data is not valid for the given format.
pub fn decode_image(data: &[u8], format: SourceFormat) -> io::Result<Bitmap> {
    match image::load_from_memory_with_format(data, format.image_format()) {
        Ok(image) => Ok(Bitmap::from_pixels(image.to_rgba8())),
        Err(error) => invalid_data!("Malformed {} data: {}", format, error),
    }
}

/// Reads the image file at `path` into memory, detects its format, and
/// decodes it into an RGBA bitmap.
pub fn load_image(path: &Path) -> io::Result<Bitmap> {
    let data = fs::read(path)?;
    let format = detect_format(path, &data)?;
    decode_image(&data, format)
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{decode_image, detect_format, SourceFormat};
    use crate::bitmap::Bitmap;
    use std::path::Path;

    // The signatures that PNG and JPEG files start with.
    const PNG_SIGNATURE: &[u8] =
        &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    const JPEG_SIGNATURE: &[u8] = &[0xff, 0xd8, 0xff, 0xe0];

    #[test]
    fn extension_lookup_wins_over_content() {
        // With a recognized extension, the content is never sniffed.
        let format =
            detect_format(Path::new("icon.png"), b"not actually png")
                .unwrap();
        assert_eq!(format, SourceFormat::Png);
        let format =
            detect_format(Path::new("photo.jpeg"), PNG_SIGNATURE).unwrap();
        assert_eq!(format, SourceFormat::Jpeg);
    }

    #[test]
    fn sniffing_applies_without_extension() {
        let format =
            detect_format(Path::new("icon"), PNG_SIGNATURE).unwrap();
        assert_eq!(format, SourceFormat::Png);
        assert_eq!(format.mime_type(), "image/png");
        let format =
            detect_format(Path::new("photo"), JPEG_SIGNATURE).unwrap();
        assert_eq!(format, SourceFormat::Jpeg);
        assert_eq!(format.mime_type(), "image/jpeg");
    }

    #[test]
    fn unsupported_extension_is_a_descriptive_error() {
        let error =
            detect_format(Path::new("anim.gif"), b"GIF89a").unwrap_err();
        assert!(error.to_string().contains("unsupported file type"));
        assert!(error.to_string().contains("image/gif"));
    }

    #[test]
    fn sniffed_bmp_content_is_a_descriptive_error() {
        let error = detect_format(Path::new("picture"), b"BM\x3a\x00")
            .unwrap_err();
        assert!(error.to_string().contains("unsupported file type"));
        assert!(error.to_string().contains("image/bmp"));
    }

    #[test]
    fn decode_rejects_malformed_data() {
        let error = decode_image(b"not actually png", SourceFormat::Png)
            .unwrap_err();
        assert!(error.to_string().contains("Malformed PNG data"));
    }

    #[test]
    fn decode_recovers_encoded_pixels() {
        let rgba: &[u8] = b"\xff\x00\x00\xff\x00\xff\x00\x80\
                            \x00\x00\xff\xff\xff\xff\xff\x00";
        let bitmap = Bitmap::from_rgba_data(2, 2, rgba.to_vec());
        let mut data = Vec::new();
        bitmap.write_png(&mut data).unwrap();
        let decoded = decode_image(&data, SourceFormat::Png).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.rgba_data(), rgba);
    }
}

//===========================================================================//
