//! A library for converting PNG and JPEG images into multi-resolution ICO
//! icon files.
//!
//! The converter resamples a single decoded source image into a fixed set
//! of square resolutions (by default 256, 128, 64, 48, 32, and 16 pixels),
//! encodes each resolution as a 32-bit RGBA PNG, and packages them in the
//! conventional ICO container layout understood by existing readers.
//!
//! # Example
//!
//! ```no_run
//! let image = icogen::load_image(std::path::Path::new("app.png")).unwrap();
//! let data = icogen::build_icon(&image, icogen::DEFAULT_SIZES).unwrap();
//! std::fs::write("app.ico", data).unwrap();
//! ```

#![warn(missing_docs)]

//===========================================================================//

macro_rules! invalid_data {
    ($e:expr) => {
        return Err(::std::io::Error::new(
            ::std::io::ErrorKind::InvalidData,
            $e,
        ))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(
            ::std::io::ErrorKind::InvalidData,
            format!($fmt, $($arg)+),
        ))
    };
}

macro_rules! invalid_input {
    ($e:expr) => {
        return Err(::std::io::Error::new(
            ::std::io::ErrorKind::InvalidInput,
            $e,
        ))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(
            ::std::io::ErrorKind::InvalidInput,
            format!($fmt, $($arg)+),
        ))
    };
}

//===========================================================================//

mod bitmap;
mod icondir;
mod loader;

pub use crate::bitmap::Bitmap;
pub use crate::icondir::{build_icon, IconDir, IconDirEntry, DEFAULT_SIZES};
pub use crate::loader::{
    decode_image, detect_format, load_image, SourceFormat,
};

//===========================================================================//
