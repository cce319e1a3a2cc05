//! # zenbmpview
//!
//! BMP header decoder and 8-bit pixel sampler, with an optional true-color
//! terminal viewer.
//!
//! ## Zero-Copy Decoding
//!
//! [`decode`] only parses the header chain and returns a [`DecodedImage`]
//! borrowing the input buffer. [`DecodedImage::rows`] then walks the stored
//! rows lazily and yields them top row first, whichever order the file
//! stores them in. Nothing is copied or allocated along the way.
//!
//! ## Supported Headers
//!
//! Info headers are recognized by their declared size:
//! - `BITMAPCOREHEADER` (12), `OS22XBITMAPHEADER` (16 and 64): 16-bit
//!   unsigned dimensions, always bottom-up
//! - `BITMAPINFOHEADER` (40), `BITMAPV4HEADER` (108), `BITMAPV5HEADER` (124):
//!   32-bit signed dimensions, negative height means top-down
//!
//! Sampling supports 8 bits per pixel, read as grayscale intensity.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Compressed (RLE, bitfields) or palette-indexed pixel data
//! - Bit depths other than 8
//! - Scaling, cropping, or color conversion
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmpview::{DecodeRequest, Strictness};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let image = DecodeRequest::new(data)
//!     .with_strictness(Strictness::Strict)
//!     .decode()?;
//! println!("{}x{} {}", image.width(), image.height(), image.variant());
//!
//! for row in image.rows()? {
//!     for px in row {
//!         let _ = (px.r, px.g, px.b);
//!     }
//! }
//! # Ok::<(), zenbmpview::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod limits;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "std")]
mod render;
#[cfg(feature = "std")]
mod view;

// Re-exports
pub use bmp::Strictness;
pub use bmp::header::{
    FILE_HEADER_SIZE, FileHeader, ImageGeometry, InfoHeader, InfoHeaderVariant, LayoutFamily,
    LegacyInfoHeader, MAGIC, ModernInfoHeader, Orientation,
};
pub use bmp::rows::{Row, Rows};
pub use decode::{DecodeRequest, DecodedImage};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use limits::Limits;
pub use rgb::RGB8;

#[cfg(feature = "std")]
pub use file::read_file;
#[cfg(feature = "std")]
pub use render::{RenderOptions, render, write_info};
#[cfg(feature = "std")]
pub use view::{ViewOptions, show_file, show_files};

/// Decode BMP headers with default strictness and no limits.
pub fn decode(data: &[u8]) -> Result<DecodedImage<'_>, BmpError> {
    DecodeRequest::new(data).decode()
}
