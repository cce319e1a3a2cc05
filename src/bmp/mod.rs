//! BMP header decoder and 8-bit pixel sampler (internal).
//!
//! Use top-level [`crate::decode`] or [`crate::DecodeRequest`].

mod decode;
pub(crate) mod header;
pub(crate) mod rows;
mod utils;

pub use decode::Strictness;

use crate::decode::DecodedImage;
use crate::error::BmpError;
use crate::limits::Limits;

/// Decode BMP headers into a [`DecodedImage`] borrowing `data`.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    strictness: Strictness,
) -> Result<DecodedImage<'a>, BmpError> {
    let headers = decode::parse_headers(data, strictness)?;
    if let Some(limits) = limits {
        limits.check(&headers.geometry)?;
    }
    Ok(DecodedImage::new(
        data,
        headers.file_header,
        headers.info_header,
        headers.geometry,
    ))
}
