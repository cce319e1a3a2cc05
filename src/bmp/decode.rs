//! BMP header chain decoding.
//!
//! Reads the 14-byte file header, resolves the info header variant from its
//! declared size and extracts the geometry fields for that variant's layout.
//! Every field read is bounds-checked; nothing past the headers is touched.

use log::{debug, trace, warn};

use super::header::{
    FILE_HEADER_SIZE, FileHeader, ImageGeometry, InfoHeader, InfoHeaderVariant, LayoutFamily,
    LegacyInfoHeader, MAGIC, ModernInfoHeader,
};
use super::utils::{i32_le_at, u16_le_at, u32_le_at};
use crate::error::BmpError;

// File header fields.
const FILE_SIZE_OFFSET: usize = 0x02;
const PIXEL_OFFSET_OFFSET: usize = 0x0a;

// First field of the info header is its own size.
const INFO_SIZE_OFFSET: usize = 0x0e;

const LEGACY_WIDTH_OFFSET: usize = 0x12;
const LEGACY_HEIGHT_OFFSET: usize = 0x14;
const LEGACY_BPP_OFFSET: usize = 0x18;

const MODERN_WIDTH_OFFSET: usize = 0x12;
const MODERN_HEIGHT_OFFSET: usize = 0x16;
const MODERN_BPP_OFFSET: usize = 0x1c;

// ── Strictness ──────────────────────────────────────────────────────

/// Controls how strictly the header decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Reject files whose declared file size doesn't match the buffer length.
    Strict,

    /// Default behavior. A file size mismatch is logged as a warning and
    /// decoding continues; pixel bounds are still checked when sampling.
    #[default]
    Standard,
}

// ── Parsed headers ──────────────────────────────────────────────────

pub(crate) struct BmpHeaders {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub geometry: ImageGeometry,
}

/// Parse the file header and info header.
pub(crate) fn parse_headers(data: &[u8], strictness: Strictness) -> Result<BmpHeaders, BmpError> {
    if data.len() < FILE_HEADER_SIZE {
        return Err(BmpError::TruncatedFile);
    }

    let magic = [data[0], data[1]];
    if magic != MAGIC {
        return Err(BmpError::BadMagic);
    }

    let file_size = u32_le_at(data, FILE_SIZE_OFFSET)?;
    let pixel_offset = u32_le_at(data, PIXEL_OFFSET_OFFSET)?;
    check_file_size(file_size, data.len(), strictness)?;

    let info_size = u32_le_at(data, INFO_SIZE_OFFSET)?;
    let variant = InfoHeaderVariant::from_size(info_size)
        .ok_or(BmpError::UnknownInfoHeaderVariant(info_size))?;
    trace!("BMP info header: {variant} ({info_size} bytes)");

    let info_header = match variant.family() {
        LayoutFamily::Legacy => InfoHeader::Legacy(LegacyInfoHeader {
            variant,
            width: u16_le_at(data, LEGACY_WIDTH_OFFSET)?,
            height: u16_le_at(data, LEGACY_HEIGHT_OFFSET)?,
            bpp: u16_le_at(data, LEGACY_BPP_OFFSET)?,
        }),
        LayoutFamily::Modern => InfoHeader::Modern(ModernInfoHeader {
            variant,
            width: i32_le_at(data, MODERN_WIDTH_OFFSET)?,
            height: i32_le_at(data, MODERN_HEIGHT_OFFSET)?,
            bpp: u16_le_at(data, MODERN_BPP_OFFSET)?,
        }),
    };

    let geometry = info_header.geometry()?;
    debug!(
        "BMP {}x{} {}bpp {:?}, stride {} bytes, pixels at {pixel_offset}",
        geometry.width, geometry.height, geometry.bpp, geometry.orientation, geometry.stride
    );

    Ok(BmpHeaders {
        file_header: FileHeader {
            magic,
            file_size,
            pixel_offset,
        },
        info_header,
        geometry,
    })
}

fn check_file_size(declared: u32, actual: usize, strictness: Strictness) -> Result<(), BmpError> {
    if u64::from(declared) == actual as u64 {
        return Ok(());
    }
    match strictness {
        Strictness::Strict => Err(BmpError::FileSizeMismatch { declared, actual }),
        Strictness::Standard => {
            warn!("BMP file size field ({declared}) doesn't match actual size ({actual})");
            Ok(())
        }
    }
}
