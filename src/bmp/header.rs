//! BMP file header and info header model.

use crate::error::BmpError;

use super::utils::row_stride;

/// Size of the fixed file header that precedes every info header.
pub const FILE_HEADER_SIZE: usize = 14;

/// Magic word at the start of every supported file.
pub const MAGIC: [u8; 2] = *b"BM";

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte header at the start of the file.
///
/// The 4 reserved bytes at offset 6 are not kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Always [`MAGIC`] on a successfully decoded image.
    pub magic: [u8; 2],
    /// Total file size as declared by the file. May disagree with the actual
    /// buffer length unless decoded with [`Strictness::Strict`](super::Strictness).
    pub file_size: u32,
    /// Byte offset of the pixel array from the start of the file.
    pub pixel_offset: u32,
}

// ── Info header variants ────────────────────────────────────────────

/// Field layout shared by a group of info header variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutFamily {
    /// OS/2 style: unsigned 16-bit width and height, always bottom-up.
    Legacy,
    /// Windows style: signed 32-bit width and height; negative height means
    /// rows are stored top-down.
    Modern,
}

/// Recognized info header kinds, identified by their declared byte size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfoHeaderVariant {
    /// `BITMAPCOREHEADER`, 12 bytes.
    Core,
    /// `OS22XBITMAPHEADER` truncated to 16 bytes.
    Os2Short,
    /// `OS22XBITMAPHEADER`, 64 bytes.
    Os2,
    /// `BITMAPINFOHEADER`, 40 bytes.
    Info,
    /// `BITMAPV4HEADER`, 108 bytes.
    V4,
    /// `BITMAPV5HEADER`, 124 bytes.
    V5,
}

impl InfoHeaderVariant {
    /// Look up the variant for a declared info header size.
    pub fn from_size(size: u32) -> Option<Self> {
        match size {
            12 => Some(Self::Core),
            16 => Some(Self::Os2Short),
            64 => Some(Self::Os2),
            40 => Some(Self::Info),
            108 => Some(Self::V4),
            124 => Some(Self::V5),
            _ => None,
        }
    }

    /// Declared byte size of this info header.
    pub fn size(self) -> u32 {
        match self {
            Self::Core => 12,
            Self::Os2Short => 16,
            Self::Os2 => 64,
            Self::Info => 40,
            Self::V4 => 108,
            Self::V5 => 124,
        }
    }

    pub fn family(self) -> LayoutFamily {
        match self {
            Self::Core | Self::Os2Short | Self::Os2 => LayoutFamily::Legacy,
            Self::Info | Self::V4 | Self::V5 => LayoutFamily::Modern,
        }
    }

    /// Name of the corresponding C struct, as printed by the info line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Core => "BITMAPCOREHEADER",
            Self::Os2Short => "OS22XBITMAPHEADER_16",
            Self::Os2 => "OS22XBITMAPHEADER",
            Self::Info => "BITMAPINFOHEADER",
            Self::V4 => "BITMAPV4HEADER",
            Self::V5 => "BITMAPV5HEADER",
        }
    }
}

impl core::fmt::Display for InfoHeaderVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw fields of a [`LayoutFamily::Legacy`] info header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyInfoHeader {
    pub variant: InfoHeaderVariant,
    pub width: u16,
    pub height: u16,
    pub bpp: u16,
}

/// Raw fields of a [`LayoutFamily::Modern`] info header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModernInfoHeader {
    pub variant: InfoHeaderVariant,
    pub width: i32,
    /// Negative for top-down images.
    pub height: i32,
    pub bpp: u16,
}

/// Info header as stored in the file, one arm per layout family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoHeader {
    Legacy(LegacyInfoHeader),
    Modern(ModernInfoHeader),
}

impl InfoHeader {
    pub fn variant(&self) -> InfoHeaderVariant {
        match self {
            Self::Legacy(h) => h.variant,
            Self::Modern(h) => h.variant,
        }
    }

    pub fn bpp(&self) -> u16 {
        match self {
            Self::Legacy(h) => h.bpp,
            Self::Modern(h) => h.bpp,
        }
    }

    /// Derive display geometry from the raw fields.
    pub(crate) fn geometry(&self) -> Result<ImageGeometry, BmpError> {
        let (width, height, orientation) = match *self {
            Self::Legacy(h) => (
                u32::from(h.width),
                u32::from(h.height),
                Orientation::BottomUp,
            ),
            Self::Modern(h) => {
                if h.width < 0 {
                    return Err(BmpError::NegativeWidth(h.width));
                }
                let orientation = if h.height < 0 {
                    Orientation::TopDown
                } else {
                    Orientation::BottomUp
                };
                (h.width.unsigned_abs(), h.height.unsigned_abs(), orientation)
            }
        };
        let bpp = self.bpp();
        let stride =
            row_stride(width, bpp).ok_or(BmpError::DimensionsTooLarge { width, height })?;

        Ok(ImageGeometry {
            width,
            height,
            bpp,
            orientation,
            stride,
        })
    }
}

// ── Geometry ────────────────────────────────────────────────────────

/// Order in which rows are stored on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Last display row first. The BMP default.
    #[default]
    BottomUp,
    /// First display row first.
    TopDown,
}

/// Validated image geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageGeometry {
    pub width: u32,
    /// Row count (magnitude only; see `orientation` for the sign).
    pub height: u32,
    pub bpp: u16,
    pub orientation: Orientation,
    /// Bytes per stored row, padded to a 4-byte boundary.
    pub stride: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table_round_trips() {
        for size in [12u32, 16, 64, 40, 108, 124] {
            let variant = InfoHeaderVariant::from_size(size).unwrap();
            assert_eq!(variant.size(), size);
        }
    }

    #[test]
    fn unknown_sizes_have_no_variant() {
        for size in [0u32, 1, 14, 20, 52, 56, 100, 125, u32::MAX] {
            assert_eq!(InfoHeaderVariant::from_size(size), None, "size {size}");
        }
    }

    #[test]
    fn families() {
        assert_eq!(InfoHeaderVariant::Core.family(), LayoutFamily::Legacy);
        assert_eq!(InfoHeaderVariant::Os2Short.family(), LayoutFamily::Legacy);
        assert_eq!(InfoHeaderVariant::Os2.family(), LayoutFamily::Legacy);
        assert_eq!(InfoHeaderVariant::Info.family(), LayoutFamily::Modern);
        assert_eq!(InfoHeaderVariant::V4.family(), LayoutFamily::Modern);
        assert_eq!(InfoHeaderVariant::V5.family(), LayoutFamily::Modern);
    }

    fn modern(width: i32, height: i32) -> InfoHeader {
        InfoHeader::Modern(ModernInfoHeader {
            variant: InfoHeaderVariant::Info,
            width,
            height,
            bpp: 8,
        })
    }

    #[test]
    fn negative_height_is_top_down() {
        let g = modern(3, -100).geometry().unwrap();
        assert_eq!(g.height, 100);
        assert_eq!(g.orientation, Orientation::TopDown);

        let g = modern(3, 100).geometry().unwrap();
        assert_eq!(g.height, 100);
        assert_eq!(g.orientation, Orientation::BottomUp);
    }

    #[test]
    fn most_negative_height_does_not_overflow() {
        let g = modern(1, i32::MIN).geometry().unwrap();
        assert_eq!(g.height, 1 << 31);
    }

    #[test]
    fn negative_width_is_rejected() {
        assert!(matches!(
            modern(-4, 4).geometry(),
            Err(BmpError::NegativeWidth(-4))
        ));
    }

    #[test]
    fn legacy_is_always_bottom_up() {
        let g = InfoHeader::Legacy(LegacyInfoHeader {
            variant: InfoHeaderVariant::Core,
            width: 7,
            height: 0xffff,
            bpp: 8,
        })
        .geometry()
        .unwrap();
        assert_eq!(g.width, 7);
        assert_eq!(g.height, 0xffff);
        assert_eq!(g.orientation, Orientation::BottomUp);
        assert_eq!(g.stride, 8);
    }
}
