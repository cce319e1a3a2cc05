use crate::bmp::Strictness;
use crate::bmp::header::{FileHeader, ImageGeometry, InfoHeader, InfoHeaderVariant};
use crate::bmp::rows::{Rows, pixel_region, sample_rows};
use crate::error::BmpError;
use crate::limits::Limits;

/// Decode request with optional limits and strictness.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    strictness: Strictness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            strictness: Strictness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Parse the headers. The pixel data is not read until [`DecodedImage::rows`].
    pub fn decode(self) -> Result<DecodedImage<'a>, BmpError> {
        crate::bmp::decode(self.data, self.limits, self.strictness)
    }
}

/// A BMP file with validated headers.
///
/// Borrows the input buffer; pixel data is never copied.
#[derive(Clone, Debug)]
pub struct DecodedImage<'a> {
    data: &'a [u8],
    file_header: FileHeader,
    info_header: InfoHeader,
    geometry: ImageGeometry,
}

impl<'a> DecodedImage<'a> {
    pub(crate) fn new(
        data: &'a [u8],
        file_header: FileHeader,
        info_header: InfoHeader,
        geometry: ImageGeometry,
    ) -> Self {
        Self {
            data,
            file_header,
            info_header,
            geometry,
        }
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn variant(&self) -> InfoHeaderVariant {
        self.info_header.variant()
    }

    pub fn geometry(&self) -> &ImageGeometry {
        &self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// The whole input buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The stored pixel rows, `height * stride` bytes from the pixel offset.
    ///
    /// Returns [`BmpError::TruncatedPixelData`] if the buffer is too short.
    pub fn pixel_region(&self) -> Result<&'a [u8], BmpError> {
        pixel_region(self.data, self.file_header.pixel_offset, &self.geometry)
    }

    /// RGB rows in display order (top row first).
    ///
    /// Fails with [`BmpError::UnsupportedDepth`] for anything but 8 bpp and
    /// with [`BmpError::TruncatedPixelData`] if the pixel region doesn't fit
    /// in the buffer. Each call starts from the top row.
    pub fn rows(&self) -> Result<Rows<'a>, BmpError> {
        sample_rows(self.data, self.file_header.pixel_offset, &self.geometry)
    }

    /// Collect the display-order pixels into an [`imgref::ImgVec`].
    ///
    /// An image with zero width or height decodes and samples fine, but has
    /// no `ImgVec` form; it fails with [`BmpError::EmptyImage`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<rgb::RGB8>, BmpError> {
        let rows = self.rows()?;
        let (width, height) = (self.geometry.width, self.geometry.height);
        if width == 0 || height == 0 {
            return Err(BmpError::EmptyImage { width, height });
        }
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        let mut pixels = alloc::vec::Vec::with_capacity(count);
        for row in rows {
            pixels.extend(row);
        }
        Ok(imgref::ImgVec::new(pixels, width as usize, height as usize))
    }
}
