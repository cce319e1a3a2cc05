use alloc::format;

use crate::bmp::header::ImageGeometry;
use crate::error::BmpError;

/// Resource limits applied once the image geometry is known.
///
/// All fields default to `None` (no limit). Nothing is allocated while
/// decoding, so the limits bound what a caller will later read or build
/// from the [`DecodedImage`](crate::DecodedImage): the sampled pixel count,
/// or the padded pixel region the sampler walks.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum sampled pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the pixel region, `stride * height` bytes including
    /// row padding.
    pub max_pixel_bytes: Option<u64>,
}

impl Limits {
    /// Check a decoded geometry. The first limit exceeded is reported.
    pub(crate) fn check(&self, geometry: &ImageGeometry) -> Result<(), BmpError> {
        let width = u64::from(geometry.width);
        let height = u64::from(geometry.height);
        // u32 * u32 fits in u64.
        let pixels = width * height;
        let region = (geometry.stride as u64).saturating_mul(height);

        let checks = [
            ("width", width, self.max_width),
            ("height", height, self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("pixel region (bytes)", region, self.max_pixel_bytes),
        ];
        for (what, value, limit) in checks {
            if let Some(max) = limit {
                if value > max {
                    return Err(BmpError::LimitExceeded(format!(
                        "{what} {value} exceeds limit {max} for {}x{} {}bpp image",
                        geometry.width, geometry.height, geometry.bpp
                    )));
                }
            }
        }
        Ok(())
    }
}
