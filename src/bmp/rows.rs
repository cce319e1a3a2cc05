//! Pixel sampler: stored rows to RGB rows in display order.

use core::iter::FusedIterator;
use core::slice;

use rgb::RGB8;

use super::header::{ImageGeometry, Orientation};
use crate::error::BmpError;

/// Locate the pixel region `[pixel_offset, pixel_offset + height * stride)`.
pub(crate) fn pixel_region<'a>(
    data: &'a [u8],
    pixel_offset: u32,
    geometry: &ImageGeometry,
) -> Result<&'a [u8], BmpError> {
    let needed = (geometry.stride as u64)
        .saturating_mul(u64::from(geometry.height))
        .saturating_add(u64::from(pixel_offset));
    if needed > data.len() as u64 {
        return Err(BmpError::TruncatedPixelData {
            needed,
            actual: data.len(),
        });
    }
    // Both bounds are <= data.len() after the check above.
    Ok(&data[pixel_offset as usize..needed as usize])
}

/// Build a row sampler over the pixel region of `data`.
pub(crate) fn sample_rows<'a>(
    data: &'a [u8],
    pixel_offset: u32,
    geometry: &ImageGeometry,
) -> Result<Rows<'a>, BmpError> {
    match geometry.bpp {
        8 => {}
        other => return Err(BmpError::UnsupportedDepth(other)),
    }
    let region = pixel_region(data, pixel_offset, geometry)?;
    Ok(Rows {
        region,
        width: geometry.width as usize,
        height: geometry.height as usize,
        stride: geometry.stride,
        orientation: geometry.orientation,
        front: 0,
        back: geometry.height as usize,
    })
}

/// Iterator over image rows, top row first, regardless of storage order.
///
/// Created by [`DecodedImage::rows`](crate::DecodedImage::rows). Each call to
/// `rows()` starts again from the top; cloning a `Rows` snapshots its position.
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    region: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
    orientation: Orientation,
    /// Next display row from the top.
    front: usize,
    /// One past the next display row from the bottom.
    back: usize,
}

impl<'a> Rows<'a> {
    fn row(&self, display_row: usize) -> Row<'a> {
        let stored = match self.orientation {
            Orientation::TopDown => display_row,
            Orientation::BottomUp => self.height - 1 - display_row,
        };
        let start = stored * self.stride;
        // 8-bit rows: width <= stride, and region holds height * stride bytes.
        Row {
            samples: self.region[start..start + self.width].iter(),
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let row = self.row(self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.row(self.back))
    }
}

impl ExactSizeIterator for Rows<'_> {}
impl FusedIterator for Rows<'_> {}

/// One display row: exactly `width` RGB samples, padding excluded.
#[derive(Clone, Debug)]
pub struct Row<'a> {
    samples: slice::Iter<'a, u8>,
}

impl<'a> Row<'a> {
    /// Remaining raw 8-bit samples of this row.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.samples.as_slice()
    }
}

#[inline]
fn gray(v: u8) -> RGB8 {
    RGB8::new(v, v, v)
}

impl Iterator for Row<'_> {
    type Item = RGB8;

    fn next(&mut self) -> Option<RGB8> {
        self.samples.next().copied().map(gray)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl DoubleEndedIterator for Row<'_> {
    fn next_back(&mut self) -> Option<RGB8> {
        self.samples.next_back().copied().map(gray)
    }
}

impl ExactSizeIterator for Row<'_> {}
impl FusedIterator for Row<'_> {}
