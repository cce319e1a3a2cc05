//! Bounds-checked little-endian field reads and row arithmetic.

use crate::error::BmpError;

/// Read `N` bytes at `offset`, or fail with [`BmpError::TruncatedFile`].
fn fixed_at<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], BmpError> {
    let end = offset.checked_add(N).ok_or(BmpError::TruncatedFile)?;
    let bytes = data.get(offset..end).ok_or(BmpError::TruncatedFile)?;
    let mut buf = [0u8; N];
    buf.copy_from_slice(bytes);
    Ok(buf)
}

pub(crate) fn u16_le_at(data: &[u8], offset: usize) -> Result<u16, BmpError> {
    fixed_at::<2>(data, offset).map(u16::from_le_bytes)
}

pub(crate) fn u32_le_at(data: &[u8], offset: usize) -> Result<u32, BmpError> {
    fixed_at::<4>(data, offset).map(u32::from_le_bytes)
}

pub(crate) fn i32_le_at(data: &[u8], offset: usize) -> Result<i32, BmpError> {
    fixed_at::<4>(data, offset).map(i32::from_le_bytes)
}

/// Bytes per stored row: `ceil(width * bpp / 32) * 4`.
///
/// Rows are always padded to a 4-byte boundary. `None` if the stride
/// doesn't fit in `usize`.
pub(crate) fn row_stride(width: u32, bpp: u16) -> Option<usize> {
    let bits = u64::from(width) * u64::from(bpp);
    usize::try_from(bits.div_ceil(32) * 4).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(u16_le_at(&data, 0).unwrap(), 0x0201);
        assert_eq!(u32_le_at(&data, 0).unwrap(), 0x0403_0201);
        assert_eq!(i32_le_at(&data, 4).unwrap(), -1);
    }

    #[test]
    fn reads_past_end_are_truncated() {
        let data = [0u8; 5];
        assert!(matches!(u32_le_at(&data, 2), Err(BmpError::TruncatedFile)));
        assert!(matches!(u16_le_at(&data, 4), Err(BmpError::TruncatedFile)));
        assert!(matches!(
            u16_le_at(&data, usize::MAX),
            Err(BmpError::TruncatedFile)
        ));
        assert!(u16_le_at(&data, 3).is_ok());
    }

    #[test]
    fn stride_is_padded_to_four_bytes() {
        assert_eq!(row_stride(1, 8).unwrap(), 4);
        assert_eq!(row_stride(2, 8).unwrap(), 4);
        assert_eq!(row_stride(5, 8).unwrap(), 8);
        assert_eq!(row_stride(3, 24).unwrap(), 12);
        assert_eq!(row_stride(33, 1).unwrap(), 8);
        assert_eq!(row_stride(0, 8).unwrap(), 0);
    }

    #[test]
    fn stride_law_holds_for_common_depths() {
        for bpp in [1u16, 8, 24, 32] {
            for width in 1u32..=300 {
                let stride = row_stride(width, bpp).unwrap();
                assert_eq!(stride % 4, 0, "width {width} bpp {bpp}");
                let min = (u64::from(width) * u64::from(bpp)).div_ceil(8);
                assert!(stride as u64 >= min, "width {width} bpp {bpp}");
            }
        }
    }
}
