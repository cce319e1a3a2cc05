//! True-color terminal output.
//!
//! Each pixel becomes one cell whose foreground and background are both set
//! with 24-bit SGR sequences (`ESC[38;2;R;G;Bm`, `ESC[48;2;R;G;Bm`), followed
//! by a reset. One terminal line per image row.

use alloc::string::{String, ToString};
use std::io::Write;

use enough::Stop;
use rgb::RGB8;

use crate::decode::DecodedImage;
use crate::error::BmpError;

/// Terminal rendering options.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Text drawn for every pixel. Two columns roughly square up a cell.
    pub cell: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell: "  ".into(),
        }
    }
}

fn io_error(e: std::io::Error) -> BmpError {
    BmpError::Render(e.to_string())
}

fn write_pixel<W: Write>(out: &mut W, px: RGB8, cell: &str) -> std::io::Result<()> {
    let RGB8 { r, g, b } = px;
    write!(out, "\x1b[38;2;{r};{g};{b}m\x1b[48;2;{r};{g};{b}m{cell}\x1b[0m")
}

/// Draw the image to `out`, top row first.
///
/// `stop` is checked every 16 rows.
pub fn render<W: Write>(
    out: &mut W,
    image: &DecodedImage<'_>,
    options: &RenderOptions,
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    let rows = image.rows()?;
    for (row_idx, row) in rows.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            write_pixel(out, px, &options.cell).map_err(io_error)?;
        }
        writeln!(out).map_err(io_error)?;
    }
    out.flush().map_err(io_error)
}

/// Write the one-line header summary for `image`, labelled with `name`.
///
/// `"name" (66B) 'B' 'M' 2x2 (4B row) 8bpp BITMAPINFOHEADER (40B)`
pub fn write_info<W: Write>(
    out: &mut W,
    name: &str,
    image: &DecodedImage<'_>,
) -> Result<(), BmpError> {
    let fh = image.file_header();
    let g = image.geometry();
    let variant = image.variant();
    writeln!(
        out,
        "\"{name}\" ({}B) '{}' '{}' {}x{} ({}B row) {}bpp {} ({}B)",
        fh.file_size,
        char::from(fh.magic[0]),
        char::from(fh.magic[1]),
        g.width,
        g.height,
        g.stride,
        g.bpp,
        variant,
        variant.size(),
    )
    .map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use enough::Unstoppable;

    // 2x2 top-down 8-bit image: rows [10, 20] and [30, 40].
    fn tiny() -> Vec<u8> {
        let mut data = alloc::vec![0u8; 62];
        data[0..2].copy_from_slice(b"BM");
        data[2..6].copy_from_slice(&62u32.to_le_bytes());
        data[10..14].copy_from_slice(&54u32.to_le_bytes());
        data[14..18].copy_from_slice(&40u32.to_le_bytes());
        data[18..22].copy_from_slice(&2i32.to_le_bytes());
        data[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        data[26..28].copy_from_slice(&1u16.to_le_bytes());
        data[28..30].copy_from_slice(&8u16.to_le_bytes());
        data[54..62].copy_from_slice(&[10, 20, 0, 0, 30, 40, 0, 0]);
        data
    }

    #[test]
    fn renders_one_line_per_row() {
        let data = tiny();
        let image = crate::decode(&data).unwrap();
        let mut out = Vec::new();
        let options = RenderOptions { cell: "#".into() };
        render(&mut out, &image, &options, &Unstoppable).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\x1b[38;2;10;10;10m\x1b[48;2;10;10;10m#\x1b[0m\x1b[38;2;20;20;20m\x1b[48;2;20;20;20m#\x1b[0m"
        );
        assert!(lines[1].starts_with("\x1b[38;2;30;30;30m"));
    }

    #[test]
    fn info_line() {
        let data = tiny();
        let image = crate::decode(&data).unwrap();
        let mut out = Vec::new();
        write_info(&mut out, "tiny.bmp", &image).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"tiny.bmp\" (62B) 'B' 'M' 2x2 (4B row) 8bpp BITMAPINFOHEADER (40B)\n"
        );
    }

    #[test]
    fn render_propagates_sampler_errors() {
        let mut data = tiny();
        data[28..30].copy_from_slice(&24u16.to_le_bytes());
        let image = crate::decode(&data).unwrap();
        let err = render(&mut Vec::new(), &image, &RenderOptions::default(), &Unstoppable);
        assert!(matches!(err, Err(BmpError::UnsupportedDepth(24))));
    }
}
