//! Showing a list of files, one after another.
//!
//! A file that can't be read, decoded, or rendered is reported on the error
//! stream as `bitmap error: <path>: <error>` and the remaining files are still
//! shown.

use std::io::{self, Write};
use std::path::Path;

use enough::Unstoppable;
use log::error;

use crate::bmp::Strictness;
use crate::decode::DecodeRequest;
use crate::error::BmpError;
use crate::file::read_file;
use crate::render::{RenderOptions, render, write_info};

/// What to print for each file.
#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    /// Print the one-line header summary instead of the image.
    pub info_only: bool,
    pub strictness: Strictness,
    pub render: RenderOptions,
}

/// Read, decode, and print one file to `out`.
pub fn show_file<W: Write>(
    out: &mut W,
    path: &Path,
    options: &ViewOptions,
) -> Result<(), BmpError> {
    let data = read_file(path)?;
    let image = DecodeRequest::new(&data)
        .with_strictness(options.strictness)
        .decode()?;
    if options.info_only {
        write_info(out, &path.display().to_string(), &image)
    } else {
        render(out, &image, &options.render, &Unstoppable)
    }
}

/// Show every file in `paths`, reporting failures to `err`.
///
/// Returns how many files failed. Only a failure to write to `err` itself is
/// returned as an error.
pub fn show_files<W, E, P>(
    out: &mut W,
    err: &mut E,
    paths: impl IntoIterator<Item = P>,
    options: &ViewOptions,
) -> io::Result<usize>
where
    W: Write,
    E: Write,
    P: AsRef<Path>,
{
    let mut failed = 0usize;
    for path in paths {
        let path = path.as_ref();
        if let Err(e) = show_file(out, path, options) {
            writeln!(err, "bitmap error: {}: {e}", path.display())?;
            failed += 1;
        }
    }
    if failed > 0 {
        error!("{failed} file(s) could not be shown");
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // 2x2 bottom-up 8-bit image with an exact declared size.
    fn tiny() -> Vec<u8> {
        let mut data = vec![0u8; 62];
        data[0..2].copy_from_slice(b"BM");
        data[2..6].copy_from_slice(&62u32.to_le_bytes());
        data[10..14].copy_from_slice(&54u32.to_le_bytes());
        data[14..18].copy_from_slice(&40u32.to_le_bytes());
        data[18..22].copy_from_slice(&2i32.to_le_bytes());
        data[22..26].copy_from_slice(&2i32.to_le_bytes());
        data[26..28].copy_from_slice(&1u16.to_le_bytes());
        data[28..30].copy_from_slice(&8u16.to_le_bytes());
        data[54..62].copy_from_slice(&[30, 40, 0, 0, 10, 20, 0, 0]);
        data
    }

    /// A file under the system temp dir, removed on drop.
    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, contents: &[u8]) -> Self {
            let path = std::env::temp_dir()
                .join(format!("zenbmpview-{}-{name}", std::process::id()));
            std::fs::write(&path, contents).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn missing_path() -> PathBuf {
        std::env::temp_dir().join(format!("zenbmpview-{}-missing.bmp", std::process::id()))
    }

    fn run(paths: &[&Path], options: &ViewOptions) -> (String, String, usize) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let failed = show_files(&mut out, &mut err, paths, options).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            failed,
        )
    }

    #[test]
    fn failed_file_is_reported_and_the_rest_still_shown() {
        let good = TempFile::new("good.bmp", &tiny());
        let missing = missing_path();
        let options = ViewOptions {
            info_only: true,
            ..Default::default()
        };

        let paths = [&good.0, &missing, &good.0].map(PathBuf::as_path);
        let (out, err, failed) = run(&paths, &options);
        assert_eq!(failed, 1);

        let info = format!(
            "\"{}\" (62B) 'B' 'M' 2x2 (4B row) 8bpp BITMAPINFOHEADER (40B)\n",
            good.0.display()
        );
        assert_eq!(out, info.repeat(2));

        let prefix = format!("bitmap error: {}: cannot read file: ", missing.display());
        assert!(err.starts_with(&prefix), "{err}");
        assert_eq!(err.lines().count(), 1);
        assert_eq!(err.matches(&*missing.display().to_string()).count(), 1);
    }

    #[test]
    fn all_good_files_report_no_failures() {
        let good = TempFile::new("render.bmp", &tiny());
        let options = ViewOptions {
            render: RenderOptions { cell: "#".into() },
            ..Default::default()
        };
        let (out, err, failed) = run(&[good.0.as_path()], &options);
        assert_eq!(failed, 0);
        assert!(err.is_empty());
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("\x1b[38;2;10;10;10m"));
    }

    #[test]
    fn strictness_is_applied_per_file() {
        let mut data = tiny();
        data[2..6].copy_from_slice(&1000u32.to_le_bytes());
        let sloppy = TempFile::new("sloppy.bmp", &data);

        let options = ViewOptions {
            info_only: true,
            strictness: Strictness::Strict,
            ..Default::default()
        };
        let (out, err, failed) = run(&[sloppy.0.as_path()], &options);
        assert_eq!(failed, 1);
        assert!(out.is_empty());
        assert!(err.contains("declared file size (1000)"), "{err}");

        let options = ViewOptions {
            info_only: true,
            ..Default::default()
        };
        let (_, _, failed) = run(&[sloppy.0.as_path()], &options);
        assert_eq!(failed, 0);
    }
}
