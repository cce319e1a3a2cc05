use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, sampling, and rendering.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("file is truncated: a required header field lies past the end of the data")]
    TruncatedFile,

    #[error("bad magic bytes, expected \"BM\"")]
    BadMagic,

    #[error("unknown info header variant (declared size {0})")]
    UnknownInfoHeaderVariant(u32),

    #[error("pixel data is truncated: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: u64, actual: usize },

    #[error("unsupported bit depth: {0} bpp")]
    UnsupportedDepth(u16),

    #[error("declared file size ({declared}) doesn't match actual size ({actual})")]
    FileSizeMismatch { declared: u32, actual: usize },

    #[error("negative image width: {0}")]
    NegativeWidth(i32),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// `path` is kept for callers; the message itself only names the cause.
    #[error("cannot read file: {reason}")]
    FileAccess { path: String, reason: String },

    #[error("terminal output failed: {0}")]
    Render(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
