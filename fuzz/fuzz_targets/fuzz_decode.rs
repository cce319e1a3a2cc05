#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmpview::{DecodeRequest, Limits, RenderOptions, Strictness};

fuzz_target!(|data: &[u8]| {
    // Header parsing and sampling must never panic or read out of bounds
    let limits = Limits {
        max_height: Some(1 << 16),
        max_pixels: Some(1 << 22),
        max_pixel_bytes: Some(1 << 24),
        ..Default::default()
    };
    for strictness in [Strictness::Standard, Strictness::Strict] {
        let Ok(image) = DecodeRequest::new(data)
            .with_limits(&limits)
            .with_strictness(strictness)
            .decode()
        else {
            continue;
        };
        if let Ok(rows) = image.rows() {
            for row in rows {
                assert_eq!(row.count(), image.width() as usize);
            }
        }
        let _ = zenbmpview::render(
            &mut std::io::sink(),
            &image,
            &RenderOptions::default(),
            &enough::Unstoppable,
        );
    }
});
