#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(info_size: u32, pixel_bytes: usize) -> Vec<u8> {
    let offset = 14 + info_size as usize;
    let mut bmp = vec![0u8; offset + pixel_bytes];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&((offset + pixel_bytes) as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&(offset as u32).to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&info_size.to_le_bytes()); // info header size
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // BITMAPINFOHEADER 2x2 8-bit, top-down
    let mut bmp = header(40, 8);
    bmp[18..22].copy_from_slice(&2i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&(-2i32).to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&8u16.to_le_bytes()); // bpp
    bmp[54..62].copy_from_slice(&[0x10, 0x80, 0, 0, 0xc0, 0xff, 0, 0]);
    fs::write(format!("{dir}/info_2x2_topdown.bmp"), &bmp).unwrap();

    // Same, bottom-up, as V5
    let mut v5 = header(124, 8);
    v5[18..22].copy_from_slice(&2i32.to_le_bytes());
    v5[22..26].copy_from_slice(&2i32.to_le_bytes());
    v5[26..28].copy_from_slice(&1u16.to_le_bytes());
    v5[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(format!("{dir}/v5_2x2.bmp"), &v5).unwrap();

    // BITMAPCOREHEADER 3x1 8-bit
    let mut core = header(12, 4);
    core[18..20].copy_from_slice(&3u16.to_le_bytes()); // width
    core[20..22].copy_from_slice(&1u16.to_le_bytes()); // height
    core[22..24].copy_from_slice(&1u16.to_le_bytes()); // planes
    core[24..26].copy_from_slice(&8u16.to_le_bytes()); // bpp
    core[26..29].copy_from_slice(&[0x00, 0x7f, 0xff]);
    fs::write(format!("{dir}/core_3x1.bmp"), &core).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/info_size_20.bin"), header(20, 0)).unwrap();
    fs::write(format!("{dir}/header_only.bin"), &bmp[..30]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
