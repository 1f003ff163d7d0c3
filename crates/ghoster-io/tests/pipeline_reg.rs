//! End-to-end pipeline regression test
//!
//! Decode a PNG into a raster, ghost it, encode the result, and decode
//! it again: the transform output must survive the trip unchanged.

use ghoster_color::{FillColor, ghost};
use ghoster_io::{read_png, write_png};
use ghoster_test::gradient_raster;
use std::io::Cursor;

#[test]
fn ghost_output_survives_png_roundtrip() {
    let src = gradient_raster(64, 16);

    let mut encoded_src = Vec::new();
    write_png(&src, &mut encoded_src).unwrap();
    let decoded_src = read_png(Cursor::new(encoded_src)).unwrap();
    assert_eq!(decoded_src.data(), src.data());

    let ghosted = ghost(&decoded_src, FillColor::new(0x4e, 0x21, 0xed));

    let mut encoded_out = Vec::new();
    write_png(&ghosted, &mut encoded_out).unwrap();
    let decoded_out = read_png(Cursor::new(encoded_out)).unwrap();

    assert_eq!(decoded_out.data(), ghosted.data());
    // Dark edge opaque, light edge transparent
    assert_eq!(decoded_out.rgba_at(0, 0), Some((0x4e, 0x21, 0xed, 255)));
    assert_eq!(decoded_out.rgba_at(63, 15), Some((0x4e, 0x21, 0xed, 0)));
}
