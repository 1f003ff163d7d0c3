//! PNG image format support
//!
//! Decodes PNG images of any supported color type into the 4-channel
//! 8-bit RGBA layout of [`Raster`], and encodes rasters as RGBA PNG.

use crate::{IoError, IoResult};
use ghoster_core::{Raster, channel};
use ::png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGBA raster.
///
/// Grayscale, gray+alpha, RGB, and indexed images are expanded to the
/// RGBA layout; 16-bit channels are reduced to 8 bits.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for malformed PNG data and
/// [`IoError::UnsupportedFormat`] for color layouts the normalization
/// pass cannot produce RGBA from.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    // Expand indexed/low-bit images and strip 16-bit channels down to 8
    decoder.set_transformations(Transformations::normalize_to_color8());

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let width = output_info.width;
    let height = output_info.height;
    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after normalization: {:?}",
            output_info.bit_depth
        )));
    }

    let mut rgba =
        Vec::with_capacity(width as usize * height as usize * channel::BYTES_PER_PIXEL);

    match output_info.color_type {
        ColorType::Grayscale => {
            for row in data.chunks_exact(line_size) {
                for &v in &row[..width as usize] {
                    rgba.extend_from_slice(&[v, v, v, 255]);
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            for row in data.chunks_exact(line_size) {
                for px in row[..width as usize * 2].chunks_exact(2) {
                    rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
                }
            }
        }
        ColorType::Rgb => {
            for row in data.chunks_exact(line_size) {
                for px in row[..width as usize * 3].chunks_exact(3) {
                    rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
                }
            }
        }
        ColorType::Rgba => {
            for row in data.chunks_exact(line_size) {
                rgba.extend_from_slice(&row[..width as usize * 4]);
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type after normalization: {other:?}"
            )));
        }
    }

    Ok(Raster::from_vec(width, height, rgba)?)
}

/// Write a raster as an RGBA PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder rejects the stream.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn raster_from_fn(w: u32, h: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Raster {
        let mut rm = Raster::new(w, h).unwrap().try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                let [r, g, b, a] = f(x, y);
                rm.set_rgba(x, y, r, g, b, a).unwrap();
            }
        }
        rm.into()
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let raster = raster_from_fn(10, 7, |x, y| {
            [(x * 20) as u8, (y * 30) as u8, (x + y) as u8, 255 - x as u8]
        });

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.width(), 10);
        assert_eq!(decoded.height(), 7);
        assert_eq!(decoded.data(), raster.data());
    }

    #[test]
    fn test_png_grayscale_expands_to_rgba() {
        // Encode an 8-bit grayscale PNG directly
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 4, 2);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[0, 10, 20, 30, 40, 50, 60, 70]).unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.rgba_at(0, 0), Some((0, 0, 0, 255)));
        assert_eq!(decoded.rgba_at(1, 0), Some((10, 10, 10, 255)));
        assert_eq!(decoded.rgba_at(3, 1), Some((70, 70, 70, 255)));
    }

    #[test]
    fn test_png_rgb_gains_opaque_alpha() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[255, 0, 0, 0, 0, 255]).unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.rgba_at(0, 0), Some((255, 0, 0, 255)));
        assert_eq!(decoded.rgba_at(1, 0), Some((0, 0, 255, 255)));
    }

    #[test]
    fn test_png_gray_alpha_preserved() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::GrayscaleAlpha);
            encoder.set_depth(BitDepth::Eight);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[100, 200, 50, 0]).unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.rgba_at(0, 0), Some((100, 100, 100, 200)));
        assert_eq!(decoded.rgba_at(1, 0), Some((50, 50, 50, 0)));
    }

    #[test]
    fn test_png_decode_error_on_garbage() {
        let garbage = vec![0u8; 64];
        assert!(matches!(
            read_png(Cursor::new(garbage)),
            Err(IoError::DecodeError(_))
        ));
    }
}
