use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use tracing::debug;

use crate::error::{RasterError, Result};
use crate::raster::types::Raster;

/// Decode an image from raw bytes
///
/// The container format is guessed from the data; JPEG and PNG are
/// supported. Any alpha channel is dropped by converting to RGB8.
pub fn decode(bytes: &[u8]) -> Result<Raster> {
    let reader = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| RasterError::DecodeFailed {
            reason: e.to_string(),
        })?;

    let dynamic = reader.decode().map_err(|e| RasterError::DecodeFailed {
        reason: e.to_string(),
    })?;

    let raster = Raster::new(dynamic.to_rgb8());
    debug!("Decoded {}x{} image from {} bytes", raster.width(), raster.height(), bytes.len());
    Ok(raster)
}

/// Encode a raster as PNG into a caller-supplied buffer
///
/// The caller owns the buffer and hands it to whatever transport or storage
/// comes next. The buffer is cleared before encoding, so on failure it is
/// left empty rather than holding a partial stream.
pub fn encode_png(raster: &Raster, buffer: &mut Vec<u8>) -> Result<()> {
    buffer.clear();

    let encoder = PngEncoder::new(&mut *buffer);
    encoder
        .write_image(
            raster.as_image().as_raw(),
            raster.width(),
            raster.height(),
            ColorType::Rgb8,
        )
        .map_err(|e| {
            buffer.clear();
            RasterError::EncodeFailed {
                reason: e.to_string(),
            }
        })?;

    debug!("Encoded {}x{} raster to {} PNG bytes", raster.width(), raster.height(), buffer.len());
    Ok(())
}

/// Load and decode an image file
///
/// File read failures report the path; decode failures keep the underlying
/// codec cause and are propagated unmodified.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|_| RasterError::LoadFailed {
        path: path.display().to_string(),
    })?;

    decode(&bytes)
}

/// Encode a raster as PNG and write it to a file
pub fn save_png<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();

    let mut buffer = Vec::new();
    encode_png(raster, &mut buffer)?;

    std::fs::write(path, &buffer).map_err(|_| {
        RasterError::SaveFailed {
            path: path.display().to_string(),
        }
    })?;

    Ok(())
}

/// Check if a path looks like a supported input format
pub fn is_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    matches!(
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("jpg") | Some("jpeg") | Some("png")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let raster = Raster::new_filled(width, height, color);
        let mut buffer = Vec::new();
        encode_png(&raster, &mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_decode_roundtrips_png() {
        let bytes = png_bytes(5, 7, [200, 100, 50]);
        let raster = decode(&bytes).unwrap();

        assert_eq!(raster.dimensions(), (5, 7));
        assert_eq!(raster.get_pixel(2, 3), [200, 100, 50]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(b"definitely not an image");
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_clears_buffer_first() {
        let raster = Raster::new_black(2, 2);
        let mut buffer = vec![0xFFu8; 64];
        encode_png(&raster, &mut buffer).unwrap();

        // PNG signature, not the stale bytes
        assert_eq!(&buffer[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_load_and_save_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        let raster = Raster::new_filled(3, 3, [1, 2, 3]);
        save_png(&raster, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 3));
        assert_eq!(loaded.get_pixel(1, 1), [1, 2, 3]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("no_such_file.png");
        assert!(result.is_err());
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("photo.JPG"));
        assert!(is_supported_extension("photo.png"));
        assert!(!is_supported_extension("clip.mp4"));
        assert!(!is_supported_extension("noext"));
    }
}
