use std::path::Path;

use crate::error::{FlipbookError, FlipbookResult};

/// Decoded RGBA8 pixels of one frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Reads and decodes one frame file into a [`FrameRGBA`].
///
/// The decoder is polymorphic over the still formats the `image` crate
/// supports; the collector's suffix filter is what pins the input format in
/// practice. The file handle is released before this returns.
pub fn decode_frame(path: &Path) -> FlipbookResult<FrameRGBA> {
    let dyn_img = image::open(path).map_err(|e| {
        FlipbookError::decode(format!("failed to decode '{}': {e}", path.display()))
    })?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(FrameRGBA {
        width,
        height,
        data: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = PathBuf::from("target").join("decode_tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn p6_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let mut bytes = format!("P6\n{width} {height}\n255\n").into_bytes();
        for _ in 0..width * height {
            bytes.extend_from_slice(&rgb);
        }
        bytes
    }

    #[test]
    fn decode_frame_reads_binary_ppm() {
        let path = scratch_file("red.ppm");
        std::fs::write(&path, p6_bytes(3, 2, [255, 0, 0])).unwrap();

        let frame = decode_frame(&path).unwrap();
        assert_eq!(frame.width, 3);
        assert_eq!(frame.height, 2);
        assert_eq!(frame.data.len(), 3 * 2 * 4);
        assert_eq!(&frame.data[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn decode_frame_rejects_invalid_content() {
        let path = scratch_file("garbage.ppm");
        std::fs::write(&path, b"not a ppm at all").unwrap();

        let err = decode_frame(&path).unwrap_err();
        assert!(matches!(err, FlipbookError::Decode(_)));
    }

    #[test]
    fn decode_frame_rejects_missing_file() {
        let err = decode_frame(Path::new("target/decode_tests/nope.ppm")).unwrap_err();
        assert!(matches!(err, FlipbookError::Decode(_)));
    }
}
