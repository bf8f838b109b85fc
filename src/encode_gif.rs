use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    time::Duration,
};

use image::{Delay, Frame, RgbaImage, codecs::gif};

use crate::{
    decode::FrameRGBA,
    error::{FlipbookError, FlipbookResult},
};

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    pub frame_duration_secs: f64,
    pub out_path: PathBuf,
}

impl EncodeConfig {
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FlipbookError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if !self.frame_duration_secs.is_finite() || self.frame_duration_secs <= 0.0 {
            return Err(FlipbookError::validation(
                "frame duration must be a positive number of seconds",
            ));
        }
        Ok(())
    }

    /// Uniform per-frame delay. The GIF container rounds this to
    /// centiseconds (0.2s becomes 20cs).
    pub fn frame_delay(&self) -> Delay {
        Delay::from_saturating_duration(Duration::from_secs_f64(self.frame_duration_secs))
    }
}

pub fn ensure_parent_dir(path: &Path) -> FlipbookResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            FlipbookError::output_write(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Writes an animated GIF one frame at a time.
///
/// All frames must match the configured dimensions; the artifact loops
/// forever. The output file is created (and truncated) up front, so an
/// aborted run may leave a partial file behind.
pub struct GifEncoder {
    cfg: EncodeConfig,
    delay: Delay,
    inner: gif::GifEncoder<BufWriter<File>>,
    frames_written: u64,
}

impl GifEncoder {
    pub fn new(cfg: EncodeConfig) -> FlipbookResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        let file = File::create(&cfg.out_path).map_err(|e| {
            FlipbookError::output_write(format!(
                "failed to create output file '{}': {e}",
                cfg.out_path.display()
            ))
        })?;

        let mut inner = gif::GifEncoder::new(BufWriter::new(file));
        inner.set_repeat(gif::Repeat::Infinite).map_err(|e| {
            FlipbookError::output_write(format!(
                "failed to set loop behavior for '{}': {e}",
                cfg.out_path.display()
            ))
        })?;

        Ok(Self {
            delay: cfg.frame_delay(),
            cfg,
            inner,
            frames_written: 0,
        })
    }

    pub fn encode_frame(&mut self, frame: FrameRGBA) -> FlipbookResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(FlipbookError::frame_mismatch(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }

        let buffer =
            RgbaImage::from_raw(frame.width, frame.height, frame.data).ok_or_else(|| {
                FlipbookError::frame_mismatch("frame data size mismatch with width*height*4")
            })?;

        self.inner
            .encode_frame(Frame::from_parts(buffer, 0, 0, self.delay))
            .map_err(|e| {
                FlipbookError::output_write(format!(
                    "failed to encode frame {} into '{}': {e}",
                    self.frames_written,
                    self.cfg.out_path.display()
                ))
            })?;

        self.frames_written += 1;
        Ok(())
    }

    pub fn finish(self) -> FlipbookResult<()> {
        // Dropping the inner encoder writes the container trailer and
        // releases the file handle.
        drop(self.inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(width: u32, height: u32, secs: f64) -> EncodeConfig {
        EncodeConfig {
            width,
            height,
            frame_duration_secs: secs,
            out_path: PathBuf::from("target/encode_tests/out.gif"),
        }
    }

    #[test]
    fn config_validation_catches_bad_values() {
        assert!(cfg(0, 10, 0.2).validate().is_err());
        assert!(cfg(10, 0, 0.2).validate().is_err());
        assert!(cfg(10, 10, 0.0).validate().is_err());
        assert!(cfg(10, 10, -1.0).validate().is_err());
        assert!(cfg(10, 10, f64::NAN).validate().is_err());
        assert!(cfg(10, 10, f64::INFINITY).validate().is_err());
        assert!(cfg(10, 10, 0.2).validate().is_ok());
    }

    #[test]
    fn frame_delay_converts_seconds_to_millis() {
        assert_eq!(cfg(10, 10, 0.2).frame_delay().numer_denom_ms(), (200, 1));
        assert_eq!(cfg(10, 10, 1.0).frame_delay().numer_denom_ms(), (1000, 1));
    }

    #[test]
    fn mismatched_frame_is_rejected_before_any_write() {
        let mut enc = GifEncoder::new(EncodeConfig {
            out_path: PathBuf::from("target/encode_tests/mismatch.gif"),
            ..cfg(4, 4, 0.1)
        })
        .unwrap();

        let err = enc
            .encode_frame(FrameRGBA {
                width: 2,
                height: 2,
                data: vec![0; 2 * 2 * 4],
            })
            .unwrap_err();
        assert!(matches!(err, FlipbookError::FrameMismatch(_)));
    }
}
