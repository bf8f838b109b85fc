use std::path::Path;

use crate::{
    collect::{FRAME_SUFFIX, collect_frames},
    decode::decode_frame,
    encode_gif::{EncodeConfig, GifEncoder},
    error::{FlipbookError, FlipbookResult},
};

/// Summary of one completed run.
#[derive(Clone, Copy, Debug)]
pub struct AssembleStats {
    pub frames: u64,
    pub width: u32,
    pub height: u32,
}

/// Runs the whole pipeline once: collect, decode each frame in order,
/// encode into one animated GIF at `out_path`.
///
/// The first frame fixes the output dimensions. Frames are decoded and
/// handed to the encoder one at a time; the first error aborts the run
/// (no retry, no partial-success mode). A directory with zero matching
/// frames is an error.
#[tracing::instrument(skip_all, fields(dir = %dir.display(), out = %out_path.display()))]
pub fn assemble(
    dir: &Path,
    out_path: &Path,
    frame_duration_secs: f64,
) -> FlipbookResult<AssembleStats> {
    let paths = collect_frames(dir)?;
    if paths.is_empty() {
        return Err(FlipbookError::validation(format!(
            "no '{FRAME_SUFFIX}' frames found in '{}'",
            dir.display()
        )));
    }
    tracing::debug!(frames = paths.len(), "collected frames");

    let first = decode_frame(&paths[0])?;
    let (width, height) = (first.width, first.height);

    let mut encoder = GifEncoder::new(EncodeConfig {
        width,
        height,
        frame_duration_secs,
        out_path: out_path.to_path_buf(),
    })?;

    encoder.encode_frame(first)?;
    for path in &paths[1..] {
        encoder.encode_frame(decode_frame(path)?)?;
    }
    encoder.finish()?;

    Ok(AssembleStats {
        frames: paths.len() as u64,
        width,
        height,
    })
}
