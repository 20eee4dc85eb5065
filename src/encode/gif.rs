use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::RgbFrame;
use crate::foundation::error::{CamoError, CamoResult};

/// Options for [`GifSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifSinkOpts {
    /// Display time of each frame.
    pub frame_delay_ms: u32,
    /// Black rows added above every frame (room for a caption strip).
    pub top_margin: u32,
    /// Replace `path` if it already exists.
    pub overwrite: bool,
}

impl Default for GifSinkOpts {
    fn default() -> Self {
        Self {
            frame_delay_ms: 50,
            top_margin: 0,
            overwrite: true,
        }
    }
}

/// Writes frames as an endlessly looping animated GIF.
///
/// Frames are held in memory and the file is written in one go by `end`, so an aborted or
/// failed run never leaves a truncated GIF at `path`.
pub struct GifSink {
    path: PathBuf,
    opts: GifSinkOpts,
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    frames_written: usize,
}

impl GifSink {
    pub fn new(path: impl Into<PathBuf>, opts: GifSinkOpts) -> Self {
        Self {
            path: path.into(),
            opts,
            cfg: None,
            frames: Vec::new(),
            frames_written: 0,
        }
    }

    /// Frames in the last successfully written file.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    fn to_rgba(&self, frame: &RgbFrame) -> RgbaImage {
        let margin = self.opts.top_margin;
        let mut img = RgbaImage::from_pixel(frame.width, frame.height + margin, Rgba([0, 0, 0, 255]));
        for (i, px) in frame.data.chunks_exact(3).enumerate() {
            let x = (i % frame.width as usize) as u32;
            let y = (i / frame.width as usize) as u32 + margin;
            img.put_pixel(x, y, Rgba([px[0], px[1], px[2], 255]));
        }
        img
    }

    fn encode(frames: Vec<Frame>) -> CamoResult<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| CamoError::encode(format!("gif repeat: {e}")))?;
            encoder
                .encode_frames(frames)
                .map_err(|e| CamoError::encode(format!("encode gif frames: {e}")))?;
            // Dropping the encoder appends the trailer to `bytes`.
        }
        Ok(bytes)
    }

    fn write_file(&self, bytes: &[u8]) -> CamoResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CamoError::encode(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        let mut file = File::create(&self.path).map_err(|e| {
            CamoError::encode(format!("create '{}': {e}", self.path.display()))
        })?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| CamoError::encode(format!("write '{}': {e}", self.path.display())))
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> CamoResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(CamoError::encode("gif frames must be non-empty"));
        }
        if self.path.exists() && !self.opts.overwrite {
            return Err(CamoError::encode(format!(
                "output '{}' exists and overwrite is disabled",
                self.path.display()
            )));
        }
        tracing::debug!(path = %self.path.display(), ?cfg, "gif sink opened");

        self.frames = Vec::with_capacity(cfg.frame_count);
        self.cfg = Some(cfg);
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &RgbFrame) -> CamoResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| CamoError::encode("push_frame called before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(CamoError::encode(format!(
                "frame {idx} is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let img = self.to_rgba(frame);
        let delay = Delay::from_numer_denom_ms(self.opts.frame_delay_ms, 1);
        self.frames.push(Frame::from_parts(img, 0, 0, delay));
        Ok(())
    }

    fn end(&mut self) -> CamoResult<()> {
        if self.cfg.take().is_none() {
            return Err(CamoError::encode("end called before begin"));
        }
        let frames = std::mem::take(&mut self.frames);
        let count = frames.len();
        let bytes = Self::encode(frames)?;
        self.write_file(&bytes)?;
        self.frames_written = count;
        tracing::debug!(frames = count, path = %self.path.display(), "gif sink closed");
        Ok(())
    }

    fn abort(&mut self) {
        self.cfg = None;
        self.frames.clear();
        tracing::debug!(path = %self.path.display(), "gif sink aborted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
