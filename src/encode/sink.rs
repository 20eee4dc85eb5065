use crate::foundation::core::RgbFrame;
use crate::foundation::error::{CamoError, CamoResult};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
}

/// Consumer of generated frames.
///
/// Ordering contract: `begin` once, then `push_frame` with indices `0, 1, 2, ...`, then either
/// `end` once or, when generation fails part-way, `abort` once.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> CamoResult<()>;
    /// Push one frame in generation order.
    fn push_frame(&mut self, idx: usize, frame: &RgbFrame) -> CamoResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> CamoResult<()>;
    /// Discard everything pushed since `begin`; no partial output may survive.
    fn abort(&mut self) {}
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<RgbFrame>,
    finished: bool,
    aborted: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames in generation order.
    pub fn frames(&self) -> &[RgbFrame] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// `true` once `abort` has been called since the last `begin`.
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    pub fn into_frames(self) -> Vec<RgbFrame> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CamoResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        self.aborted = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &RgbFrame) -> CamoResult<()> {
        if idx != self.frames.len() {
            return Err(CamoError::encode(format!(
                "frame {idx} pushed out of order (expected {})",
                self.frames.len()
            )));
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> CamoResult<()> {
        self.finished = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
        self.aborted = true;
    }
}
