use crate::foundation::core::{Duration, Fps, FrameIndex, Progress};
use crate::foundation::error::AnimusResult;

/// Configuration provided to a [`FrameSink`] at the start of a headless render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    /// Capture rate.
    pub fps: Fps,
    /// Duration of the rendered animation.
    pub duration: Duration,
    /// Number of frames that will be pushed.
    pub frames: u64,
}

/// Sink contract for consuming sampled frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order,
/// after the animation has been sampled (and its effects applied) for that frame.
pub trait FrameSink<A> {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> AnimusResult<()>;
    /// Push one sampled frame.
    fn push_frame(&mut self, idx: FrameIndex, progress: Progress, value: A) -> AnimusResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> AnimusResult<()>;
}

/// One captured frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrameRecord<A> {
    /// Frame index.
    pub index: FrameIndex,
    /// Progress the animation was sampled at.
    pub progress: Progress,
    /// Sampled value.
    pub value: A,
}

/// In-memory sink for tests and debugging.
#[derive(Debug)]
pub struct InMemorySink<A> {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameRecord<A>>,
    finished: bool,
}

impl<A> Default for InMemorySink<A> {
    fn default() -> Self {
        Self {
            cfg: None,
            frames: Vec::new(),
            finished: false,
        }
    }
}

impl<A> InMemorySink<A> {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[FrameRecord<A>] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<A> FrameSink<A> for InMemorySink<A> {
    fn begin(&mut self, cfg: SinkConfig) -> AnimusResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, progress: Progress, value: A) -> AnimusResult<()> {
        self.frames.push(FrameRecord {
            index: idx,
            progress,
            value,
        });
        Ok(())
    }

    fn end(&mut self) -> AnimusResult<()> {
        self.finished = true;
        Ok(())
    }
}
