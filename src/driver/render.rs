use crate::{
    animation::anim::Animation,
    driver::sink::{FrameSink, SinkConfig},
    foundation::core::{Duration, Fps, FrameIndex, Progress, checked_duration},
    foundation::error::{AnimusError, AnimusResult},
};

/// Options for a headless render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOpts {
    /// Capture rate; the number of frame intervals is `floor(duration * fps)`.
    pub fps: Fps,
}

/// Number of frame intervals for `duration` at `fps`. At least one, so that both
/// endpoints are always captured.
pub fn frame_intervals(duration: Duration, fps: Fps) -> u64 {
    fps.whole_frames(duration).max(1)
}

fn step_progress(step: u64, intervals: u64) -> Progress {
    (step as f64 / intervals as f64).min(1.0)
}

/// Sample `anim` at `steps` evenly spaced fractions from `0` to `1` inclusive.
pub fn sample_evenly<A>(anim: &Animation<A>, steps: u64) -> AnimusResult<Vec<A>> {
    if steps < 2 {
        return Err(AnimusError::validation(
            "sample_evenly needs at least 2 steps to cover both endpoints",
        ));
    }
    let intervals = steps - 1;
    (0..steps)
        .map(|step| anim.value(step_progress(step, intervals)))
        .collect()
}

/// Step through `anim` frame by frame and push every sample into `sink`.
///
/// Frames are captured at `k / n` for `k` in `0..=n`, where `n` is
/// [`frame_intervals`]. Returns the number of frames pushed.
#[tracing::instrument(skip(anim, sink))]
pub fn render_to_sink<A>(
    anim: &Animation<A>,
    opts: RenderOpts,
    sink: &mut dyn FrameSink<A>,
) -> AnimusResult<u64> {
    if !anim.is_runnable() {
        return Err(AnimusError::undefined_sample(format!(
            "nothing to render: {anim:?} has no duration"
        )));
    }
    let duration = checked_duration(anim.duration())?;
    let intervals = frame_intervals(duration, opts.fps);
    let frames = intervals
        .checked_add(1)
        .ok_or_else(|| AnimusError::validation(format!("{duration} is too long to render")))?;
    sink.begin(SinkConfig {
        fps: opts.fps,
        duration,
        frames,
    })?;
    for step in 0..=intervals {
        let t = step_progress(step, intervals);
        let value = anim.value(t)?;
        sink.push_frame(FrameIndex(step), t, value)?;
    }
    sink.end()?;
    tracing::debug!(frames, "headless render complete");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/render.rs"]
mod tests;
