use crate::{
    animation::anim::Animation,
    foundation::core::{Duration, Progress, checked_duration},
    foundation::error::{AnimusError, AnimusResult},
};
use std::sync::mpsc::{self, Receiver, Sender};

/// Scheduler configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerOpts {
    /// Stop sampling after this many ticks. `None` runs forever.
    pub max_ticks: Option<u64>,
}

/// What one [`Scheduler::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Animations activated from the append queue on this tick.
    pub started: usize,
    /// Animations sampled on this tick.
    pub sampled: usize,
    /// Animations that received their final sample and were removed.
    pub finished: usize,
    /// Animations whose sample failed and were skipped for this tick.
    pub skipped: usize,
    /// The tick cap was exceeded; nothing was sampled.
    pub halted: bool,
}

struct Active {
    start: Duration,
    animation: Animation<()>,
}

/// Cloneable, `Send` handle for appending animations from outside the tick loop.
///
/// Appends are queued and picked up by the next [`Scheduler::tick`], so the active set
/// is never modified while it is being sampled.
#[derive(Clone)]
pub struct SchedulerHandle {
    tx: Sender<Animation<()>>,
}

impl SchedulerHandle {
    /// Queue `animation`; it starts on the next tick. Zero-duration animations are
    /// ignored and non-finite ones are rejected.
    pub fn append(&self, animation: Animation<()>) -> AnimusResult<()> {
        let Some(animation) = admit(animation)? else {
            return Ok(());
        };
        self.tx
            .send(animation)
            .map_err(|_| AnimusError::Other(anyhow::anyhow!("scheduler has been dropped")))
    }
}

/// Samples running effectful animations once per tick and retires them when done.
///
/// On each tick an animation that started at `start` is sampled at
/// `(now - start) / duration`. Once that exceeds `1` it is sampled one last time at
/// exactly `1` and removed.
pub struct Scheduler {
    opts: SchedulerOpts,
    active: Vec<Active>,
    tx: Sender<Animation<()>>,
    rx: Receiver<Animation<()>>,
    ticks: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerOpts::default())
    }
}

impl Scheduler {
    /// Create an idle scheduler.
    pub fn new(opts: SchedulerOpts) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            opts,
            active: Vec::new(),
            tx,
            rx,
            ticks: 0,
        }
    }

    /// Handle for appending from other threads or callbacks.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            tx: self.tx.clone(),
        }
    }

    /// Queue `animation`; it starts on the next tick. Zero-duration animations are
    /// ignored. An animation whose duration overflowed to infinity would never finish,
    /// so it is rejected with [`AnimusError::InvalidDuration`].
    pub fn append(&mut self, animation: Animation<()>) -> AnimusResult<()> {
        let Some(animation) = admit(animation)? else {
            return Ok(());
        };
        // `self` owns the receiver, so the channel cannot be disconnected here.
        let _ = self.tx.send(animation);
        Ok(())
    }

    /// Number of running animations (not counting queued appends).
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Return `true` once the tick cap has been exceeded.
    pub fn is_halted(&self) -> bool {
        self.opts.max_ticks.is_some_and(|max| self.ticks > max)
    }

    /// Advance to time `now`: activate queued appends, then sample every running
    /// animation and retire the finished ones.
    pub fn tick(&mut self, now: Duration) -> TickReport {
        self.ticks += 1;
        let mut report = TickReport::default();
        if self.is_halted() {
            report.halted = true;
            return report;
        }

        while let Ok(animation) = self.rx.try_recv() {
            self.active.push(Active {
                start: now,
                animation,
            });
            report.started += 1;
        }

        self.active.retain(|entry| {
            let elapsed = elapsed_progress(now, entry.start, entry.animation.duration());
            let done = elapsed > 1.0;
            let t = if done { 1.0 } else { elapsed };
            match entry.animation.value(t) {
                Ok(()) => report.sampled += 1,
                Err(err) => {
                    tracing::warn!(%err, t, "skipping animation sample");
                    report.skipped += 1;
                }
            }
            if done {
                tracing::debug!(duration = entry.animation.duration(), "animation finished");
                report.finished += 1;
            }
            !done
        });

        report
    }
}

// `None` for animations with nothing to schedule.
fn admit(animation: Animation<()>) -> AnimusResult<Option<Animation<()>>> {
    if animation.duration() <= 0.0 {
        tracing::debug!(?animation, "ignoring zero-duration append");
        return Ok(None);
    }
    checked_duration(animation.duration())?;
    Ok(Some(animation))
}

fn elapsed_progress(now: Duration, start: Duration, duration: Duration) -> Progress {
    ((now - start) / duration).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/scheduler.rs"]
mod tests;
