//! animus is an algebraic animation-composition engine.
//!
//! An [`Animation`] is a pure function from normalized progress (`[0, 1]`) to a value,
//! with a finite duration. Animations compose like numbers:
//!
//! - `a * b` ([`Animation::sequence`]) plays `a`, then `b`.
//! - `a + b` ([`Animation::parallel`]) plays both at once and merges their values with a
//!   [`Semigroup`], typically a [`FloatAverage`] so overlapping writes to the same
//!   property blend.
//! - [`Animation::Trivial`] is the identity of `*`; [`Animation::Cancelled`] is the
//!   identity of `+` and annihilates `*`.
//!
//! Scenes are declared as a [`FreeSemiring`] of named fragments and interpreted into one
//! animation, or laid out as `(name, start, end)` intervals for timeline views.
//!
//! The core is side-effect free. Presentation layers attach effects with
//! [`Animation::effect`] / [`Animation::bind`] and drive sampling either with a tick
//! based [`Scheduler`] or headlessly with [`render_to_sink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod algebra;
mod animation;
mod composition;
mod driver;
mod foundation;

pub use algebra::average::{Average, AverageScalar, FloatAverage, Tuple2};
pub use algebra::semigroup::{Monoid, Semigroup, Semiring};
pub use animation::anim::{Animation, Runnable, ap, constant, lift2, zip};
pub use animation::ease::Ease;
pub use animation::tween::{Lerp, linear, tween};
pub use composition::free::FreeSemiring;
pub use composition::scene::{FragmentInterval, Scene, SceneFragment, TimelineTrack};
pub use driver::render::{RenderOpts, frame_intervals, render_to_sink, sample_evenly};
pub use driver::scheduler::{Scheduler, SchedulerHandle, SchedulerOpts, TickReport};
pub use driver::sink::{FrameRecord, FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{
    Duration, Fps, FrameIndex, PROGRESS_EPSILON, Progress, checked_duration, checked_progress,
};
pub use foundation::error::{AnimusError, AnimusResult};
