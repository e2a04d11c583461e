use crate::{
    algebra::average::FloatAverage,
    algebra::semigroup::Semiring,
    animation::anim::Animation,
    animation::tween::linear,
    composition::free::FreeSemiring,
    foundation::core::Duration,
    foundation::error::AnimusResult,
};

/// A named piece of a scene.
#[derive(Clone, Debug)]
pub struct SceneFragment {
    /// Label shown on timelines.
    pub name: String,
    /// Effectful animation played for this fragment.
    pub animation: Animation<()>,
}

impl SceneFragment {
    /// Create a fragment.
    pub fn new(name: impl Into<String>, animation: Animation<()>) -> Self {
        Self {
            name: name.into(),
            animation,
        }
    }
}

/// Where a fragment sits on the scene timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FragmentInterval {
    /// Fragment label.
    pub name: String,
    /// Start time, in the scene's time units.
    pub start: Duration,
    /// End time (`start + fragment duration`).
    pub end: Duration,
}

/// Timeline row for one fragment: its interval plus a fill animation that runs
/// `0 -> 1` across the interval.
#[derive(Clone, Debug)]
pub struct TimelineTrack {
    /// Fragment interval.
    pub interval: FragmentInterval,
    /// Fill fraction, held at `0` until the interval starts and lasting until it ends;
    /// [`Animation::Trivial`] for empty intervals.
    pub fill: Animation<FloatAverage<f64>>,
}

/// Declarative scene: fragments combined in sequence and in parallel.
#[derive(Clone, Debug)]
pub struct Scene {
    fragments: FreeSemiring<SceneFragment>,
}

impl Scene {
    /// Wrap a fragment tree.
    pub fn new(fragments: FreeSemiring<SceneFragment>) -> Self {
        Self { fragments }
    }

    /// The fragment tree.
    pub fn fragments(&self) -> &FreeSemiring<SceneFragment> {
        &self.fragments
    }

    /// The combined effectful animation of every fragment.
    pub fn animation(&self) -> Animation<()> {
        self.fragments.map(|f| f.animation.clone()).interpret()
    }

    /// `(name, start, end)` of every fragment, in pre-order.
    ///
    /// Both branches of a parallel node start together; the right branch of a sequence
    /// starts at the latest end reached inside the left one. Identities take no time.
    /// Subtrees that [`Scene::animation`] annihilates to [`Animation::Cancelled`] (a
    /// sequence containing `Zero` or a cancelled fragment) report no intervals.
    pub fn intervals(&self) -> Vec<FragmentInterval> {
        let mut out = Vec::with_capacity(self.fragments.len());
        layout(&self.fragments, 0.0, &mut out);
        out
    }

    /// Latest end time of any fragment, `0` for an empty scene.
    pub fn total_duration(&self) -> Duration {
        self.intervals().iter().map(|i| i.end).fold(0.0, f64::max)
    }

    /// One timeline row per fragment, in the order of [`Scene::intervals`].
    pub fn timeline_tracks(&self) -> AnimusResult<Vec<TimelineTrack>> {
        self.intervals()
            .into_iter()
            .map(|interval| {
                let span = interval.end - interval.start;
                let fill = if span > 0.0 {
                    linear(0.0, 1.0, span)?.delayed(interval.start)?
                } else {
                    Animation::one()
                };
                Ok(TimelineTrack { interval, fill })
            })
            .collect()
    }
}

// Returns the time at which `node` ends when it starts at `start`.
fn layout(
    node: &FreeSemiring<SceneFragment>,
    start: Duration,
    out: &mut Vec<FragmentInterval>,
) -> Duration {
    if cancels(node) {
        return start;
    }
    match node {
        FreeSemiring::One | FreeSemiring::Zero => start,
        FreeSemiring::Single(f) => {
            let end = start + f.animation.duration();
            out.push(FragmentInterval {
                name: f.name.clone(),
                start,
                end,
            });
            end
        }
        FreeSemiring::Plus(l, r) => {
            let l_end = layout(l, start, out);
            let r_end = layout(r, start, out);
            l_end.max(r_end)
        }
        FreeSemiring::Times(l, r) => {
            let l_end = layout(l, start, out);
            layout(r, l_end, out)
        }
    }
}

// Mirrors the annihilation rules of `Animation::sequence` and `Animation::parallel`.
fn cancels(node: &FreeSemiring<SceneFragment>) -> bool {
    match node {
        FreeSemiring::Zero => true,
        FreeSemiring::One => false,
        FreeSemiring::Single(f) => f.animation.is_cancelled(),
        FreeSemiring::Times(l, r) => cancels(l) || cancels(r),
        FreeSemiring::Plus(l, r) => cancels(l) && cancels(r),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/scene.rs"]
mod tests;
