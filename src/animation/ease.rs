/// Easing curves used to reshape normalized animation progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1` and is monotonic in between, so an eased
/// animation keeps its start and end values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// `t^n` ease-in; exponents below 1 behave as 1.
    InPow(u8),
    /// `1 - (1 - t)^n` ease-out; exponents below 1 behave as 1.
    OutPow(u8),
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Ease {
    fn shape(self) -> (Shape, i32) {
        match self {
            Self::Linear => (Shape::In, 1),
            Self::InQuad => (Shape::In, 2),
            Self::OutQuad => (Shape::Out, 2),
            Self::InOutQuad => (Shape::InOut, 2),
            Self::InCubic => (Shape::In, 3),
            Self::OutCubic => (Shape::Out, 3),
            Self::InOutCubic => (Shape::InOut, 3),
            Self::InPow(n) => (Shape::In, i32::from(n.max(1))),
            Self::OutPow(n) => (Shape::Out, i32::from(n.max(1))),
        }
    }

    /// Reshape progress `t`; input outside `[0, 1]` is clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let (shape, n) = self.shape();
        match shape {
            Shape::In => t.powi(n),
            Shape::Out => 1.0 - (1.0 - t).powi(n),
            // Each half is the in-curve squeezed into half the range; the second half is
            // mirrored through (0.5, 0.5).
            Shape::InOut if t < 0.5 => 0.5 * (2.0 * t).powi(n),
            Shape::InOut => 1.0 - 0.5 * (2.0 - 2.0 * t).powi(n),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
