use crate::foundation::math::smoothstep;

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant-velocity interpolation.
    Linear,
    /// Ease-in, near-linear middle, ease-out (`3t^2 - 2t^3`).
    ///
    /// Matches the shape a host produces for two auto-handle bezier keys.
    SmoothStep,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => smoothstep(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
