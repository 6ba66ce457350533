use crate::{
    animation::ease::Ease,
    foundation::core::{DVec3, FrameIndex},
    foundation::error::{CamrigError, CamrigResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for DVec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        DVec3::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

/// One keyframe in a keyframed channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Frame this key is bound to.
    pub frame: FrameIndex,
    /// Value at `frame`.
    pub value: T,
    /// Easing function applied toward the next keyframe.
    pub ease: Ease, // ease applied toward next key
}

/// Piecewise keyframed channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keyframes sorted by strictly increasing `frame`.
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Validate that there is at least one key and frames strictly increase.
    pub fn validate(&self) -> CamrigResult<()> {
        if self.keys.is_empty() {
            return Err(CamrigError::invalid_configuration(
                "keyframes must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 < w[1].frame.0) {
            return Err(CamrigError::invalid_configuration(
                "keyframe frames must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Sample the channel at `frame`, holding the first/last value outside the keyed range.
    pub fn sample(&self, frame: FrameIndex) -> CamrigResult<T> {
        if self.keys.is_empty() {
            return Err(CamrigError::invalid_configuration("keyframes has no keys"));
        }

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
