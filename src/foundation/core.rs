use crate::foundation::error::{CamrigError, CamrigResult};

pub use glam::DVec3;
pub use kurbo::Size;

/// Host frame number.
///
/// Planned animations are 1-based: the first keyframe of every path sits at `FrameIndex(1)`,
/// matching the host's default scene start frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// First frame of every planned animation.
    pub const FIRST: Self = Self(1);

    /// Normalized time of this frame within `[1, frame_count]`.
    ///
    /// Returns `0.0` for the first frame and `1.0` for the last; frames outside are clamped.
    pub fn normalized(self, frame_count: u64) -> f64 {
        if frame_count <= 1 {
            return 0.0;
        }
        let f = self.0.clamp(1, frame_count);
        ((f - 1) as f64) / ((frame_count - 1) as f64)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated frame rate with non-zero numerator and denominator.
    pub fn new(num: u32, den: u32) -> CamrigResult<Self> {
        if den == 0 {
            return Err(CamrigError::invalid_configuration("fps den must be > 0"));
        }
        if num == 0 {
            return Err(CamrigError::invalid_configuration("fps must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Integer frame rate (`num/1`).
    pub fn whole(fps: u32) -> CamrigResult<Self> {
        Self::new(fps, 1)
    }

    /// Frame rate as floating-point frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count into seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a validated resolution with positive dimensions.
    pub fn new(width: u32, height: u32) -> CamrigResult<Self> {
        if width == 0 || height == 0 {
            return Err(CamrigError::invalid_configuration(format!(
                "resolution must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }

    /// Dimensions after applying a host resolution percentage (`1..=100`).
    pub fn scaled(self, percentage: u8) -> Self {
        let p = u64::from(percentage.clamp(1, 100));
        // At most 100% of a u32, so the narrowing never truncates.
        let scale = |v: u32| ((u64::from(v) * p / 100) as u32).max(1);
        Self {
            width: scale(self.width),
            height: scale(self.height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
