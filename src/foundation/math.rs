use crate::foundation::core::DVec3;

/// Smallest extent the planner divides by. Anything below is treated as degenerate.
pub const EXTENT_EPSILON: f64 = 1e-6;

/// Default float tolerance for geometric comparisons.
pub const TOLERANCE: f64 = 1e-9;

pub(crate) fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// `max(x, EXTENT_EPSILON)`, plus whether clamping happened.
pub(crate) fn clamp_extent(x: f64) -> (f64, bool) {
    if x < EXTENT_EPSILON {
        (EXTENT_EPSILON, true)
    } else {
        (x, false)
    }
}

/// Hermite smoothstep `3t^2 - 2t^3` on clamped `t`.
pub(crate) fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Euler XYZ rotation (radians) that points a camera's local -Z axis along `dir`, keeping
/// world +Z as up. A straight-down or straight-up direction yields zero yaw.
pub(crate) fn track_to_euler(dir: DVec3) -> DVec3 {
    let d = dir.normalize_or_zero();
    if d == DVec3::ZERO {
        return DVec3::ZERO;
    }
    let horizontal = (d.x * d.x + d.y * d.y).sqrt();
    // Pitch from straight down (-Z), so a level camera has x = 90 degrees.
    let pitch = horizontal.atan2(-d.z);
    let yaw = if horizontal <= TOLERANCE {
        0.0
    } else {
        d.y.atan2(d.x) - std::f64::consts::FRAC_PI_2
    };
    DVec3::new(pitch, 0.0, yaw)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
