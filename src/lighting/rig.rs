//! Named lighting presets.
//!
//! Light offsets and sizes are stored as fractions of the subject's largest extent, so a rig
//! composes the same way around a 10-unit subject as around a 0.1-unit one. Intensities are
//! relative host energy on one shared scale, so lights can be compared across kinds.

use std::str::FromStr;

use crate::{
    foundation::core::DVec3,
    foundation::error::{CamrigError, CamrigResult},
    subject::fit::SubjectExtent,
};

/// Named lighting style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingStyle {
    /// Three-point key / fill / rim.
    Studio,
    /// Sun plus a soft sky fill.
    Outdoor,
    /// One hard key and a faint rim.
    Dramatic,
}

impl LightingStyle {
    /// Style name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::Outdoor => "outdoor",
            Self::Dramatic => "dramatic",
        }
    }
}

impl FromStr for LightingStyle {
    type Err = CamrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "studio" => Ok(Self::Studio),
            "outdoor" => Ok(Self::Outdoor),
            "dramatic" => Ok(Self::Dramatic),
            other => Err(CamrigError::unknown_lighting_style(other)),
        }
    }
}

/// Light type understood by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Parallel rays (sun-like); only the direction matters to the renderer.
    Directional,
    /// Rectangular emitter with a physical size.
    Area,
}

/// One light of a rig, in subject-relative units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightDescriptor {
    /// Host object name.
    pub name: String,
    /// Light type.
    pub kind: LightKind,
    /// Offset from the subject centre, in multiples of the subject's largest extent.
    pub offset: DVec3,
    /// Relative energy, always > 0.
    pub intensity: f64,
    /// Emitter edge length in multiples of the largest extent (area lights only).
    pub size: Option<f64>,
    /// Linear RGB tint.
    pub color: [f64; 3],
    /// Angular diameter in degrees (directional lights only); small means hard shadows.
    pub angle_degrees: Option<f64>,
}

impl LightDescriptor {
    fn directional(name: &str, offset: [f64; 3], intensity: f64, angle_degrees: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: LightKind::Directional,
            offset: DVec3::from_array(offset),
            intensity,
            size: None,
            color: WHITE,
            angle_degrees: Some(angle_degrees),
        }
    }

    fn area(name: &str, offset: [f64; 3], intensity: f64, size: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: LightKind::Area,
            offset: DVec3::from_array(offset),
            intensity,
            size: Some(size),
            color: WHITE,
            angle_degrees: None,
        }
    }

    fn tinted(mut self, color: [f64; 3]) -> Self {
        self.color = color;
        self
    }
}

const WHITE: [f64; 3] = [1.0, 1.0, 1.0];
const SKY_TINT: [f64; 3] = [0.6, 0.7, 1.0];

/// Light placed in world space around a concrete subject.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedLight {
    /// Host object name.
    pub name: String,
    /// Light type.
    pub kind: LightKind,
    /// World-space position.
    pub position: DVec3,
    /// Unit vector from the light toward the subject centre.
    pub direction: DVec3,
    /// Relative energy.
    pub intensity: f64,
    /// Emitter edge length in world units (area lights only).
    pub size: Option<f64>,
    /// Linear RGB tint.
    pub color: [f64; 3],
    /// Angular diameter in degrees (directional lights only).
    pub angle_degrees: Option<f64>,
}

/// Fixed set of lights for one style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightingRig {
    style: LightingStyle,
    lights: Vec<LightDescriptor>,
}

impl LightingRig {
    /// Rig for a known style.
    pub fn for_style(style: LightingStyle) -> Self {
        let lights = match style {
            LightingStyle::Studio => vec![
                LightDescriptor::directional("KeyLight", [0.5, -0.5, 0.8], 1000.0, 10.0),
                LightDescriptor::area("FillLight", [-0.5, -0.3, 0.5], 400.0, 0.5),
                LightDescriptor::directional("RimLight", [0.0, 0.5, 0.6], 250.0, 5.0),
            ],
            LightingStyle::Outdoor => vec![
                LightDescriptor::directional("SunLight", [0.5, -0.5, 1.0], 1200.0, 0.5),
                LightDescriptor::area("SkyLight", [0.0, 0.0, 1.0], 150.0, 1.0).tinted(SKY_TINT),
            ],
            LightingStyle::Dramatic => vec![
                LightDescriptor::directional("DramaticKey", [0.8, -0.3, 0.6], 1600.0, 1.0),
                LightDescriptor::directional("DramaticRim", [-0.4, 0.6, 0.3], 40.0, 2.0),
            ],
        };
        Self { style, lights }
    }

    /// Style this rig was built for.
    pub fn style(&self) -> LightingStyle {
        self.style
    }

    /// Lights in host creation order.
    pub fn lights(&self) -> &[LightDescriptor] {
        &self.lights
    }

    /// Resolve subject-relative offsets into world positions around `subject`.
    pub fn place(&self, subject: &SubjectExtent) -> Vec<PlacedLight> {
        let unit = subject.largest();
        let center = subject.center();
        self.lights
            .iter()
            .map(|l| {
                let position = center + l.offset * unit;
                PlacedLight {
                    name: l.name.clone(),
                    kind: l.kind,
                    position,
                    direction: (center - position).normalize_or_zero(),
                    intensity: l.intensity,
                    size: l.size.map(|s| s * unit),
                    color: l.color,
                    angle_degrees: l.angle_degrees,
                }
            })
            .collect()
    }
}

/// Look up the rig for a style name. Unknown names fail; there is no fallback style.
pub fn select(style: &str) -> CamrigResult<LightingRig> {
    let style = style.parse::<LightingStyle>()?;
    Ok(LightingRig::for_style(style))
}

#[cfg(test)]
#[path = "../../tests/unit/lighting/rig.rs"]
mod tests;
