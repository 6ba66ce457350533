//! Subject fitting: normalize an image or mesh to a reference size centred on the origin.

use serde::Deserialize;

use crate::{
    foundation::core::DVec3,
    foundation::error::{CamrigError, CamrigResult},
    foundation::math::{EXTENT_EPSILON, clamp_extent},
    subject::probe::{SubjectKind, SubjectProbe},
};

/// Transform the host applies to the raw subject so it matches its [`SubjectExtent`].
///
/// Applied as `p' = p * scale + translation`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation after scaling; re-centres the subject on the origin.
    pub translation: DVec3,
}

/// Fitted subject dimensions in world units.
///
/// Axes follow a Z-up host: `width` along X, `depth` along Y, `height` along Z. Images stand
/// upright in the XZ plane with `depth == 0`.
///
/// Only the largest axis has to be positive. A flat mesh (one lying in the XY plane) keeps
/// `height == 0`; turntables are governed by [`SubjectExtent::largest`], and anything that
/// divides by the height clamps it to [`crate::EXTENT_EPSILON`] first.
///
/// Deserializing re-runs the checks of [`SubjectExtent::new`] and recomputes `aspect_ratio`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SubjectExtent {
    kind: SubjectKind,
    width: f64,
    height: f64,
    depth: f64,
    center: DVec3,
    aspect_ratio: f64,
    placement: Placement,
}

impl SubjectExtent {
    /// Build an extent directly, e.g. from a host that already normalized the subject.
    ///
    /// Dimensions must be finite and non-negative with at least one positive axis. Near-zero
    /// axes are accepted; the planner clamps and warns about them.
    pub fn new(
        kind: SubjectKind,
        width: f64,
        height: f64,
        depth: f64,
        center: DVec3,
    ) -> CamrigResult<Self> {
        for (name, v) in [("width", width), ("height", height), ("depth", depth)] {
            if !v.is_finite() || v < 0.0 {
                return Err(CamrigError::invalid_geometry(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !center.is_finite() {
            return Err(CamrigError::invalid_geometry("center must be finite"));
        }
        if width.max(height).max(depth) < EXTENT_EPSILON {
            return Err(CamrigError::invalid_geometry(
                "subject has no extent along any axis",
            ));
        }
        Ok(Self {
            kind,
            width,
            height,
            depth,
            center,
            aspect_ratio: width / clamp_extent(height).0,
            placement: Placement {
                scale: 1.0,
                translation: DVec3::ZERO,
            },
        })
    }

    /// Image plane or mesh.
    pub fn kind(&self) -> SubjectKind {
        self.kind
    }

    /// Extent along X.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along Z.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Extent along Y (`0` for images).
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Subject centre in world space.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Largest extent along any axis.
    pub fn largest(&self) -> f64 {
        self.width.max(self.height).max(self.depth)
    }

    /// Transform that maps the raw subject onto this extent.
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

impl<'de> Deserialize<'de> for SubjectExtent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            kind: SubjectKind,
            width: f64,
            height: f64,
            depth: f64,
            center: DVec3,
            placement: Placement,
        }

        let r = Repr::deserialize(deserializer)?;
        let mut extent = Self::new(r.kind, r.width, r.height, r.depth, r.center)
            .map_err(serde::de::Error::custom)?;
        let Placement { scale, translation } = r.placement;
        if !scale.is_finite() || scale <= 0.0 || !translation.is_finite() {
            return Err(serde::de::Error::custom(
                "subject placement needs a finite positive scale and finite translation",
            ));
        }
        extent.placement = r.placement;
        Ok(extent)
    }
}

/// Fit `probe` so its governing axis equals `reference_size`, centred on the origin.
///
/// Images are scaled so their height is `reference_size`; meshes so their largest axis is.
#[tracing::instrument(skip(probe))]
pub fn fit(probe: &SubjectProbe, reference_size: f64) -> CamrigResult<SubjectExtent> {
    if !reference_size.is_finite() || reference_size <= 0.0 {
        return Err(CamrigError::invalid_configuration(format!(
            "reference size must be > 0, got {reference_size}"
        )));
    }

    let extent = match probe {
        SubjectProbe::Image { pixels } => {
            let (w, h) = (pixels.width, pixels.height);
            if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
                return Err(CamrigError::invalid_geometry(format!(
                    "image dimensions must be positive, got {w}x{h}"
                )));
            }
            let aspect = w / h;
            SubjectExtent {
                kind: SubjectKind::Image,
                width: reference_size * aspect,
                height: reference_size,
                depth: 0.0,
                center: DVec3::ZERO,
                aspect_ratio: aspect,
                placement: Placement {
                    scale: reference_size / h,
                    translation: DVec3::ZERO,
                },
            }
        }
        SubjectProbe::Mesh { bounds } => {
            if !bounds.min.is_finite() || !bounds.max.is_finite() {
                return Err(CamrigError::invalid_geometry("mesh bounds must be finite"));
            }
            let size = bounds.size();
            if size.min_element() < 0.0 {
                return Err(CamrigError::invalid_geometry(
                    "mesh bounds min corner exceeds max corner",
                ));
            }
            let largest = size.max_element();
            if largest < EXTENT_EPSILON {
                return Err(CamrigError::invalid_geometry(
                    "mesh bounds are degenerate (zero extent on every axis)",
                ));
            }
            let scale = reference_size / largest;
            let scaled = size * scale;
            SubjectExtent {
                kind: SubjectKind::Mesh,
                width: scaled.x,
                height: scaled.z,
                depth: scaled.y,
                center: DVec3::ZERO,
                aspect_ratio: scaled.x / clamp_extent(scaled.z).0,
                placement: Placement {
                    scale,
                    translation: -bounds.center() * scale,
                },
            }
        }
    };

    tracing::debug!(
        width = extent.width,
        height = extent.height,
        depth = extent.depth,
        scale = extent.placement.scale,
        "fitted subject"
    );
    Ok(extent)
}

#[cfg(test)]
#[path = "../../tests/unit/subject/fit.rs"]
mod tests;
